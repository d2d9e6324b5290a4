use std::{
    io::{self, Stdout},
    sync::Once,
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tracing::debug;

static RESTORE_ON_PANIC: Once = Once::new();

/// The alternate screen the form runs on. Leaving it (drop or panic) hands
/// the terminal back in cooked mode.
pub(crate) struct FormScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl FormScreen {
    pub(crate) fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            leave();
            return Err(err).context("failed to enter alternate screen");
        }
        RESTORE_ON_PANIC.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                leave();
                previous(info);
            }));
        });

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => {
                debug!("form screen entered");
                Ok(Self { terminal })
            }
            Err(err) => {
                leave();
                Err(err).context("failed to initialize terminal")
            }
        }
    }

    /// Render one frame; the buffer follows the current window size.
    pub(crate) fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal
            .draw(render)
            .context("failed to draw form")?;
        Ok(())
    }
}

impl Drop for FormScreen {
    fn drop(&mut self) {
        leave();
        debug!("form screen left");
    }
}

fn leave() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}
