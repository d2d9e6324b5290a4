use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Submit,
    Reset,
    Quit,
    NextField,
    PrevField,
    ResetStatus,
    TogglePopup,
    Edit(KeyEvent),
    None,
}

/// Keys understood while the confirmation dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogCommand {
    ResetForm,
    Keep,
    Quit,
    None,
}

pub fn classify(key: &KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Submit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyCommand::Reset,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => KeyCommand::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyCommand::PrevField,
        KeyCode::Esc => KeyCommand::ResetStatus,
        KeyCode::Enter => KeyCommand::TogglePopup,
        _ => KeyCommand::Edit(*key),
    }
}

pub fn classify_dialog(key: &KeyEvent) -> DialogCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => DialogCommand::Keep,
            KeyCode::Char('q') | KeyCode::Char('Q') => DialogCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => DialogCommand::Quit,
            _ => DialogCommand::None,
        };
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => DialogCommand::ResetForm,
        _ => DialogCommand::None,
    }
}
