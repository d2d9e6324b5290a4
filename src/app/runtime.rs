use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::{
    dialog::{DialogRow, RESET_LABEL},
    domain::{FormField, PersonalInfo},
    form::{FormController, SubmitOutcome, ValidationTicket},
    presentation::{self, DialogRender, FieldView, FieldViewKind, UiContext},
};

use super::{
    editor::{FieldFocus, edit_text, step_gender},
    input::{DialogCommand, KeyCommand, classify, classify_dialog},
    options::UiOptions,
    popup::GenderPopup,
    status::StatusLine,
    terminal::FormScreen,
};

const HELP_TEXT: &str =
    "Tab/Shift+Tab navigate • Enter choose gender • Ctrl+S submit • Ctrl+R reset • Ctrl+Q quit";

pub(crate) struct App {
    controller: FormController,
    options: UiOptions,
    title: String,
    status: StatusLine,
    focus: FieldFocus,
    popup: Option<GenderPopup>,
    pending: Vec<ValidationTicket>,
    exit_armed: bool,
    should_quit: bool,
    result: Option<PersonalInfo>,
}

impl App {
    pub fn new(controller: FormController, options: UiOptions, title: String) -> Self {
        Self {
            controller,
            options,
            title,
            status: StatusLine::new(),
            focus: FieldFocus::default(),
            popup: None,
            pending: Vec::new(),
            exit_armed: false,
            should_quit: false,
            result: None,
        }
    }

    pub fn run(&mut self) -> Result<PersonalInfo> {
        let mut screen = FormScreen::enter()?;
        while !self.should_quit {
            screen.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            // drain the burst before validating so superseded edits are skipped
            loop {
                // resizes are picked up by the next draw
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
                if self.should_quit || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
            self.flush_validations();
        }

        self.result
            .take()
            .ok_or_else(|| anyhow!("user exited without submitting"))
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let visible = self.controller.visible_fields();
        let values = self.controller.values();
        let fields: Vec<FieldView<'_>> = visible
            .iter()
            .map(|&field| {
                let error = self.controller.error(field);
                FieldView {
                    label: field.label(),
                    value: values.get(field),
                    error: (!error.is_empty()).then_some(error),
                    required: self.controller.is_required(field),
                    kind: if field == FormField::Gender {
                        FieldViewKind::Select
                    } else {
                        FieldViewKind::Text
                    },
                }
            })
            .collect();
        let focused = visible
            .iter()
            .position(|field| *field == self.focus.current())
            .unwrap_or(0);

        let dialog = self
            .controller
            .dialog()
            .filter(|dialog| dialog.is_open);
        let rows: Vec<DialogRow> = dialog.map(|dialog| dialog.rows()).unwrap_or_default();

        presentation::draw(
            frame,
            UiContext {
                title: &self.title,
                fields: &fields,
                focused,
                status_message: self.status.message(),
                dirty: self.controller.is_dirty(),
                error_count: self.controller.error_count(),
                help: self.options.show_help.then_some(HELP_TEXT),
                popup: self.popup.as_ref().map(|popup| popup.as_render()),
                dialog: dialog.map(|dialog| DialogRender {
                    title: dialog.title(),
                    rows: &rows,
                    reset_label: RESET_LABEL,
                }),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.handle_popup_key(key) {
            return;
        }

        if self.controller.is_dialog_open() {
            self.handle_dialog_key(key);
            return;
        }

        match classify(&key) {
            KeyCommand::Submit => {
                self.exit_armed = false;
                self.on_submit();
            }
            KeyCommand::Reset => {
                self.exit_armed = false;
                self.on_reset();
            }
            KeyCommand::Quit => self.on_exit(),
            KeyCommand::NextField => {
                self.focus.step(1, self.controller.show_other_gender());
                self.exit_armed = false;
            }
            KeyCommand::PrevField => {
                self.focus.step(-1, self.controller.show_other_gender());
                self.exit_armed = false;
            }
            KeyCommand::ResetStatus => {
                self.exit_armed = false;
                self.status.ready();
            }
            KeyCommand::TogglePopup => {
                if self.focus.current() == FormField::Gender {
                    self.popup = Some(GenderPopup::new(&self.controller.values().gender));
                    self.status.set_raw("Use ↑/↓ and Enter to choose");
                }
            }
            KeyCommand::Edit(event) => self.handle_field_input(&event),
            KeyCommand::None => {}
        }
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> bool {
        let Some(popup) = &mut self.popup else {
            return false;
        };
        match key.code {
            KeyCode::Esc => {
                self.popup = None;
                self.status.ready();
            }
            KeyCode::Up => popup.select_previous(),
            KeyCode::Down => popup.select_next(),
            KeyCode::Enter => {
                let selection = popup.selection().map(str::to_string);
                self.popup = None;
                if let Some(value) = selection {
                    self.set_value(FormField::Gender, value);
                    self.flush_validations();
                }
                self.status.value_updated();
            }
            _ => {}
        }
        true
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match classify_dialog(&key) {
            DialogCommand::ResetForm => {
                let signal = self.controller.dialog().map(|dialog| dialog.activate_reset());
                if let Some(signal) = signal {
                    self.controller.handle_dialog_signal(signal);
                }
                self.after_reset();
            }
            DialogCommand::Keep => {
                self.result = self.controller.submitted().cloned();
                self.should_quit = true;
            }
            DialogCommand::Quit => self.should_quit = true,
            DialogCommand::None => {}
        }
    }

    fn handle_field_input(&mut self, key: &KeyEvent) {
        let field = self.focus.current();
        let current = self.controller.values().get(field);
        let next = if field == FormField::Gender {
            step_gender(current, key)
        } else {
            edit_text(current, key)
        };
        if let Some(value) = next {
            self.exit_armed = false;
            self.status.editing(field.label());
            self.set_value(field, value);
        }
    }

    fn set_value(&mut self, field: FormField, value: String) {
        if !self.options.auto_validate {
            let _ = self.controller.begin_field_change(field, value);
        } else if field == FormField::Birthdate {
            self.controller.handle_birthdate_change(value);
        } else {
            let ticket = self.controller.begin_field_change(field, value);
            self.pending.push(ticket);
        }
        self.focus.clamp(self.controller.show_other_gender());
    }

    fn flush_validations(&mut self) {
        for ticket in std::mem::take(&mut self.pending) {
            let outcome = self.controller.resolve_validation(ticket);
            debug!(field = %ticket.field(), ?outcome, "validation resolved");
        }
    }

    fn on_submit(&mut self) {
        self.pending.clear();
        match self.controller.handle_submit() {
            SubmitOutcome::Accepted => self.status.submitted(),
            SubmitOutcome::Rejected { issues } => self.status.issues_remaining(issues),
        }
    }

    fn on_reset(&mut self) {
        self.controller.handle_reset_form();
        self.after_reset();
    }

    fn after_reset(&mut self) {
        self.pending.clear();
        self.popup = None;
        self.focus = FieldFocus::default();
        self.status.form_reset();
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.controller.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}

#[cfg(test)]
impl App {
    pub(crate) fn controller_for_test(&self) -> &FormController {
        &self.controller
    }

    pub(crate) fn handle_key_for_test(&mut self, key: KeyEvent) {
        self.handle_key(key)
    }

    pub(crate) fn flush_for_test(&mut self) -> usize {
        let pending = self.pending.len();
        self.flush_validations();
        pending
    }

    pub(crate) fn focus_for_test(&self) -> FormField {
        self.focus.current()
    }

    pub(crate) fn status_for_test(&self) -> &str {
        self.status.message()
    }

    pub(crate) fn outcome_for_test(&self) -> (bool, Option<&PersonalInfo>) {
        (self.should_quit, self.result.as_ref())
    }

    pub(crate) fn draw_for_test(&self, frame: &mut ratatui::Frame<'_>) {
        self.draw(frame)
    }
}
