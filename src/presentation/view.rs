use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::dialog::DialogRow;

use super::components::{render_dialog, render_fields, render_footer, render_popup};

pub struct UiContext<'a> {
    pub title: &'a str,
    pub fields: &'a [FieldView<'a>],
    pub focused: usize,
    pub status_message: &'a str,
    pub dirty: bool,
    pub error_count: usize,
    pub help: Option<&'a str>,
    pub popup: Option<PopupRender<'a>>,
    pub dialog: Option<DialogRender<'a>>,
}

impl UiContext<'_> {
    pub fn focus_label(&self) -> Option<&str> {
        self.fields.get(self.focused).map(|field| field.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldViewKind {
    Text,
    Select,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub required: bool,
    pub kind: FieldViewKind,
}

pub struct PopupRender<'a> {
    pub title: &'a str,
    pub options: &'a [String],
    pub selected: usize,
}

pub struct DialogRender<'a> {
    pub title: &'a str,
    pub rows: &'a [DialogRow],
    pub reset_label: &'a str,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(4)])
        .split(frame.area());

    let cursor_enabled = ctx.popup.is_none() && ctx.dialog.is_none();
    render_fields(frame, chunks[0], &ctx, cursor_enabled);
    render_footer(frame, chunks[1], &ctx);

    if let Some(dialog) = &ctx.dialog {
        render_dialog(frame, dialog);
    }
    if let Some(popup) = &ctx.popup {
        render_popup(frame, popup);
    }
}
