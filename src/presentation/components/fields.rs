use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use super::super::view::{FieldView, FieldViewKind, UiContext};

const VALUE_INDENT: &str = "  ";
const HIGHLIGHT_SYMBOL: &str = "» ";

pub fn render_fields(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>, enable_cursor: bool) {
    let content_width = area.width.saturating_sub(4);
    let mut items = Vec::with_capacity(ctx.fields.len());
    let mut heights = Vec::with_capacity(ctx.fields.len());

    for (idx, field) in ctx.fields.iter().enumerate() {
        let lines = field_lines(field, idx == ctx.focused, content_width);
        heights.push(lines.len());
        items.push(ListItem::new(lines));
    }

    let mut list_state = ListState::default();
    if !ctx.fields.is_empty() {
        list_state.select(Some(ctx.focused.min(ctx.fields.len() - 1)));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title(ctx.title.to_string())
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    frame.render_stateful_widget(list, area, &mut list_state);

    if !enable_cursor {
        return;
    }
    let Some(field) = ctx.fields.get(ctx.focused) else {
        return;
    };
    if field.kind != FieldViewKind::Text {
        return;
    }
    let inner_height = area.height.saturating_sub(2) as usize;
    let Some(line) = cursor_line(&heights, list_state.offset(), ctx.focused, inner_height) else {
        return;
    };
    let column = (VALUE_INDENT.width() + field.value.width()) as u16;
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(HIGHLIGHT_SYMBOL.width() as u16)
        .saturating_add(column)
        .min(area.right().saturating_sub(2));
    let cursor_y = area.y.saturating_add(1).saturating_add(line as u16);
    frame.set_cursor_position((cursor_x, cursor_y));
}

/// Row of the focused value line inside the list, counted from the first
/// item still on screen. `None` when that line is scrolled out of view.
pub(crate) fn cursor_line(
    heights: &[usize],
    offset: usize,
    focused: usize,
    visible_rows: usize,
) -> Option<usize> {
    if focused < offset || focused >= heights.len() {
        return None;
    }
    // the value sits on the line right below the label
    let line = heights[offset..focused].iter().sum::<usize>() + 1;
    (line < visible_rows).then_some(line)
}

/// Label, value and (wrapped) error lines for one field.
pub(crate) fn field_lines(
    field: &FieldView<'_>,
    is_selected: bool,
    max_width: u16,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut label = field.label.to_string();
    if field.required {
        label.push_str(" *");
    }
    let label_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(label, label_style)));

    let value_line = match field.kind {
        FieldViewKind::Text => Line::from(format!("{VALUE_INDENT}{}", field.value)),
        FieldViewKind::Select => {
            let shown = if field.value.is_empty() {
                Span::styled("<choose>", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(field.value.to_string())
            };
            Line::from(vec![
                Span::raw(VALUE_INDENT),
                shown,
                Span::styled(
                    "  (Enter to choose)",
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
    };
    lines.push(value_line);

    if let Some(error) = field.error.filter(|message| !message.is_empty()) {
        let width = (max_width as usize).saturating_sub(4).max(8);
        for chunk in wrap(error, width) {
            lines.push(Line::from(Span::styled(
                format!("{VALUE_INDENT}! {chunk}"),
                Style::default().fg(Color::Red),
            )));
        }
    }
    lines
}
