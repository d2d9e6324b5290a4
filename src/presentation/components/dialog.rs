use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::super::view::DialogRender;
use super::layout::popup_rect;

const MIN_WIDTH: u16 = 40;

pub fn render_dialog(frame: &mut Frame<'_>, dialog: &DialogRender<'_>) {
    let mut lines: Vec<Line<'_>> = dialog
        .rows
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", row.label),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(row.value.clone()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("[ {} ]", dialog.reset_label),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Enter/r • Ctrl+S keep & exit"),
    ]));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = (content_width.max(dialog.title.width()) as u16)
        .saturating_add(4)
        .max(MIN_WIDTH);
    let height = (lines.len() as u16).saturating_add(2);
    let area = popup_rect(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(dialog.title.to_string())
            .borders(Borders::ALL),
    );
    frame.render_widget(widget, area);
}
