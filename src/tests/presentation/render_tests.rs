use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

use crate::{
    app::{UiOptions, runtime::App},
    domain::{FormField, FormValues},
    form::FormController,
    presentation::{
        FieldView, FieldViewKind,
        components::fields::{cursor_line, field_lines},
    },
};

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
    terminal
        .draw(|frame| app.draw_for_test(frame))
        .expect("draw");
    buffer_text(terminal.backend().buffer())
}

fn app_with(values: FormValues) -> App {
    App::new(
        FormController::default().with_values(values),
        UiOptions::default(),
        "Personal Information".to_string(),
    )
}

#[test]
fn renders_inline_errors_after_rejected_submit() {
    let mut app = app_with(FormValues::default());
    app.handle_key_for_test(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
    let screen = render(&app);

    assert!(screen.contains("Personal Information"));
    assert!(screen.contains("Please enter your name."));
    assert!(screen.contains("Please select your birthdate."));
    assert!(!screen.contains("Other gender"));
    assert!(screen.contains("[! 4]"));
}

#[test]
fn renders_other_gender_only_when_selected() {
    let app = app_with(FormValues {
        gender: "Other".into(),
        ..FormValues::default()
    });
    let screen = render(&app);
    assert!(screen.contains("Other gender *"));
}

#[test]
fn renders_confirmation_dialog() {
    let mut app = app_with(FormValues {
        name: "Steve".into(),
        family_name: "Jobs".into(),
        gender: "Other".into(),
        other_gender: "non-binary".into(),
        birthdate: "2023-07-12".into(),
    });
    app.handle_key_for_test(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
    assert!(app.controller_for_test().is_dialog_open());

    let screen = render(&app);
    assert!(screen.contains("Submitted Personal Information"));
    assert!(screen.contains("Gender: non-binary"));
    assert!(screen.contains("Birthdate: 07/12/2023"));
    assert!(screen.contains("[ Reset form ]"));
}

#[test]
fn error_lines_are_red_and_wrapped() {
    let field = FieldView {
        label: FormField::FamilyName.label(),
        value: "",
        error: Some("Please enter your family name."),
        required: true,
        kind: FieldViewKind::Text,
    };
    let lines = field_lines(&field, false, 20);
    assert!(lines.len() > 3, "narrow widths wrap the message");
    let label = lines[0].spans[0].content.to_string();
    assert_eq!(label, "Family name *");
    let error_span = &lines[2].spans[0];
    assert_eq!(error_span.style.fg, Some(Color::Red));
}

#[test]
fn empty_select_shows_placeholder() {
    let field = FieldView {
        label: "Gender",
        value: "",
        error: None,
        required: true,
        kind: FieldViewKind::Select,
    };
    let lines = field_lines(&field, true, 40);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].spans[1].content, "<choose>");
}

#[test]
fn cursor_line_counts_from_scroll_offset() {
    let heights = [3, 3, 3, 2];
    assert_eq!(cursor_line(&heights, 0, 0, 6), Some(1));
    assert_eq!(cursor_line(&heights, 2, 3, 6), Some(4));
    assert_eq!(cursor_line(&heights, 2, 1, 6), None);
    assert_eq!(cursor_line(&heights, 0, 3, 6), None);
}

#[test]
fn cursor_follows_scrolled_field() {
    let mut app = app_with(FormValues {
        birthdate: "1999-01-01".into(),
        ..FormValues::default()
    });
    app.handle_key_for_test(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
    for _ in 0..3 {
        app.handle_key_for_test(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    }
    assert_eq!(app.focus_for_test(), FormField::Birthdate);

    let mut terminal = Terminal::new(TestBackend::new(40, 12)).expect("terminal");
    terminal
        .draw(|frame| app.draw_for_test(frame))
        .expect("draw");
    let screen = buffer_text(terminal.backend().buffer());
    let value_row = screen
        .lines()
        .position(|line| line.contains("1999-01-01"))
        .expect("birthdate value on screen");

    let cursor = terminal.get_cursor_position().expect("cursor");
    assert_eq!(cursor.y as usize, value_row);
}
