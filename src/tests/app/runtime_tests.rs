use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    app::{UiOptions, runtime::App},
    domain::FormField,
    form::{FormController, FormPhase},
};

fn app() -> App {
    App::new(
        FormController::default(),
        UiOptions::default(),
        "Personal Information".to_string(),
    )
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_for_test(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, ch: char) {
    app.handle_key_for_test(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn choose_gender(app: &mut App, downs: usize) {
    press(app, KeyCode::Enter);
    for _ in 0..downs {
        press(app, KeyCode::Down);
    }
    press(app, KeyCode::Enter);
}

#[test]
fn burst_of_edits_only_applies_latest_validation() {
    let mut app = app();
    type_text(&mut app, "J");
    press(&mut app, KeyCode::Backspace);

    assert_eq!(app.flush_for_test(), 2);
    assert_eq!(
        app.controller_for_test().error(FormField::Name),
        "Please enter your name."
    );
}

#[test]
fn typing_fills_focused_field() {
    let mut app = app();
    type_text(&mut app, "John");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Doe");
    app.flush_for_test();

    let values = app.controller_for_test().values();
    assert_eq!(values.name, "John");
    assert_eq!(values.family_name, "Doe");
    assert_eq!(app.status_for_test(), "Editing Family name");
}

#[test]
fn gender_popup_reveals_other_gender_field() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus_for_test(), FormField::Gender);

    choose_gender(&mut app, 2);
    assert_eq!(app.controller_for_test().values().gender, "Other");
    assert!(app.controller_for_test().show_other_gender());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus_for_test(), FormField::OtherGender);
}

#[test]
fn submitting_empty_form_reports_issues() {
    let mut app = app();
    ctrl(&mut app, 's');
    assert_eq!(app.status_for_test(), "4 issue(s) remaining");
    assert_eq!(app.controller_for_test().phase(), FormPhase::Submitted);
}

#[test]
fn accepted_submission_can_be_kept() {
    let mut app = app();
    type_text(&mut app, "John");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Doe");
    press(&mut app, KeyCode::Tab);
    choose_gender(&mut app, 0);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "2023-07-12");
    app.flush_for_test();
    assert_eq!(app.controller_for_test().error_count(), 0);

    ctrl(&mut app, 's');
    assert!(app.controller_for_test().is_dialog_open());

    // text keys do not reach the form while the dialog is open
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.controller_for_test().values().birthdate, "2023-07-12");

    ctrl(&mut app, 's');
    let (quit, result) = app.outcome_for_test();
    assert!(quit);
    let info = result.expect("kept submission");
    assert_eq!(info.gender, "Male");
}

#[test]
fn dialog_reset_returns_to_pristine_form() {
    let mut app = app();
    app.handle_key_for_test(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "B");
    press(&mut app, KeyCode::Tab);
    choose_gender(&mut app, 1);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "2000-01-01");
    ctrl(&mut app, 's');
    assert!(app.controller_for_test().is_dialog_open());

    press(&mut app, KeyCode::Char('r'));
    let controller = app.controller_for_test();
    assert!(!controller.is_dialog_open());
    assert!(controller.values().is_empty());
    assert!(controller.submitted().is_none());
    assert_eq!(app.focus_for_test(), FormField::Name);
    assert_eq!(app.status_for_test(), "Form reset");
}

#[test]
fn quitting_with_edits_requires_confirmation() {
    let mut app = app();
    type_text(&mut app, "J");
    ctrl(&mut app, 'q');
    assert!(!app.outcome_for_test().0);
    ctrl(&mut app, 'q');
    let (quit, result) = app.outcome_for_test();
    assert!(quit);
    assert!(result.is_none());
}

#[test]
fn birthdate_edits_validate_immediately() {
    let mut app = app();
    for _ in 0..3 {
        press(&mut app, KeyCode::Tab);
    }
    assert_eq!(app.focus_for_test(), FormField::Birthdate);
    type_text(&mut app, "2");
    press(&mut app, KeyCode::Delete);
    assert_eq!(app.flush_for_test(), 0);
    assert_eq!(
        app.controller_for_test().error(FormField::Birthdate),
        "Please select your birthdate."
    );
}

#[test]
fn live_validation_can_be_disabled() {
    let mut app = App::new(
        FormController::default(),
        UiOptions::default().with_auto_validate(false),
        "Form".to_string(),
    );
    type_text(&mut app, "J");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.flush_for_test(), 0);
    assert_eq!(app.controller_for_test().error(FormField::Name), "");
}
