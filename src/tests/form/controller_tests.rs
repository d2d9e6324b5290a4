use crate::{
    dialog::DialogSignal,
    domain::{FormField, FormValues},
    form::{FormController, FormPhase, SubmitOutcome},
};

fn fill(
    controller: &mut FormController,
    name: &str,
    family: &str,
    gender: &str,
    other: &str,
    birthdate: &str,
) {
    controller.handle_field_change(FormField::Name, name);
    controller.handle_field_change(FormField::FamilyName, family);
    controller.handle_gender_change(gender);
    controller.handle_field_change(FormField::OtherGender, other);
    controller.handle_birthdate_change(birthdate);
}

#[test]
fn empty_submission_shows_every_required_message() {
    let mut controller = FormController::default();
    let outcome = controller.handle_submit();

    assert_eq!(outcome, SubmitOutcome::Rejected { issues: 4 });
    assert_eq!(controller.error(FormField::Name), "Please enter your name.");
    assert_eq!(
        controller.error(FormField::FamilyName),
        "Please enter your family name."
    );
    assert_eq!(controller.error(FormField::Gender), "Please select gender.");
    assert_eq!(controller.error(FormField::OtherGender), "");
    assert_eq!(
        controller.error(FormField::Birthdate),
        "Please select your birthdate."
    );
    assert!(!controller.is_dialog_open());
    assert!(controller.submitted().is_none());
    assert_eq!(controller.phase(), FormPhase::Submitted);
}

#[test]
fn each_missing_field_blocks_submission_with_its_message() {
    let expected = [
        (FormField::Name, "Please enter your name."),
        (FormField::FamilyName, "Please enter your family name."),
        (FormField::Gender, "Please select gender."),
        (FormField::Birthdate, "Please select your birthdate."),
    ];
    for (missing, message) in expected {
        let mut values = FormValues {
            name: "John".into(),
            family_name: "Doe".into(),
            gender: "Male".into(),
            other_gender: String::new(),
            birthdate: "2023-07-12".into(),
        };
        values.set(missing, String::new());
        let mut controller = FormController::default().with_values(values);

        assert_eq!(
            controller.handle_submit(),
            SubmitOutcome::Rejected { issues: 1 }
        );
        assert_eq!(controller.error(missing), message);
        assert_eq!(controller.error_count(), 1);
        assert!(!controller.is_dialog_open());
    }
}

#[test]
fn other_gender_required_only_for_other() {
    let mut controller = FormController::default();
    fill(&mut controller, "John", "Doe", "Other", "", "2023-07-12");
    assert_eq!(
        controller.handle_submit(),
        SubmitOutcome::Rejected { issues: 1 }
    );
    assert_eq!(
        controller.error(FormField::OtherGender),
        "Please enter your gender."
    );

    controller.handle_gender_change("Female");
    controller.handle_field_change(FormField::OtherGender, "ignored");
    assert_eq!(controller.handle_submit(), SubmitOutcome::Accepted);
}

#[test]
fn valid_submission_opens_dialog_with_snapshot() {
    let mut controller = FormController::default();
    fill(&mut controller, "John", "Doe", "Male", "", "2023-07-12");

    assert_eq!(controller.handle_submit(), SubmitOutcome::Accepted);
    assert!(controller.errors().is_clear());
    assert!(controller.is_dialog_open());
    assert_eq!(controller.phase(), FormPhase::DialogOpen);

    let info = controller.submitted().expect("snapshot");
    assert_eq!(info.name, "John");
    assert_eq!(info.birthdate, "2023-07-12");

    let dialog = controller.dialog().expect("dialog");
    assert!(dialog.is_open);
    assert_eq!(dialog.gender_label(), "Male");
    assert_eq!(dialog.formatted_birthdate(), "07/12/2023");
}

#[test]
fn reset_clears_everything() {
    let mut controller = FormController::default();
    fill(&mut controller, "Steve", "Jobs", "Other", "Non-binary", "2023-07-12");
    assert!(controller.show_other_gender());
    assert_eq!(controller.handle_submit(), SubmitOutcome::Accepted);

    controller.handle_reset_form();

    assert_eq!(controller.values(), &FormValues::default());
    assert!(controller.errors().is_clear());
    assert!(!controller.show_other_gender());
    assert!(!controller.is_dialog_open());
    assert!(controller.submitted().is_none());
    assert!(controller.dialog().is_none());
    assert_eq!(controller.phase(), FormPhase::Pristine);
}

#[test]
fn reset_after_rejected_submission_clears_errors() {
    let mut controller = FormController::default();
    controller.handle_gender_change("Other");
    controller.handle_submit();
    assert!(controller.error_count() > 0);

    controller.handle_reset_form();
    assert!(controller.errors().is_clear());
    assert!(!controller.show_other_gender());
}

#[test]
fn dialog_reset_signal_resets_form() {
    let mut controller = FormController::default();
    fill(&mut controller, "John", "Doe", "Male", "", "2023-07-12");
    controller.handle_submit();

    let signal = controller.dialog().expect("dialog").activate_reset();
    assert_eq!(signal, DialogSignal::ResetForm);
    controller.handle_dialog_signal(signal);

    assert!(controller.submitted().is_none());
    assert!(controller.values().is_empty());
}

#[test]
fn gender_change_toggles_other_gender_visibility() {
    let mut controller = FormController::default();
    controller.handle_gender_change("Male");
    assert!(!controller.show_other_gender());
    assert!(!controller.visible_fields().contains(&FormField::OtherGender));

    controller.handle_gender_change("Other");
    assert_eq!(controller.values().gender, "Other");
    assert!(controller.show_other_gender());
    assert!(controller.visible_fields().contains(&FormField::OtherGender));
    assert!(controller.is_required(FormField::OtherGender));
}

#[test]
fn hiding_other_gender_clears_its_error() {
    let mut controller = FormController::default();
    controller.handle_gender_change("Other");
    controller.handle_field_validation(FormField::OtherGender);
    assert_eq!(
        controller.error(FormField::OtherGender),
        "Please enter your gender."
    );

    controller.handle_gender_change("Male");
    assert_eq!(controller.error(FormField::OtherGender), "");
}

#[test]
fn empty_birthdate_is_written_and_flagged() {
    let mut controller = FormController::default();
    controller.handle_birthdate_change("2023-07-12");
    assert_eq!(controller.error(FormField::Birthdate), "");

    controller.handle_birthdate_change("");
    assert_eq!(controller.values().birthdate, "");
    assert_eq!(
        controller.error(FormField::Birthdate),
        "Please select your birthdate."
    );

    controller.handle_birthdate_change("2023-07-15");
    assert_eq!(controller.values().birthdate, "2023-07-15");
    assert_eq!(controller.error(FormField::Birthdate), "");
}

#[test]
fn field_failure_leaves_other_entries_alone() {
    let mut controller = FormController::default();
    controller.handle_submit();
    controller.handle_field_change(FormField::Name, "Ada");

    assert_eq!(controller.error(FormField::Name), "");
    assert_eq!(
        controller.error(FormField::FamilyName),
        "Please enter your family name."
    );

    controller.handle_field_change(FormField::Name, " ");
    assert_eq!(controller.error(FormField::Name), "Please enter your name.");
    assert_eq!(controller.error(FormField::Gender), "Please select gender.");
}

#[test]
fn edits_move_phase_and_dirty_flag() {
    let mut controller = FormController::default();
    assert_eq!(controller.phase(), FormPhase::Pristine);
    assert!(!controller.is_dirty());

    controller.handle_field_change(FormField::Name, "A");
    assert_eq!(controller.phase(), FormPhase::Editing);
    assert!(controller.is_dirty());

    controller.handle_field_change(FormField::Name, "");
    assert!(!controller.is_dirty());
}

#[test]
fn seeding_derives_visibility_without_errors() {
    let controller = FormController::default().with_values(FormValues {
        gender: "Other".into(),
        ..FormValues::default()
    });
    assert!(controller.show_other_gender());
    assert!(controller.errors().is_clear());
    assert!(!controller.is_dirty());
    assert_eq!(controller.phase(), FormPhase::Pristine);
}
