use crate::{
    domain::FormField,
    form::{FormController, TicketOutcome},
};

#[test]
fn newer_edit_supersedes_pending_validation() {
    let mut controller = FormController::default();
    let stale = controller.begin_field_change(FormField::Name, "");
    let fresh = controller.begin_field_change(FormField::Name, "Ada");

    assert_eq!(
        controller.resolve_validation(fresh),
        TicketOutcome::Applied { valid: true }
    );
    assert_eq!(controller.resolve_validation(stale), TicketOutcome::Stale);
    assert_eq!(controller.error(FormField::Name), "");
}

#[test]
fn pending_tickets_on_other_fields_stay_current() {
    let mut controller = FormController::default();
    let name = controller.begin_field_change(FormField::Name, "");
    let _family = controller.begin_field_change(FormField::FamilyName, "Doe");

    assert_eq!(
        controller.resolve_validation(name),
        TicketOutcome::Applied { valid: false }
    );
    assert_eq!(controller.error(FormField::Name), "Please enter your name.");
}

#[test]
fn gender_change_invalidates_pending_other_gender_ticket() {
    let mut controller = FormController::default();
    controller.handle_gender_change("Other");
    let ticket = controller.begin_field_change(FormField::OtherGender, "");
    controller.handle_gender_change("Male");

    assert_eq!(controller.resolve_validation(ticket), TicketOutcome::Stale);
    assert_eq!(controller.error(FormField::OtherGender), "");
}

#[test]
fn submit_and_reset_invalidate_pending_tickets() {
    let mut controller = FormController::default();
    let ticket = controller.begin_field_change(FormField::Name, "");
    controller.handle_submit();
    assert_eq!(controller.resolve_validation(ticket), TicketOutcome::Stale);

    let ticket = controller.begin_field_change(FormField::FamilyName, "");
    controller.handle_reset_form();
    assert_eq!(controller.resolve_validation(ticket), TicketOutcome::Stale);
    assert!(controller.errors().is_clear());
}

#[test]
fn scheduled_validation_leaves_errors_until_resolved() {
    let mut controller = FormController::default();
    let ticket = controller.begin_field_change(FormField::FamilyName, "");
    assert_eq!(controller.error(FormField::FamilyName), "");
    controller.resolve_validation(ticket);
    assert_eq!(
        controller.error(FormField::FamilyName),
        "Please enter your family name."
    );
}
