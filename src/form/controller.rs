use tracing::{debug, info};

use crate::{
    dialog::{ConfirmationDialog, DialogSignal},
    domain::{ErrorMap, FormField, FormValues, PersonalInfo},
    schema::ValidationSchema,
};

use super::{
    pending::{Generations, TicketOutcome, ValidationTicket},
    visibility::{derive_show_other_gender, visible_fields},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Fresh, seeded or just reset.
    Pristine,
    Editing,
    /// The last submission was rejected and its errors are on display.
    Submitted,
    DialogOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { issues: usize },
}

/// Owns the form values, the per-field errors and the dialog state.
///
/// Validation failures never escape a handler; they only land in the
/// [`ErrorMap`].
#[derive(Debug, Clone)]
pub struct FormController {
    schema: ValidationSchema,
    values: FormValues,
    baseline: FormValues,
    errors: ErrorMap,
    show_other_gender: bool,
    dialog_open: bool,
    submitted: Option<PersonalInfo>,
    phase: FormPhase,
    generations: Generations,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(ValidationSchema::personal_info())
    }
}

impl FormController {
    pub fn new(schema: ValidationSchema) -> Self {
        Self {
            schema,
            values: FormValues::default(),
            baseline: FormValues::default(),
            errors: ErrorMap::default(),
            show_other_gender: false,
            dialog_open: false,
            submitted: None,
            phase: FormPhase::Pristine,
            generations: Generations::default(),
        }
    }

    pub fn with_values(mut self, values: FormValues) -> Self {
        self.seed(values);
        self
    }

    /// Replace the values wholesale, e.g. from a prefill document.
    pub fn seed(&mut self, values: FormValues) {
        self.show_other_gender = derive_show_other_gender(&values);
        self.baseline = values.clone();
        self.values = values;
        self.errors.clear_all();
        self.dialog_open = false;
        self.submitted = None;
        self.phase = FormPhase::Pristine;
        self.generations.bump_all();
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> &str {
        self.errors.get(field)
    }

    pub fn error_count(&self) -> usize {
        self.errors.count()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn show_other_gender(&self) -> bool {
        self.show_other_gender
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn submitted(&self) -> Option<&PersonalInfo> {
        self.submitted.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.values != self.baseline
    }

    pub fn is_required(&self, field: FormField) -> bool {
        self.schema.is_required(field, &self.values)
    }

    pub fn visible_fields(&self) -> Vec<FormField> {
        visible_fields(self.show_other_gender)
    }

    /// The confirmation dialog, once a submission has been accepted.
    pub fn dialog(&self) -> Option<ConfirmationDialog<'_>> {
        self.submitted
            .as_ref()
            .map(|info| ConfirmationDialog::new(info, self.dialog_open))
    }

    /// Write a value and validate that field right away.
    pub fn handle_field_change(&mut self, field: FormField, value: impl Into<String>) {
        let ticket = self.begin_field_change(field, value);
        self.resolve_validation(ticket);
    }

    /// Write a value and schedule its validation for later.
    pub fn begin_field_change(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> ValidationTicket {
        self.write(field, value.into());
        self.generations.issue(field)
    }

    pub fn resolve_validation(&mut self, ticket: ValidationTicket) -> TicketOutcome {
        if !self.generations.is_current(&ticket) {
            debug!(field = %ticket.field(), "discarding stale validation");
            return TicketOutcome::Stale;
        }
        let valid = self.handle_field_validation(ticket.field());
        TicketOutcome::Applied { valid }
    }

    /// Re-validate one field against the current values. Only that field's
    /// entry is touched.
    pub fn handle_field_validation(&mut self, field: FormField) -> bool {
        match self.schema.validate_at(field, &self.values) {
            Ok(()) => {
                self.errors.clear(field);
                true
            }
            Err(error) => {
                debug!(%field, message = %error.message, "field validation failed");
                self.errors.set(field, error.message);
                false
            }
        }
    }

    pub fn handle_gender_change(&mut self, value: impl Into<String>) {
        self.handle_field_change(FormField::Gender, value);
    }

    /// An empty birthdate is still written, but flagged as missing.
    pub fn handle_birthdate_change(&mut self, value: impl Into<String>) {
        self.write(FormField::Birthdate, value.into());
        self.handle_field_validation(FormField::Birthdate);
    }

    pub fn handle_submit(&mut self) -> SubmitOutcome {
        self.generations.bump_all();
        match self.schema.validate(&self.values) {
            Ok(()) => {
                self.errors.clear_all();
                self.submitted = Some(PersonalInfo::from(self.values.clone()));
                self.dialog_open = true;
                self.phase = FormPhase::DialogOpen;
                info!("submission accepted");
                SubmitOutcome::Accepted
            }
            Err(errors) => {
                let issues = errors.len();
                self.errors = errors.to_error_map();
                self.phase = FormPhase::Submitted;
                info!(issues, "submission rejected");
                SubmitOutcome::Rejected { issues }
            }
        }
    }

    pub fn handle_reset_form(&mut self) {
        self.values = FormValues::default();
        self.baseline = FormValues::default();
        self.errors.clear_all();
        self.show_other_gender = false;
        self.dialog_open = false;
        self.submitted = None;
        self.phase = FormPhase::Pristine;
        self.generations.bump_all();
        info!("form reset");
    }

    pub fn handle_dialog_signal(&mut self, signal: DialogSignal) {
        match signal {
            DialogSignal::ResetForm => self.handle_reset_form(),
        }
    }

    fn write(&mut self, field: FormField, value: String) {
        self.values.set(field, value);
        self.generations.bump(field);
        let dependents: Vec<_> = self.schema.dependents_of(field).collect();
        for dependent in dependents {
            self.generations.bump(dependent);
        }
        self.phase = FormPhase::Editing;

        if field == FormField::Gender {
            let was_shown = self.show_other_gender;
            self.show_other_gender = derive_show_other_gender(&self.values);
            if was_shown && !self.show_other_gender {
                self.handle_field_validation(FormField::OtherGender);
            }
        }
    }
}
