#![deny(rust_2018_idioms)]

mod app;
mod dialog;
mod domain;
mod form;
mod io;
mod presentation;
mod schema;

#[cfg(test)]
mod tests;

pub use app::{InfoFormUI, UiOptions};
pub use dialog::{ConfirmationDialog, DialogRow, DialogSignal, format_date};
pub use domain::{ErrorMap, FormField, FormValues, Gender, PersonalInfo};
pub use form::{
    FormController, FormPhase, SubmitOutcome, TicketOutcome, ValidationTicket,
    derive_show_other_gender, visible_fields,
};
pub use io::{
    DocumentFormat, OutputDestination, OutputOptions, emit, parse_document_str,
    values_from_document, values_from_str,
};
pub use schema::{ValidationError, ValidationErrors, ValidationSchema, form_values_schema};

pub mod prelude {
    pub use super::{FormController, FormField, FormValues, InfoFormUI, PersonalInfo, UiOptions};
}
