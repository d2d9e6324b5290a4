mod controller;
mod pending;
mod visibility;

pub use controller::{FormController, FormPhase, SubmitOutcome};
pub use pending::{TicketOutcome, ValidationTicket};
pub use visibility::{derive_show_other_gender, visible_fields};
