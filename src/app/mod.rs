mod editor;
mod form_ui;
mod input;
mod options;
mod popup;
pub(crate) mod runtime;
mod status;
mod terminal;

pub use form_ui::InfoFormUI;
pub use options::UiOptions;
