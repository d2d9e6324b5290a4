mod dialog;
pub(crate) mod fields;
mod footer;
mod layout;
mod popup;

pub use dialog::render_dialog;
pub use fields::render_fields;
pub use footer::render_footer;
pub use popup::render_popup;
