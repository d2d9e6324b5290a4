pub(crate) mod components;
mod view;

pub use view::{DialogRender, FieldView, FieldViewKind, PopupRender, UiContext, draw};
