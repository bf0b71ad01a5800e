//! Reusable TUI widgets.

pub mod confirm;
pub mod counter;
pub mod form;
pub mod nav;

pub use confirm::{ConfirmState, draw_confirm};
pub use counter::{Counter, format_count};
pub use form::{Form, FormField, draw_form};
pub use nav::{NavContext, draw_nav};
