mod session;
mod validation;

pub use session::{AuthFields, AuthMode, SessionState, Tab};
pub use validation::{AuthError, validate_submission};
