//! Actions returned by screen event handlers.

use crate::model::{AuthMode, Tab};

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update the session state and navigate
/// between tabs; screens never mutate the session directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// A validated auth submission succeeded; sign in and show the dashboard.
    Login,
    /// Quick demo access: sign in without validation or tab change.
    QuickDemo,
    /// Switch the auth form between sign in and sign up.
    SetAuthMode(AuthMode),
    /// Make the given tab active.
    SwitchTab(Tab),
    /// Ask the user to confirm logout before mutating anything.
    RequestLogout,
    /// Quit the application.
    Quit,
}
