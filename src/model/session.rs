//! Session state: login flag, active tab, auth mode, committed auth fields.

use serde::{Deserialize, Serialize};

/// All tabs the dashboard can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Overview stats and performance summary.
    #[default]
    Dashboard,
    /// Athlete management table.
    Athletes,
    /// Overall rankings.
    Leaderboard,
    /// Performance trends and category breakdown.
    Analytics,
    /// Individual athlete profile.
    Profiles,
}

impl Tab {
    /// All tabs in navigation order.
    pub const ALL: [Tab; 5] = [
        Self::Dashboard,
        Self::Athletes,
        Self::Leaderboard,
        Self::Analytics,
        Self::Profiles,
    ];

    /// Stable string identifier for this tab.
    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Athletes => "athletes",
            Self::Leaderboard => "leaderboard",
            Self::Analytics => "analytics",
            Self::Profiles => "profiles",
        }
    }

    /// Human-readable label for the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Athletes => "Athletes",
            Self::Leaderboard => "Leaderboard",
            Self::Analytics => "Analytics",
            Self::Profiles => "Profiles",
        }
    }

    /// Resolves a string identifier to a tab.
    ///
    /// Unrecognized identifiers fall back to [`Tab::Dashboard`], so the
    /// router always has a page to render.
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == id)
            .unwrap_or(Self::Dashboard)
    }

    /// Returns the next tab in navigation order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Returns the previous tab in navigation order, wrapping around.
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which face the auth form is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Existing-account sign in.
    #[default]
    Signin,
    /// New-account sign up.
    Signup,
}

impl AuthMode {
    /// Label for the mode toggle.
    pub fn label(self) -> &'static str {
        match self {
            Self::Signin => "Sign In",
            Self::Signup => "Sign Up",
        }
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Signin => Self::Signup,
            Self::Signup => Self::Signin,
        }
    }
}

/// Committed auth form values held by the session.
///
/// The auth screen keeps its own draft of these; edits round-trip back here
/// on every keystroke, and the draft is reseeded from here when the auth
/// mode changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthFields {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub remember: bool,
}

/// Top-level session state.
///
/// Owned exclusively by the [`App`](crate::tui::App) and mutated only
/// through the explicit operations below. There is no user identity: login
/// is a boolean toggle, not an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    logged_in: bool,
    active_tab: Tab,
    auth_mode: AuthMode,
    auth: AuthFields,
}

impl SessionState {
    /// Creates a logged-out session on the dashboard tab in sign-in mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the user has signed in.
    pub fn logged_in(&self) -> bool {
        self.logged_in
    }

    /// Returns the active tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Returns the auth form mode.
    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    /// Returns the committed auth fields.
    pub fn auth(&self) -> &AuthFields {
        &self.auth
    }

    /// Marks the session as signed in and lands on the dashboard.
    pub fn login(&mut self) {
        self.logged_in = true;
        self.active_tab = Tab::Dashboard;
    }

    /// Quick-demo access: signs in without touching the active tab.
    pub fn quick_demo(&mut self) {
        self.logged_in = true;
    }

    /// Signs out: clears all auth fields and resets to the dashboard tab.
    ///
    /// Callers must obtain interactive confirmation first; this method
    /// itself is unconditional.
    pub fn logout(&mut self) {
        self.logged_in = false;
        self.auth = AuthFields::default();
        self.active_tab = Tab::Dashboard;
    }

    /// Sets the active tab. Unconditional, no other side effects.
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Sets the active tab from a string identifier.
    ///
    /// Unknown identifiers land on [`Tab::Dashboard`].
    pub fn set_active_tab_id(&mut self, id: &str) {
        self.active_tab = Tab::from_id(id);
    }

    /// Sets the auth form mode.
    pub fn set_auth_mode(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
    }

    /// Commits draft auth values into the session.
    pub fn set_auth(&mut self, auth: AuthFields) {
        self.auth = auth;
    }
}
