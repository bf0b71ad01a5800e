//! Auth screen — sign in / sign up form shown while logged out.
//!
//! The form is a draft of the committed [`AuthFields`] held by the session:
//! every edit round-trips into the session (the app copies the draft back
//! after each key), and switching modes reseeds the draft from the latest
//! committed values rather than clearing it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::{AuthError, AuthFields, AuthMode, validate_submission};
use crate::tui::action::Action;
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Field index for email (sign in).
const SIGNIN_EMAIL: usize = 0;
/// Field index for password (sign in).
const SIGNIN_PASSWORD: usize = 1;

/// Field index for full name (sign up).
const SIGNUP_FULL_NAME: usize = 0;
/// Field index for email (sign up).
const SIGNUP_EMAIL: usize = 1;
/// Field index for password (sign up).
const SIGNUP_PASSWORD: usize = 2;
/// Field index for password confirmation (sign up).
const SIGNUP_CONFIRM: usize = 3;

/// State for the auth screen.
#[derive(Debug, Clone)]
pub struct AuthState {
    mode: AuthMode,
    form: Form,
    remember: bool,
    notice: Option<AuthError>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthState {
    /// Creates the screen in sign-in mode with an empty draft.
    pub fn new() -> Self {
        let mut state = Self {
            mode: AuthMode::Signin,
            form: Form::new(vec![]),
            remember: false,
            notice: None,
        };
        state.load(AuthMode::Signin, &AuthFields::default());
        state
    }

    /// Rebuilds the form for `mode`, seeding the draft from the committed
    /// session values. Called on mode switches and after logout.
    pub fn load(&mut self, mode: AuthMode, committed: &AuthFields) {
        self.mode = mode;
        self.remember = committed.remember;
        self.notice = None;
        self.form = match mode {
            AuthMode::Signin => {
                let mut form = Form::new(vec![
                    FormField::new("Email Address", true),
                    FormField::secret("Password", true),
                ]);
                form.set_value(SIGNIN_EMAIL, committed.email.clone());
                form.set_value(SIGNIN_PASSWORD, committed.password.clone());
                form
            }
            AuthMode::Signup => {
                let mut form = Form::new(vec![
                    FormField::new("Full Name", true),
                    FormField::new("Email Address", true),
                    FormField::secret("Password", true),
                    FormField::secret("Confirm Password", true),
                ]);
                form.set_value(SIGNUP_FULL_NAME, committed.full_name.clone());
                form.set_value(SIGNUP_EMAIL, committed.email.clone());
                form.set_value(SIGNUP_PASSWORD, committed.password.clone());
                form.set_value(SIGNUP_CONFIRM, committed.confirm_password.clone());
                form
            }
        };
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // A visible notice is blocking: any key dismisses it, nothing else.
        if self.notice.is_some() {
            self.notice = None;
            return Action::None;
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('m') => Action::SetAuthMode(self.mode.toggled()),
                KeyCode::Char('r') => {
                    self.remember = !self.remember;
                    Action::None
                }
                KeyCode::Char('d') => Action::QuickDemo,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Returns the current mode.
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Returns the remember/terms toggle.
    pub fn remember(&self) -> bool {
        self.remember
    }

    /// Returns the pending validation notice, if any.
    pub fn notice(&self) -> Option<AuthError> {
        self.notice
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Merges the draft over the committed values.
    ///
    /// Fields not shown in the current mode keep their committed values, so
    /// e.g. editing the email while signing in never clobbers a full name
    /// typed earlier in sign-up mode.
    pub fn draft(&self, committed: &AuthFields) -> AuthFields {
        let mut fields = committed.clone();
        fields.remember = self.remember;
        match self.mode {
            AuthMode::Signin => {
                fields.email = self.form.value(SIGNIN_EMAIL).to_string();
                fields.password = self.form.value(SIGNIN_PASSWORD).to_string();
            }
            AuthMode::Signup => {
                fields.full_name = self.form.value(SIGNUP_FULL_NAME).to_string();
                fields.email = self.form.value(SIGNUP_EMAIL).to_string();
                fields.password = self.form.value(SIGNUP_PASSWORD).to_string();
                fields.confirm_password = self.form.value(SIGNUP_CONFIRM).to_string();
            }
        }
        fields
    }

    /// Validates the draft; on success the app signs the session in.
    fn submit(&mut self) -> Action {
        let fields = self.draft(&AuthFields::default());
        match validate_submission(self.mode, &fields) {
            Ok(()) => Action::Login,
            Err(e) => {
                self.notice = Some(e);
                Action::None
            }
        }
    }
}

/// Renders the auth screen.
#[mutants::skip]
pub fn draw_auth(state: &AuthState, frame: &mut Frame, area: Rect) {
    let field_count = state.form().fields().len() as u16;
    let box_height = field_count * 3 + 9;

    let [h_area] = Layout::horizontal([Constraint::Length(48)])
        .flex(Flex::Center)
        .areas(area);
    let [panel] = Layout::vertical([Constraint::Length(box_height)])
        .flex(Flex::Center)
        .areas(h_area);

    let block = Block::default()
        .title(" Sports Authority of India ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let [subtitle_area, toggle_area, form_area, remember_area, _spacer, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(field_count * 3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(inner);

    let subtitle = Paragraph::new("Admin Panel Access")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(subtitle, subtitle_area);

    // Mode toggle, active side highlighted.
    let toggle_spans: Vec<Span> = [AuthMode::Signin, AuthMode::Signup]
        .into_iter()
        .flat_map(|mode| {
            let style = if mode == state.mode() {
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(format!("[ {} ]", mode.label()), style), Span::raw("  ")]
        })
        .collect();
    let toggle = Paragraph::new(Line::from(toggle_spans)).alignment(Alignment::Center);
    frame.render_widget(toggle, toggle_area);

    draw_form(state.form(), frame, form_area);

    let remember_label = match state.mode() {
        AuthMode::Signin => "Remember me",
        AuthMode::Signup => "I agree to terms",
    };
    let checkbox = if state.remember() { "[x]" } else { "[ ]" };
    let remember = Paragraph::new(format!("{checkbox} {remember_label}"))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(remember, remember_area);

    let footer = Paragraph::new(vec![
        Line::from("Tab: next field  Enter: submit  Esc: quit"),
        Line::from("Alt+m: switch mode  Alt+r: toggle  Alt+d: quick demo"),
    ])
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if let Some(notice) = state.notice() {
        draw_notice(&notice.to_string(), frame, area);
    }
}

/// Renders a blocking notice modal over the form.
#[mutants::skip]
fn draw_notice(message: &str, frame: &mut Frame, area: Rect) {
    let width = (message.len() as u16 + 6).max(30).min(area.width);
    let [h_area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [modal] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(h_area);

    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(" Notice ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from("press any key"),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, modal);
}
