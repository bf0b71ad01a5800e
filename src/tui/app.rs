use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use crate::model::{SessionState, Tab};

use super::action::Action;
use super::error::AppError;
use super::screens::{
    AthletesState, AuthState, DashboardState, draw_analytics, draw_athletes, draw_auth,
    draw_dashboard, draw_leaderboard, draw_profiles,
};
use super::widgets::confirm::{ConfirmState, draw_confirm};
use super::widgets::nav::{NavContext, draw_nav};

/// How often ticks are delivered when no key is pending. Drives the
/// dashboard counter animation.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Unread notification count shown in the header. Fixed demo value.
const NOTIFICATIONS: usize = 3;

/// Top-level application state.
///
/// Owns the [`SessionState`] and every per-screen state; screens communicate
/// back through [`Action`]s and never touch the session directly.
pub struct App {
    session: SessionState,
    auth: AuthState,
    dashboard: DashboardState,
    athletes: AthletesState,
    confirm: Option<ConfirmState>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a logged-out app showing the auth screen.
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            auth: AuthState::new(),
            dashboard: DashboardState::new(TICK_INTERVAL),
            athletes: AthletesState::new(),
            confirm: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll for a key or deliver a tick → dispatch.
    ///
    /// All state mutations happen here, one discrete event at a time; the
    /// tick only ever advances the cosmetic dashboard counters.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            } else {
                self.on_tick();
            }
        }
        Ok(())
    }

    /// Renders the auth screen or the active page with the navigation bar,
    /// plus the confirmation modal when one is pending.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        if !self.session.logged_in() {
            draw_auth(&self.auth, frame, area);
        } else {
            let [nav_area, body_area, footer_area] = Layout::vertical([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);

            let ctx = NavContext {
                active: self.session.active_tab(),
                notifications: NOTIFICATIONS,
            };
            draw_nav(&ctx, frame, nav_area);

            match self.session.active_tab() {
                Tab::Dashboard => draw_dashboard(&self.dashboard, frame, body_area),
                Tab::Athletes => draw_athletes(&self.athletes, frame, body_area),
                Tab::Leaderboard => draw_leaderboard(frame, body_area),
                Tab::Analytics => draw_analytics(frame, body_area),
                Tab::Profiles => draw_profiles(frame, body_area),
            }

            let footer = Paragraph::new("1-5/←→: tabs  l: logout  q: quit")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(footer, footer_area);
        }

        if let Some(confirm) = &self.confirm {
            draw_confirm(confirm, frame, area);
        }
    }

    /// Handles a key event: pending confirmation first, then the auth screen
    /// or the logged-in global keys.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.confirm.is_some() {
            self.handle_confirm_key(key);
            return;
        }

        let action = if self.session.logged_in() {
            self.handle_global_key(key)
        } else {
            let action = self.auth.handle_key(key);
            // Every draft edit round-trips into the committed session fields.
            let draft = self.auth.draft(self.session.auth());
            self.session.set_auth(draft);
            action
        };
        self.apply(action);
    }

    /// Answers a pending yes/no confirmation. Only logout is confirmed; a
    /// declined prompt leaves all state untouched.
    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.confirm = None;
                self.session.logout();
                self.auth
                    .load(self.session.auth_mode(), self.session.auth());
                self.athletes.reset();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm = None;
            }
            _ => {}
        }
    }

    /// Key dispatch while logged in: tab navigation, logout, quit, then the
    /// active page's own keys.
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(ch @ '1'..='5') => {
                let idx = (ch as usize) - ('1' as usize);
                Action::SwitchTab(Tab::ALL[idx])
            }
            KeyCode::Right | KeyCode::Tab => Action::SwitchTab(self.session.active_tab().next()),
            KeyCode::Left | KeyCode::BackTab => {
                Action::SwitchTab(self.session.active_tab().prev())
            }
            KeyCode::Char('l') => Action::RequestLogout,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => match self.session.active_tab() {
                Tab::Athletes => self.athletes.handle_key(key),
                _ => Action::None,
            },
        }
    }

    /// Applies an action returned by a screen handler.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Login => {
                self.session.login();
                self.dashboard.reset();
            }
            Action::QuickDemo => {
                self.session.quick_demo();
                if self.session.active_tab() == Tab::Dashboard {
                    self.dashboard.reset();
                }
            }
            Action::SetAuthMode(mode) => {
                self.session.set_auth_mode(mode);
                // Mode switches reseed the draft from committed values.
                self.auth.load(mode, self.session.auth());
            }
            Action::SwitchTab(tab) => {
                let previous = self.session.active_tab();
                self.session.set_active_tab(tab);
                if tab == Tab::Dashboard && previous != Tab::Dashboard {
                    self.dashboard.reset();
                }
            }
            Action::RequestLogout => {
                self.confirm = Some(ConfirmState::logout());
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Delivers a tick to the dashboard counters while they are mounted.
    pub fn on_tick(&mut self) {
        if self.session.logged_in() && self.session.active_tab() == Tab::Dashboard {
            self.dashboard.on_tick();
        }
    }

    /// Returns the session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Returns the auth screen state.
    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    /// Returns the dashboard screen state.
    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    /// Returns `true` if a confirmation prompt is pending.
    pub fn confirm_pending(&self) -> bool {
        self.confirm.is_some()
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
