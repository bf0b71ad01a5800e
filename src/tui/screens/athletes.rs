//! Athletes screen — scrollable table of the athlete management data.
//!
//! The search box and Location/Age/Gender filter controls are rendered but
//! not wired to any filtering; the observed behavior being reproduced never
//! filters the table.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::data::{self, Athlete};
use crate::model::Tab;
use crate::tui::action::Action;

/// State for the athletes screen.
#[derive(Debug, Clone)]
pub struct AthletesState {
    athletes: Vec<Athlete>,
    /// Index of the currently highlighted row (0-based).
    selected: usize,
}

impl Default for AthletesState {
    fn default() -> Self {
        Self::new()
    }
}

impl AthletesState {
    /// Creates a new state with the cursor at the first row.
    pub fn new() -> Self {
        Self {
            athletes: data::athletes(),
            selected: 0,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                if !self.athletes.is_empty() {
                    self.selected = (self.selected + 1).min(self.athletes.len() - 1);
                }
                Action::None
            }
            KeyCode::Home => {
                self.selected = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected = self.athletes.len().saturating_sub(1);
                Action::None
            }
            // The row "View" action: open the profiles page.
            KeyCode::Enter => Action::SwitchTab(Tab::Profiles),
            _ => Action::None,
        }
    }

    /// Returns the table rows.
    pub fn athletes(&self) -> &[Athlete] {
        &self.athletes
    }

    /// Returns the currently selected row index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Resets the cursor to the first row.
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

/// Style for a score badge: green for 90+, blue for 80+, yellow below.
fn score_color(score: u8) -> Color {
    if score >= 90 {
        Color::Green
    } else if score >= 80 {
        Color::Blue
    } else {
        Color::Yellow
    }
}

/// Renders the athletes screen.
#[mutants::skip]
pub fn draw_athletes(state: &AthletesState, frame: &mut Frame, area: Rect) {
    let [heading_area, filter_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Athlete Management",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Manage and monitor athlete performance data."),
    ]);
    frame.render_widget(heading, heading_area);

    // Presentational controls; not wired to filtering.
    let filters = Paragraph::new(Line::from(vec![
        Span::styled("Search athletes...", Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled(
            "[All Locations] [All Ages] [All Genders] [Apply]",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(filters, filter_area);

    let header = Row::new(vec![
        "Name", "Age", "Gender", "Location", "Tests", "Score",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows: Vec<Row> = state
        .athletes()
        .iter()
        .enumerate()
        .map(|(i, athlete)| {
            let style = if i == state.selected() {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(vec![
                Line::from(athlete.name),
                Line::from(athlete.age.to_string()),
                Line::from(athlete.gender.label()),
                Line::from(athlete.location),
                Line::from(athlete.tests_completed.to_string()),
                Line::from(Span::styled(
                    athlete.score.to_string(),
                    Style::default().fg(score_color(athlete.score)),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(16),
        Constraint::Length(5),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Min(0),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(table, table_area);

    let footer = Paragraph::new("↑↓: navigate  Home/End: jump  Enter: view profile")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
