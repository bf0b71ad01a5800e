//! Dashboard screen — stat cards with animated counters and a performance
//! summary panel.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::data::{self, DashboardStat};
use crate::tui::widgets::counter::{Counter, format_count};

/// How long each stat counter takes to count up.
const COUNT_DURATION: Duration = Duration::from_millis(1500);

/// State for the dashboard screen: one counter per stat card.
///
/// Counters are created when the dashboard mounts (login or tab switch) and
/// replaced on the next mount, so a revisit restarts the animation and a
/// finished counter never ticks again.
#[derive(Debug, Clone)]
pub struct DashboardState {
    stats: Vec<DashboardStat>,
    counters: Vec<Counter>,
    tick: Duration,
}

impl DashboardState {
    /// Creates the dashboard with fresh counters for the given tick interval.
    pub fn new(tick: Duration) -> Self {
        let stats = data::dashboard_stats();
        let counters = stats
            .iter()
            .map(|stat| Counter::new(stat.value, COUNT_DURATION, tick))
            .collect();
        Self {
            stats,
            counters,
            tick,
        }
    }

    /// Restarts the count-up animation. Called when the dashboard mounts.
    pub fn reset(&mut self) {
        *self = Self::new(self.tick);
    }

    /// Advances all running counters by one tick.
    pub fn on_tick(&mut self) {
        for counter in &mut self.counters {
            counter.advance();
        }
    }

    /// Returns `true` while any counter is still animating.
    pub fn animating(&self) -> bool {
        self.counters.iter().any(|c| !c.is_done())
    }

    /// Returns the stat cards.
    pub fn stats(&self) -> &[DashboardStat] {
        &self.stats
    }

    /// Returns the counters, one per stat card.
    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }
}

/// Renders the dashboard screen.
#[mutants::skip]
pub fn draw_dashboard(state: &DashboardState, frame: &mut Frame, area: Rect) {
    let [heading_area, cards_area, summary_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(6),
        Constraint::Min(0),
    ])
    .areas(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Overview of athlete performance and system statistics."),
    ]);
    frame.render_widget(heading, heading_area);

    let constraints: Vec<Constraint> = state
        .stats()
        .iter()
        .map(|_| Constraint::Ratio(1, state.stats().len() as u32))
        .collect();
    let card_areas = Layout::horizontal(constraints).split(cards_area);

    for ((stat, counter), card_area) in state
        .stats()
        .iter()
        .zip(state.counters())
        .zip(card_areas.iter())
    {
        draw_stat_card(stat, counter, frame, *card_area);
    }

    let summary_block = Block::default()
        .title(" Performance Analytics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let summary_inner = summary_block.inner(summary_area);
    frame.render_widget(summary_block, summary_area);

    let summary = Paragraph::new(Line::from(vec![
        Span::styled(
            data::PERFORMANCE_SCORE.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("\u{2191} +{}%", data::PERFORMANCE_TREND_PERCENT),
            Style::default().fg(Color::Green),
        ),
    ]));
    frame.render_widget(summary, summary_inner);
}

/// Renders one stat card with its animated value and trend.
#[mutants::skip]
fn draw_stat_card(stat: &DashboardStat, counter: &Counter, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", stat.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (arrow, trend_color, sign) = if stat.trend_up {
        ('\u{2191}', Color::Green, '+')
    } else {
        ('\u{2193}', Color::Red, '-')
    };

    let lines = vec![
        Line::from(Span::styled(
            format_count(counter.value()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{arrow} {sign}{}%", stat.trend_percent),
            Style::default().fg(trend_color),
        )),
    ];
    let card = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(card, inner);
}
