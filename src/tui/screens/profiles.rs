//! Profiles screen — fixed athlete profile card with performance history.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::data;

/// Renders the profiles screen.
#[mutants::skip]
pub fn draw_profiles(frame: &mut Frame, area: Rect) {
    let profile = data::profile();

    let [heading_area, body_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let heading = Paragraph::new(Span::styled(
        "Athlete Profile",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, heading_area);

    let [card_area, history_area] =
        Layout::horizontal([Constraint::Length(34), Constraint::Min(0)]).areas(body_area);

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let card_inner = card_block.inner(card_area);
    frame.render_widget(card_block, card_area);

    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            profile.name,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Athlete ID: {}", profile.athlete_id)),
        Line::from(format!("Age: {}", profile.age)),
        Line::from(profile.phone),
    ]);
    frame.render_widget(card, card_inner);

    let history_block = Block::default()
        .title(" Performance History ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let history_inner = history_block.inner(history_area);
    frame.render_widget(history_block, history_area);

    let lines: Vec<Line> = profile
        .history
        .iter()
        .map(|(test, rating)| {
            Line::from(vec![
                Span::raw(format!("{test:<18}")),
                Span::styled(*rating, Style::default().fg(Color::Green)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), history_inner);
}
