//! Leaderboard screen — overall rankings table with trophy markers.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::data;

/// Trophy color for ranks 1-3; `None` for the rest of the field.
fn trophy_color(rank: u32) -> Option<Color> {
    match rank {
        1 => Some(Color::Yellow),
        2 => Some(Color::Gray),
        3 => Some(Color::LightRed),
        _ => None,
    }
}

/// Renders the leaderboard screen.
#[mutants::skip]
pub fn draw_leaderboard(frame: &mut Frame, area: Rect) {
    let [heading_area, table_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Leaderboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Track athlete performance across all tests."),
        Line::from(Span::styled(
            "Overall Rankings",
            Style::default().fg(Color::Blue),
        )),
    ]);
    frame.render_widget(heading, heading_area);

    let header = Row::new(vec!["Rank", "Athlete Name", "Sport/Test", "Score"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = data::leaderboard()
        .iter()
        .map(|entry| {
            let rank_cell = match trophy_color(entry.rank) {
                Some(color) => Line::from(vec![
                    Span::styled("\u{1f3c6} ", Style::default().fg(color)),
                    Span::raw(entry.rank.to_string()),
                ]),
                None => Line::from(entry.rank.to_string()),
            };
            Row::new(vec![
                rank_cell,
                Line::from(entry.name),
                Line::from(entry.sport),
                Line::from(Span::styled(
                    entry.score.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Length(18),
        Constraint::Length(14),
        Constraint::Min(0),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(table, table_area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn trophies_only_for_top_three() {
        assert_eq!(trophy_color(1), Some(Color::Yellow));
        assert_eq!(trophy_color(2), Some(Color::Gray));
        assert_eq!(trophy_color(3), Some(Color::LightRed));
        assert_eq!(trophy_color(4), None);
        assert_eq!(trophy_color(5), None);
    }

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_leaderboard(width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_leaderboard(frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_heading_and_all_entries() {
        let output = render_leaderboard(80, 24);
        assert!(output.contains("Leaderboard"));
        assert!(output.contains("Overall Rankings"));
        for entry in data::leaderboard() {
            assert!(output.contains(entry.name), "missing {}", entry.name);
            assert!(output.contains(entry.sport), "missing {}", entry.sport);
        }
    }
}
