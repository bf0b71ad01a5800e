//! Analytics screen — performance trends placeholder and category bars.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::data;

/// Renders the analytics screen.
#[mutants::skip]
pub fn draw_analytics(frame: &mut Frame, area: Rect) {
    let [heading_area, panels_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let heading = Paragraph::new(Span::styled(
        "Analytics",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, heading_area);

    let [trends_area, breakdown_area] =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(panels_area);

    let trends_block = Block::default()
        .title(" Performance Trends ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let trends_inner = trends_block.inner(trends_area);
    frame.render_widget(trends_block, trends_area);
    let placeholder = Paragraph::new("No trend data in demo dataset")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(placeholder, trends_inner);

    let breakdown_block = Block::default()
        .title(" Category Breakdown ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let breakdown_inner = breakdown_block.inner(breakdown_area);
    frame.render_widget(breakdown_block, breakdown_area);

    let max_bar = breakdown_inner.width.saturating_sub(22) as usize;
    let lines: Vec<Line> = data::category_breakdown()
        .iter()
        .map(|category| {
            let filled = max_bar * usize::from(category.percent) / 100;
            Line::from(vec![
                Span::raw(format!("{:<10}", category.category)),
                Span::styled("\u{2588}".repeat(filled), Style::default().fg(Color::Blue)),
                Span::raw(format!(" {}%", category.percent)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), breakdown_inner);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

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

    fn render_analytics(width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_analytics(frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_both_panels() {
        let output = render_analytics(100, 24);
        assert!(output.contains("Analytics"));
        assert!(output.contains("Performance Trends"));
        assert!(output.contains("Category Breakdown"));
    }

    #[test]
    fn renders_all_categories_with_percentages() {
        let output = render_analytics(100, 24);
        for category in data::category_breakdown() {
            assert!(
                output.contains(category.category),
                "missing {}",
                category.category
            );
            assert!(
                output.contains(&format!("{}%", category.percent)),
                "missing {}%",
                category.percent
            );
        }
    }
}
