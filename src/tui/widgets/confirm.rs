//! Confirmation modal — blocking yes/no prompt rendered over the page.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// State for a pending yes/no confirmation.
///
/// While one is active the app routes all keys here; nothing else mutates
/// until the user answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmState {
    message: String,
}

impl ConfirmState {
    /// Creates a confirmation with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The logout confirmation.
    pub fn logout() -> Self {
        Self::new("Are you sure you want to logout?")
    }

    /// The prompt message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Renders the confirmation as a centered modal on top of whatever is
/// already drawn.
#[mutants::skip]
pub fn draw_confirm(state: &ConfirmState, frame: &mut Frame, area: Rect) {
    let width = (state.message().len() as u16 + 6).max(30).min(area.width);
    let [h_area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [modal] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(h_area);

    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(" Confirm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(state.message().to_string()),
        Line::from(""),
        Line::from("y: yes  n: no"),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, modal);
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

    #[test]
    fn logout_prompt_message() {
        let state = ConfirmState::logout();
        assert_eq!(state.message(), "Are you sure you want to logout?");
    }

    #[test]
    fn renders_message_and_choices() {
        let state = ConfirmState::logout();
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_confirm(&state, frame, frame.area());
            })
            .unwrap();
        let output = buffer_to_string(terminal.backend().buffer());
        assert!(output.contains("Are you sure you want to logout?"));
        assert!(output.contains("y: yes"));
        assert!(output.contains("Confirm"));
    }
}
