//! Navigation bar widget — header with tab labels and notification badge.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Tab;

/// Data passed to the navigation bar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavContext {
    /// The tab to highlight.
    pub active: Tab,
    /// Unread notification count shown as a badge; hidden when zero.
    pub notifications: usize,
}

/// Renders the header bar: app title, one entry per tab with the active one
/// highlighted, and the notification badge on the right.
#[mutants::skip]
pub fn draw_nav(ctx: &NavContext, frame: &mut Frame, area: Rect) {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let active_style = Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let inactive_style = Style::default().fg(Color::Gray);

    let mut spans: Vec<Span> = vec![Span::styled("SAI Admin", title_style), Span::raw("   ")];

    for (i, tab) in Tab::ALL.into_iter().enumerate() {
        let style = if tab == ctx.active {
            active_style
        } else {
            inactive_style
        };
        spans.push(Span::styled(format!("{} {}", i + 1, tab.label()), style));
        spans.push(Span::raw("  "));
    }

    if ctx.notifications > 0 {
        spans.push(Span::styled(
            format!(" \u{1f514}{} ", ctx.notifications),
            Style::default().fg(Color::Red),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(bar, area);
}
