//! Reusable form widget for text input screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown above the input.
    pub label: String,
    /// Current text value.
    pub value: String,
    /// Whether the field must be non-empty on submit.
    pub required: bool,
    /// Whether the value renders masked (passwords).
    pub secret: bool,
}

impl FormField {
    /// Creates a new plain-text form field.
    pub fn new(label: impl Into<String>, required: bool) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            required,
            secret: false,
        }
    }

    /// Creates a new masked form field.
    pub fn secret(label: impl Into<String>, required: bool) -> Self {
        Self {
            secret: true,
            ..Self::new(label, required)
        }
    }

    /// The text to render: the raw value, or one mask dot per character
    /// for secret fields.
    pub fn display_value(&self) -> String {
        if self.secret {
            "\u{2022}".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// A multi-field text form with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Inserts a character at the end of the focused field.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(ch);
        }
    }

    /// Deletes the last character from the focused field.
    pub fn delete_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Replaces the value of the field at `index`. Out-of-bounds is a no-op.
    ///
    /// Used to reseed a draft from committed values when the form is rebuilt.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Resets all field values and focus.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = 0;
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(row_height))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus;

        let border_color = if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::raw(field.display_value())];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form() -> Form {
        Form::new(vec![
            FormField::new("Email Address", true),
            FormField::secret("Password", true),
            FormField::new("Full Name", false),
        ])
    }

    // --- Focus management ---

    #[test]
    fn focus_starts_at_zero() {
        let form = make_form();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_next_advances_and_wraps() {
        let mut form = make_form();
        form.focus_next();
        assert_eq!(form.focus(), 1);
        form.focus_next();
        assert_eq!(form.focus(), 2);
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_prev_wraps() {
        let mut form = make_form();
        form.focus_prev();
        assert_eq!(form.focus(), 2);
    }

    #[test]
    fn focus_on_empty_form_is_noop() {
        let mut form = Form::new(vec![]);
        form.focus_next();
        assert_eq!(form.focus(), 0);
        form.focus_prev();
        assert_eq!(form.focus(), 0);
    }

    // --- Character insert/delete ---

    #[test]
    fn insert_char_appends_to_focused() {
        let mut form = make_form();
        form.insert_char('j');
        form.insert_char('@');
        assert_eq!(form.value(0), "j@");
        assert_eq!(form.value(1), "");
    }

    #[test]
    fn insert_char_follows_focus() {
        let mut form = make_form();
        form.focus_next();
        form.insert_char('x');
        assert_eq!(form.value(0), "");
        assert_eq!(form.value(1), "x");
    }

    #[test]
    fn delete_char_removes_last() {
        let mut form = make_form();
        form.insert_char('a');
        form.insert_char('b');
        form.delete_char();
        assert_eq!(form.value(0), "a");
    }

    #[test]
    fn delete_char_on_empty_is_noop() {
        let mut form = make_form();
        form.delete_char();
        assert_eq!(form.value(0), "");
    }

    // --- Values ---

    #[test]
    fn value_out_of_bounds_returns_empty() {
        let form = make_form();
        assert_eq!(form.value(99), "");
    }

    #[test]
    fn set_value_replaces_field_content() {
        let mut form = make_form();
        form.set_value(0, "j@x.com");
        assert_eq!(form.value(0), "j@x.com");
    }

    #[test]
    fn set_value_out_of_bounds_is_noop() {
        let mut form = make_form();
        form.set_value(99, "nope");
        assert_eq!(form.value(0), "");
    }

    // --- Masking ---

    #[test]
    fn secret_field_displays_mask_dots() {
        let mut form = make_form();
        form.focus_next(); // password
        for ch in "abcdef".chars() {
            form.insert_char(ch);
        }
        assert_eq!(form.value(1), "abcdef");
        assert_eq!(form.fields()[1].display_value(), "\u{2022}".repeat(6));
    }

    #[test]
    fn plain_field_displays_raw_value() {
        let mut form = make_form();
        form.insert_char('a');
        assert_eq!(form.fields()[0].display_value(), "a");
    }

    // --- Reset ---

    #[test]
    fn reset_clears_values_and_focus() {
        let mut form = make_form();
        form.insert_char('x');
        form.focus_next();
        form.reset();
        assert_eq!(form.value(0), "");
        assert_eq!(form.focus(), 0);
    }

    // --- Fields accessor ---

    #[test]
    fn fields_returns_labels_and_flags() {
        let form = make_form();
        let labels: Vec<&str> = form.fields().iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Email Address", "Password", "Full Name"]);
        assert!(form.fields()[0].required);
        assert!(form.fields()[1].secret);
        assert!(!form.fields()[2].secret);
    }

    // --- Rendering ---

    mod rendering {
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

        fn render_form(form: &Form, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_form(form, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_labels_with_required_marker() {
            let form = make_form();
            let output = render_form(&form, 40, 12);
            assert!(output.contains("Email Address *"));
            assert!(output.contains("Password *"));
            assert!(output.contains("Full Name"));
        }

        #[test]
        fn renders_masked_password_value() {
            let mut form = make_form();
            form.focus_next();
            for ch in "secret".chars() {
                form.insert_char(ch);
            }
            let output = render_form(&form, 40, 12);
            assert!(output.contains(&"\u{2022}".repeat(6)));
            assert!(!output.contains("secret"), "raw password must not render");
        }
    }
}
