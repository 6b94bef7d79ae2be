//! Keypad widget for the terminal frontend
//!
//! Draws the shared [`Keypad`] as a grid of bracketed labels and maps mouse
//! positions back to buttons.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{ButtonEvent, Keypad, KeypadButton};

/// Returns the area inside the keypad border
fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Returns the size of one grid cell, or `None` if the area is too small
fn cell_size(keypad: &Keypad, inner: Rect) -> Option<(u16, u16)> {
    let (rows, cols) = keypad.dimensions();
    if rows == 0 || cols == 0 {
        return None;
    }
    let width = inner.width / cols as u16;
    let height = inner.height / rows as u16;
    (width > 0 && height > 0).then_some((width, height))
}

/// Converts a click position inside `area` to the button under it
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<&KeypadButton> {
    let inner = inner_area(area);
    if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height {
        return None;
    }
    let (btn_width, btn_height) = cell_size(keypad, inner)?;

    let col = ((x - inner.x) / btn_width) as usize;
    let row = ((y - inner.y) / btn_height) as usize;
    keypad.get_button_at(row, col)
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    highlighted: Option<ButtonEvent>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            highlighted: None,
        }
    }

    /// Highlights the button emitting `event`
    #[must_use]
    pub fn highlight(mut self, event: Option<ButtonEvent>) -> Self {
        self.highlighted = event;
        self
    }

    fn button_style(&self, button: &KeypadButton) -> Style {
        if self.highlighted == Some(button.event) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match button.event {
            ButtonEvent::Digit(_) | ButtonEvent::Decimal => Style::default().fg(Color::White),
            ButtonEvent::Operator(_) => Style::default().fg(Color::Yellow),
            ButtonEvent::Equals => Style::default().fg(Color::Green),
            ButtonEvent::Clear => Style::default().fg(Color::Red),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = inner_area(area);
        let Some((btn_width, btn_height)) = cell_size(self.keypad, inner) else {
            return;
        };
        if btn_width < 3 {
            return;
        }

        for button in self.keypad.buttons() {
            let x = inner.x + button.col as u16 * btn_width;
            let y = inner.y + button.row as u16 * btn_height;

            let label = format!("[{}]", button.label);
            let label_width = label.chars().count() as u16;
            let label_x = x + btn_width.saturating_sub(label_width) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(
                    label_x,
                    label_y,
                    &Span::styled(label, self.button_style(button)),
                    btn_width,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn area() -> Rect {
        // 4 columns of 5 cells, 5 rows of 2 cells, plus the border
        Rect::new(10, 5, 22, 12)
    }

    #[test]
    fn test_hit_test_first_button() {
        let keypad = Keypad::standard();
        let btn = hit_test(&keypad, area(), 11, 6).unwrap();
        assert_eq!(btn.label, "7");
    }

    #[test]
    fn test_hit_test_operator_column() {
        let keypad = Keypad::standard();
        // Column 3 starts at x = 11 + 15
        let btn = hit_test(&keypad, area(), 26, 6).unwrap();
        assert_eq!(btn.event, ButtonEvent::Operator(Operator::Divide));
    }

    #[test]
    fn test_hit_test_clear_row() {
        let keypad = Keypad::standard();
        // Row 4 starts at y = 6 + 8
        assert_eq!(hit_test(&keypad, area(), 11, 14).unwrap().label, "C");
        // Empty cell next to clear
        assert!(hit_test(&keypad, area(), 17, 14).is_none());
    }

    #[test]
    fn test_hit_test_border_and_outside() {
        let keypad = Keypad::standard();
        assert!(hit_test(&keypad, area(), 10, 6).is_none());
        assert!(hit_test(&keypad, area(), 11, 5).is_none());
        assert!(hit_test(&keypad, area(), 0, 0).is_none());
        assert!(hit_test(&keypad, area(), 40, 40).is_none());
    }

    #[test]
    fn test_hit_test_tiny_area() {
        let keypad = Keypad::standard();
        assert!(hit_test(&keypad, Rect::new(0, 0, 3, 3), 1, 1).is_none());
    }

    #[test]
    fn test_render_draws_labels() {
        let keypad = Keypad::standard();
        let area = Rect::new(0, 0, 22, 12);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        for label in ["[7]", "[÷]", "[×]", "[=]", "[C]"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("Keypad"));
    }

    #[test]
    fn test_render_highlight() {
        let keypad = Keypad::standard();
        let area = Rect::new(0, 0, 22, 12);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad)
            .highlight(Some(ButtonEvent::Digit(7)))
            .render(area, &mut buf);
        // "[7]" is centred in the first 5-cell column: '[' at x=2, '7' at x=3
        let cell = &buf[(3, 2)];
        assert_eq!(cell.symbol(), "7");
        assert_eq!(cell.bg, Color::Yellow);
    }

    #[test]
    fn test_render_too_small_only_border() {
        let keypad = Keypad::standard();
        let area = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(!text.contains("[7]"));
    }
}
