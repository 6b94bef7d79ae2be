//! TUI rendering
//!
//! Visual feedback: the display, pending operation and history stay visible
//! next to the keypad

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::ERROR_DISPLAY;

const TITLE: &str = " tapcalc ";
const KEYPAD_WIDTH: u16 = 24;
const HISTORY_ROWS: usize = 10;

/// Help text shown under the history
const HELP: &str = "0-9 . + - * /  Enter =  Esc C  ^L clear all  q quit";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Returns the area the keypad occupies when the UI fills `area`
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    split_main(area)[1]
}

fn split_main(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Min(30), Constraint::Length(KEYPAD_WIDTH)])
        .split(area)
        .to_vec()
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.calculator().display();
        let style = if text == ERROR_DISPLAY {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .status()
            .into_iter()
            .map(|line| {
                let style = if line.starts_with('✗') {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Span::styled(line, style))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            )
            .render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .calculator()
            .history()
            .iter_rev()
            .take(HISTORY_ROWS)
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(entry.display.as_str(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" History (newest first) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP, Style::default().fg(Color::DarkGray)))
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let columns = split_main(area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Display
                Constraint::Length(4), // Status
                Constraint::Min(3),    // History
                Constraint::Length(2), // Help
            ])
            .split(columns[0]);

        self.render_display(rows[0], buf);
        self.render_status(rows[1], buf);
        self.render_history(rows[2], buf);
        Self::render_help(rows[3], buf);

        KeypadWidget::new(self.app.keypad())
            .highlight(self.app.highlighted())
            .render(columns[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::ButtonEvent;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &CalculatorApp) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(app, f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app_after(labels: &[&str]) -> CalculatorApp {
        let mut app = CalculatorApp::new();
        for label in labels {
            app.press(ButtonEvent::from_label(label).unwrap());
        }
        app
    }

    #[test]
    fn test_render_initial_screen() {
        let screen = draw(&CalculatorApp::new());
        assert!(screen.contains("tapcalc"));
        assert!(screen.contains("Display"));
        assert!(screen.contains("Keypad"));
        assert!(screen.contains("Phase: Idle"));
    }

    #[test]
    fn test_render_result_and_history() {
        let screen = draw(&app_after(&["1", "2", "+", "3", "="]));
        assert!(screen.contains("15.000"));
        assert!(screen.contains("12 + 3 = 15.000"));
    }

    #[test]
    fn test_render_error_display() {
        let screen = draw(&app_after(&["1", ".", ".", "+", "1", "="]));
        assert!(screen.contains("Error"));
    }

    #[test]
    fn test_keypad_area_on_right() {
        let area = Rect::new(0, 0, 80, 24);
        let keypad = keypad_area(area);
        assert_eq!(keypad.width, KEYPAD_WIDTH);
        assert_eq!(keypad.x + keypad.width, 79);
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let backend = TestBackend::new(10, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(&CalculatorApp::new(), f))
            .unwrap();
    }
}
