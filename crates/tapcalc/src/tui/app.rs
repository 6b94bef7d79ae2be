//! TUI Application State
//!
//! Error prevention: the app only forwards button events; the calculator
//! decides every transition

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::hit_test;
use crate::config::CalculatorConfig;
use crate::core::{CalcError, Calculator};
use crate::keypad::{ButtonEvent, Keypad};

/// Calculator application state
#[derive(Debug, Clone)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    /// Button pressed last, shown highlighted
    highlighted: Option<ButtonEvent>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates a calculator app from configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
            keypad: Keypad::standard(),
            highlighted: None,
            should_quit: false,
        }
    }

    /// Returns the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the highlighted button event
    #[must_use]
    pub fn highlighted(&self) -> Option<ButtonEvent> {
        self.highlighted
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a button
    ///
    /// Errors from equals are shown on the display, so they are not returned.
    pub fn press(&mut self, event: ButtonEvent) {
        self.highlighted = Some(event);
        if let Err(err) = self.calculator.dispatch(event) {
            tracing::debug!(error = %err, "shown on display");
        }
    }

    /// Applies a keyboard action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(event) => self.press(event),
            KeyAction::ClearAll => {
                self.highlighted = Some(ButtonEvent::Clear);
                self.calculator.clear_all();
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a mouse click at terminal position (x, y) given the keypad area
    ///
    /// Returns true if a button was hit.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> bool {
        let Some(event) = hit_test(&self.keypad, keypad_area, x, y).map(|b| b.event) else {
            return false;
        };
        self.press(event);
        true
    }

    /// Status lines for the status panel
    #[must_use]
    pub fn status(&self) -> Vec<String> {
        let state = self.calculator.state();
        let mut lines = vec![format!("Phase: {:?}", self.calculator.phase())];

        if let Some(op) = state.op {
            let stored = if state.previous.is_empty() {
                "(none)"
            } else {
                state.previous.as_str()
            };
            lines.push(format!("Pending: {stored} {op}"));
        }

        match self.calculator.last_error() {
            Some(CalcError::InvalidOperand(text)) => {
                lines.push(format!("✗ Not a number: {text}"));
            }
            Some(err) => lines.push(format!("✗ {err}")),
            None => {}
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DivisionPolicy;
    use crate::core::{Operator, Phase};

    fn press_all(app: &mut CalculatorApp, labels: &[&str]) {
        for label in labels {
            app.press(ButtonEvent::from_label(label).unwrap());
        }
    }

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.calculator().display(), "0");
        assert!(app.highlighted().is_none());
        assert!(!app.should_quit());
        assert_eq!(app.keypad().button_count(), 17);
    }

    #[test]
    fn test_app_with_config() {
        let config = CalculatorConfig::new().with_division_by_zero(DivisionPolicy::Error);
        let mut app = CalculatorApp::with_config(&config);
        press_all(&mut app, &["1", "÷", "0", "="]);
        assert_eq!(app.calculator().display(), "Error");
        assert_eq!(
            app.calculator().last_error(),
            Some(&CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_press_highlights_and_dispatches() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &["4", "+"]);
        assert_eq!(app.highlighted(), Some(ButtonEvent::Operator(Operator::Add)));
        assert_eq!(app.calculator().display(), "4 +");
    }

    #[test]
    fn test_handle_action_press() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::Press(ButtonEvent::Digit(9)));
        assert_eq!(app.calculator().display(), "9");
    }

    #[test]
    fn test_handle_action_clear_all() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &["2", "+", "2", "="]);
        assert_eq!(app.calculator().history().len(), 1);
        app.handle_action(KeyAction::ClearAll);
        assert!(app.calculator().history().is_empty());
        assert_eq!(app.calculator().display(), "0");
    }

    #[test]
    fn test_handle_action_quit_and_none() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::None);
        assert!(!app.should_quit());
        app.handle_action(KeyAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_click_on_button() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 22, 12);
        assert!(app.click(area, 1, 1));
        assert_eq!(app.calculator().display(), "7");
        assert!(!app.click(area, 0, 0));
        assert_eq!(app.calculator().display(), "7");
    }

    #[test]
    fn test_status_idle() {
        let app = CalculatorApp::new();
        assert_eq!(app.status(), vec!["Phase: Idle".to_string()]);
    }

    #[test]
    fn test_status_pending() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &["1", "2", "×"]);
        assert_eq!(app.calculator().phase(), Phase::OperatorSelected);
        let status = app.status();
        assert!(status.contains(&"Pending: 12 ×".to_string()));
    }

    #[test]
    fn test_status_pending_without_operand() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &["-"]);
        assert!(app.status().contains(&"Pending: (none) -".to_string()));
    }

    #[test]
    fn test_status_error() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &["1", ".", ".", "+", "1", "="]);
        assert!(app.status().iter().any(|s| s.contains("Not a number: 1..")));
    }
}
