//! Host UI boundary
//!
//! A host owns the widgets. It tells the [`Controller`] which widget was
//! clicked and receives exactly one display update per click through its
//! [`Screen`] implementation.

use crate::config::CalculatorConfig;
use crate::core::{CalcError, CalcResult, Calculator};
use crate::keypad::{ButtonEvent, Keypad};

/// The one outbound effect of the calculator: replacing the shown text
pub trait Screen {
    /// Replaces the display text
    fn set_display(&mut self, text: &str);
}

/// Screen that records every display update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockScreen {
    updates: Vec<String>,
}

impl MockScreen {
    /// Creates an empty screen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently shown text, if anything was shown yet
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.updates.last().map(String::as_str)
    }

    /// Returns every update in order
    #[must_use]
    pub fn updates(&self) -> &[String] {
        &self.updates
    }

    /// Returns the number of updates received
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.updates.len()
    }

    /// Forgets recorded updates
    pub fn clear_updates(&mut self) {
        self.updates.clear();
    }
}

impl Screen for MockScreen {
    fn set_display(&mut self, text: &str) {
        self.updates.push(text.to_string());
    }
}

/// Screen backed by a plain string, for hosts that only need the latest text
impl Screen for String {
    fn set_display(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Wires a keypad and a calculator to a screen
#[derive(Debug)]
pub struct Controller<S: Screen> {
    calculator: Calculator,
    keypad: Keypad,
    screen: S,
}

impl Default for Controller<MockScreen> {
    fn default() -> Self {
        Self::new(MockScreen::new())
    }
}

impl<S: Screen> Controller<S> {
    /// Creates a controller with the standard keypad and default settings
    ///
    /// The screen receives the initial display text.
    pub fn new(screen: S) -> Self {
        Self::with_parts(Calculator::new(), Keypad::standard(), screen)
    }

    /// Creates a controller from configuration
    pub fn with_config(config: &CalculatorConfig, screen: S) -> Self {
        Self::with_parts(Calculator::with_config(config), Keypad::standard(), screen)
    }

    /// Creates a controller from its parts
    pub fn with_parts(calculator: Calculator, keypad: Keypad, mut screen: S) -> Self {
        screen.set_display(calculator.display());
        Self {
            calculator,
            keypad,
            screen,
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

    /// Returns the screen
    #[must_use]
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Consumes the controller and returns the screen
    pub fn into_screen(self) -> S {
        self.screen
    }

    /// Handles a click on a widget id
    ///
    /// Unknown ids are rejected before anything is shown.
    pub fn click(&mut self, widget_id: &str) -> CalcResult<()> {
        let event = self
            .keypad
            .handle_click(widget_id)
            .ok_or_else(|| CalcError::UnknownWidget(widget_id.to_string()))?;
        self.fire(event)
    }

    /// Handles a press of the button carrying `label`
    pub fn press_label(&mut self, label: &str) -> CalcResult<()> {
        let event = self
            .keypad
            .find_button_by_label(label)
            .map(|b| b.event)
            .ok_or_else(|| CalcError::UnknownLabel(label.to_string()))?;
        self.fire(event)
    }

    /// Dispatches an event and pushes the resulting display
    ///
    /// The screen is updated even when equals fails, so it shows the error.
    pub fn fire(&mut self, event: ButtonEvent) -> CalcResult<()> {
        let outcome = self.calculator.dispatch(event).map(|_| ());
        self.screen.set_display(self.calculator.display());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    #[test]
    fn test_mock_screen_records_updates() {
        let mut screen = MockScreen::new();
        assert_eq!(screen.text(), None);
        screen.set_display("1");
        screen.set_display("12");
        assert_eq!(screen.text(), Some("12"));
        assert_eq!(screen.updates(), ["1", "12"]);
        assert_eq!(screen.update_count(), 2);
        screen.clear_updates();
        assert_eq!(screen.update_count(), 0);
    }

    #[test]
    fn test_string_screen_keeps_latest() {
        let mut screen = String::new();
        screen.set_display("12");
        screen.set_display("12 +");
        assert_eq!(screen, "12 +");
    }

    #[test]
    fn test_controller_shows_initial_display() {
        let controller = Controller::<MockScreen>::default();
        assert_eq!(controller.screen().text(), Some("0"));
    }

    #[test]
    fn test_click_updates_screen_once_per_event() {
        let mut controller = Controller::<MockScreen>::default();
        for id in ["btn-1", "btn-2", "btn-add", "btn-3", "btn-equals"] {
            controller.click(id).unwrap();
        }
        assert_eq!(
            controller.screen().updates(),
            ["0", "1", "12", "12 +", "3", "15.000"]
        );
        assert_eq!(controller.calculator().state().previous, "15.0");
    }

    #[test]
    fn test_click_unknown_widget() {
        let mut controller = Controller::<MockScreen>::default();
        let err = controller.click("btn-sqrt").unwrap_err();
        assert_eq!(err, CalcError::UnknownWidget("btn-sqrt".into()));
        assert_eq!(controller.screen().update_count(), 1);
    }

    #[test]
    fn test_press_label() {
        let mut controller = Controller::<MockScreen>::default();
        for label in ["5", "÷", "0", "="] {
            controller.press_label(label).unwrap();
        }
        assert_eq!(controller.screen().text(), Some("0.000"));
    }

    #[test]
    fn test_press_unknown_label() {
        let mut controller = Controller::<MockScreen>::default();
        assert_eq!(
            controller.press_label("sqrt"),
            Err(CalcError::UnknownLabel("sqrt".into()))
        );
    }

    #[test]
    fn test_failed_equals_still_updates_screen() {
        let mut controller = Controller::<MockScreen>::default();
        for label in ["1", ".", ".", "+", "2"] {
            controller.press_label(label).unwrap();
        }
        let err = controller.press_label("=").unwrap_err();
        assert!(matches!(err, CalcError::InvalidOperand(_)));
        assert_eq!(controller.screen().text(), Some("Error"));
    }

    #[test]
    fn test_with_config_strict_division() {
        let config = CalculatorConfig::new()
            .with_division_by_zero(crate::config::DivisionPolicy::Error);
        let mut controller = Controller::with_config(&config, MockScreen::new());
        controller.fire(ButtonEvent::Digit(1)).unwrap();
        controller
            .fire(ButtonEvent::Operator(Operator::Divide))
            .unwrap();
        controller.fire(ButtonEvent::Digit(0)).unwrap();
        assert_eq!(
            controller.fire(ButtonEvent::Equals),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_into_screen() {
        let mut controller = Controller::new(String::new());
        controller.click("btn-9").unwrap();
        assert_eq!(controller.into_screen(), "9");
    }
}
