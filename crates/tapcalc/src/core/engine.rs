//! Button-driven calculator state machine
//!
//! Error prevention: every transition goes through [`Calculator::dispatch`],
//! and the display is only ever written by the transition that produced it.

use crate::config::{CalculatorConfig, DivisionPolicy};
use crate::core::history::{History, HistoryEntry};
use crate::core::number::{format_display, parse_operand, stringify_result};
use crate::core::{CalcError, CalcResult, CalculatorState, Operator, Phase};
use crate::keypad::ButtonEvent;

/// Display text after clear and at start-up
pub const INITIAL_DISPLAY: &str = "0";

/// Display text after equals fails
pub const ERROR_DISPLAY: &str = "Error";

/// Four-function calculator driven by button presses
#[derive(Debug, Clone)]
pub struct Calculator {
    state: CalculatorState,
    display: String,
    history: History,
    division: DivisionPolicy,
    last_error: Option<CalcError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates a calculator from configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            display: INITIAL_DISPLAY.to_string(),
            history: History::with_capacity(config.history_capacity),
            division: config.division_by_zero,
            last_error: None,
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the input buffer, stored operand and pending operator
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the derived phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the history of completed computations
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the error from the last equals press, if it failed
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Returns the division-by-zero policy in effect
    #[must_use]
    pub fn division_policy(&self) -> DivisionPolicy {
        self.division
    }

    /// Routes one button event and returns the new display text
    pub fn dispatch(&mut self, event: ButtonEvent) -> CalcResult<&str> {
        tracing::debug!(%event, phase = ?self.phase(), "dispatch");
        match event {
            ButtonEvent::Digit(d) => self.press_digit(d),
            ButtonEvent::Decimal => self.press_decimal(),
            ButtonEvent::Operator(op) => self.press_operator(op),
            ButtonEvent::Equals => self.press_equals()?,
            ButtonEvent::Clear => self.press_clear(),
        }
        Ok(&self.display)
    }

    /// Appends a digit to the input buffer
    ///
    /// Values above 9 are ignored.
    pub fn press_digit(&mut self, digit: u8) {
        if let Some(c) = char::from_digit(u32::from(digit), 10) {
            self.append(c);
        }
    }

    /// Appends a decimal point to the input buffer
    ///
    /// Repeated points are accepted here and rejected when equals parses the
    /// operand.
    pub fn press_decimal(&mut self) {
        self.append('.');
    }

    fn append(&mut self, c: char) {
        self.last_error = None;
        self.state.current.push(c);
        self.display.clone_from(&self.state.current);
    }

    /// Selects an operator
    ///
    /// Pending input moves into the stored operand. Without pending input only
    /// the operator changes, so repeated presses overwrite each other.
    pub fn press_operator(&mut self, op: Operator) {
        self.last_error = None;
        if !self.state.current.is_empty() {
            self.state.previous = std::mem::take(&mut self.state.current);
        }
        self.state.op = Some(op);
        self.display = format!("{} {}", self.state.previous, op.symbol());
    }

    /// Computes the pending operation
    ///
    /// Does nothing unless an operand is stored and input is pending. On
    /// success the display shows the result with three decimals and the
    /// unformatted result becomes the stored operand. On failure the display
    /// shows [`ERROR_DISPLAY`] and the three fields are left as they were.
    pub fn press_equals(&mut self) -> CalcResult<()> {
        if !self.state.is_ready() {
            return Ok(());
        }
        let Some(op) = self.state.op else {
            return Ok(());
        };

        match self.compute(op) {
            Ok(result) => {
                let shown = format_display(result);
                tracing::info!(
                    left = %self.state.previous,
                    op = %op,
                    right = %self.state.current,
                    result = %shown,
                    "computed"
                );
                self.history.push(HistoryEntry::new(
                    self.state.previous.as_str(),
                    op,
                    self.state.current.as_str(),
                    result,
                    shown.as_str(),
                ));
                self.state.previous = stringify_result(result);
                self.state.current.clear();
                self.display = shown;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "equals failed");
                self.display = ERROR_DISPLAY.to_string();
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn compute(&self, op: Operator) -> CalcResult<f64> {
        let a = parse_operand(&self.state.previous)?;
        let b = parse_operand(&self.state.current)?;
        op.apply(a, b, self.division)
    }

    /// Resets input, stored operand and operator; display shows `0`
    ///
    /// History is kept.
    pub fn press_clear(&mut self) {
        self.state.reset();
        self.last_error = None;
        self.display = INITIAL_DISPLAY.to_string();
    }

    /// Clears everything including history
    pub fn clear_all(&mut self) {
        self.press_clear();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &mut Calculator, labels: &str) {
        for label in labels.split_whitespace() {
            let event = ButtonEvent::from_label(label).unwrap();
            let _ = calc.dispatch(event);
        }
    }

    // ===== Construction =====

    #[test]
    fn test_new_calculator() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.phase(), Phase::Idle);
        assert!(calc.history().is_empty());
        assert!(calc.last_error().is_none());
        assert_eq!(calc.division_policy(), DivisionPolicy::Zero);
    }

    #[test]
    fn test_with_config() {
        let config = CalculatorConfig::new()
            .with_division_by_zero(DivisionPolicy::Error)
            .with_history_capacity(2);
        let calc = Calculator::with_config(&config);
        assert_eq!(calc.division_policy(), DivisionPolicy::Error);
        assert_eq!(calc.history().max_entries(), 2);
    }

    // ===== Digit entry =====

    #[test]
    fn test_digits_concatenate() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 2 . 5");
        assert_eq!(calc.display(), "12.5");
        assert_eq!(calc.state().current, "12.5");
        assert_eq!(calc.phase(), Phase::EnteringOperand);
    }

    #[test]
    fn test_leading_zeros_kept_verbatim() {
        let mut calc = Calculator::new();
        press(&mut calc, "0 0 7");
        assert_eq!(calc.display(), "007");
    }

    #[test]
    fn test_press_digit_out_of_range_ignored() {
        let mut calc = Calculator::new();
        calc.press_digit(12);
        assert_eq!(calc.display(), "0");
        assert!(calc.state().current.is_empty());
    }

    // ===== Operator =====

    #[test]
    fn test_operator_moves_input_to_stored_operand() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 2 +");
        assert_eq!(calc.display(), "12 +");
        assert_eq!(calc.state().previous, "12");
        assert_eq!(calc.state().current, "");
        assert_eq!(calc.state().op, Some(Operator::Add));
        assert_eq!(calc.phase(), Phase::OperatorSelected);
    }

    #[test]
    fn test_repeated_operator_overwrites() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 2 + - ×");
        assert_eq!(calc.display(), "12 ×");
        assert_eq!(calc.state().previous, "12");
        assert_eq!(calc.state().op, Some(Operator::Multiply));
    }

    #[test]
    fn test_operator_without_operand() {
        let mut calc = Calculator::new();
        press(&mut calc, "÷");
        assert_eq!(calc.display(), " ÷");
        assert_eq!(calc.state().previous, "");
        assert_eq!(calc.state().op, Some(Operator::Divide));
    }

    // ===== Equals =====

    #[test]
    fn test_equals_chain_result() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 2 + 3 =");
        assert_eq!(calc.display(), "15.000");
        assert_eq!(calc.state().previous, "15.0");
        assert_eq!(calc.state().current, "");
    }

    #[test]
    fn test_each_operator() {
        for (keys, expected) in [
            ("7 - 9 =", "-2.000"),
            ("2 . 5 × 4 =", "10.000"),
            ("1 ÷ 3 =", "0.333"),
            ("0 . 1 + 0 . 2 =", "0.300"),
        ] {
            let mut calc = Calculator::new();
            press(&mut calc, keys);
            assert_eq!(calc.display(), expected, "keys: {keys}");
        }
    }

    #[test]
    fn test_chained_computation() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 2 + 3 = × 2 =");
        assert_eq!(calc.display(), "30.000");
        assert_eq!(calc.state().previous, "30.0");
        assert_eq!(calc.history().len(), 2);
    }

    #[test]
    fn test_chain_reuses_operator_after_new_digits() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 0 - 1 = 2 =");
        // 10 - 1 = 9, then 9 - 2 = 7
        assert_eq!(calc.display(), "7.000");
    }

    #[test]
    fn test_divide_by_zero_yields_zero() {
        let mut calc = Calculator::new();
        press(&mut calc, "5 ÷ 0");
        assert_eq!(calc.press_equals(), Ok(()));
        assert_eq!(calc.display(), "0.000");
        assert_eq!(calc.state().previous, "0.0");
        assert!(calc.last_error().is_none());
    }

    #[test]
    fn test_divide_by_zero_strict_policy() {
        let config = CalculatorConfig::new().with_division_by_zero(DivisionPolicy::Error);
        let mut calc = Calculator::with_config(&config);
        press(&mut calc, "5 ÷ 0");
        assert_eq!(calc.press_equals(), Err(CalcError::DivisionByZero));
        assert_eq!(calc.display(), ERROR_DISPLAY);
        assert_eq!(calc.last_error(), Some(&CalcError::DivisionByZero));
        // Fields untouched so the user can correct or clear
        assert_eq!(calc.state().previous, "5");
        assert_eq!(calc.state().current, "0");
    }

    #[test]
    fn test_equals_with_empty_state_is_noop() {
        let mut calc = Calculator::new();
        press(&mut calc, "4 2");
        let before = calc.clone();
        assert_eq!(calc.press_equals(), Ok(()));
        assert_eq!(calc.display(), before.display());
        assert_eq!(calc.state(), before.state());

        let mut idle = Calculator::new();
        assert_eq!(idle.press_equals(), Ok(()));
        assert_eq!(idle.display(), "0");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 2 + 3");
        calc.state.op = None;
        assert!(!calc.state().is_ready());

        let before = calc.clone();
        assert_eq!(calc.press_equals(), Ok(()));
        assert_eq!(calc.display(), before.display());
        assert_eq!(calc.state(), before.state());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_large_result_is_stored_without_exponent() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 0 0 0 0 0 0 0 × 1 = +");
        assert_eq!(calc.state().previous, "10000000.0");
        assert_eq!(calc.display(), "10000000.0 +");
    }

    #[test]
    fn test_equals_twice_is_noop_second_time() {
        let mut calc = Calculator::new();
        press(&mut calc, "2 × 3 = =");
        assert_eq!(calc.display(), "6.000");
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_equals_without_stored_operand() {
        let mut calc = Calculator::new();
        press(&mut calc, "+ 3 =");
        assert_eq!(calc.display(), "3");
        assert_eq!(calc.state().current, "3");
    }

    #[test]
    fn test_malformed_operand_reports_error() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 . 2 . 3 + 1");
        let err = calc.press_equals().unwrap_err();
        assert_eq!(err, CalcError::InvalidOperand("1.2.3".into()));
        assert_eq!(calc.display(), "Error");
        assert_eq!(calc.state().previous, "1.2.3");
        assert_eq!(calc.state().current, "1");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_error_cleared_by_next_press() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 + . =");
        assert!(calc.last_error().is_some());
        press(&mut calc, "5");
        assert!(calc.last_error().is_none());
        assert_eq!(calc.display(), ".5");
    }

    #[test]
    fn test_overflow_reports_error() {
        let mut calc = Calculator::new();
        let big = "9".repeat(200);
        for c in big.chars() {
            calc.press_digit(c.to_digit(10).unwrap() as u8);
        }
        press(&mut calc, "×");
        for c in big.chars() {
            calc.press_digit(c.to_digit(10).unwrap() as u8);
        }
        assert_eq!(calc.press_equals(), Err(CalcError::Overflow));
        assert_eq!(calc.display(), ERROR_DISPLAY);
    }

    #[test]
    fn test_dispatch_returns_display() {
        let mut calc = Calculator::new();
        assert_eq!(calc.dispatch(ButtonEvent::Digit(8)), Ok("8"));
        assert_eq!(
            calc.dispatch(ButtonEvent::Operator(Operator::Subtract)),
            Ok("8 -")
        );
        assert_eq!(calc.dispatch(ButtonEvent::Digit(3)), Ok("3"));
        assert_eq!(calc.dispatch(ButtonEvent::Equals), Ok("5.000"));
        assert_eq!(calc.dispatch(ButtonEvent::Clear), Ok("0"));
    }

    // ===== Clear =====

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 2 + 3");
        calc.press_clear();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.state(), &CalculatorState::new());
        assert_eq!(calc.phase(), Phase::Idle);
    }

    #[test]
    fn test_clear_idempotent() {
        let mut once = Calculator::new();
        press(&mut once, "9 × 9 = 1");
        once.press_clear();
        let mut twice = once.clone();
        twice.press_clear();
        assert_eq!(once.state(), twice.state());
        assert_eq!(once.display(), twice.display());
    }

    #[test]
    fn test_clear_keeps_history_clear_all_drops_it() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 + 1 =");
        calc.press_clear();
        assert_eq!(calc.history().len(), 1);
        calc.clear_all();
        assert!(calc.history().is_empty());
    }

    // ===== History =====

    #[test]
    fn test_history_records_operands_as_typed() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 2 + 3 = × 2 =");
        let entries: Vec<String> = calc.history().iter().map(ToString::to_string).collect();
        assert_eq!(entries, vec!["12 + 3 = 15.000", "15.0 × 2 = 30.000"]);
    }
}
