//! Tapcalc - button-driven four-function calculator
//!
//! A keypad of digit, decimal, operator, equals and clear buttons drives a
//! small state machine. The same [`core::Calculator`] sits behind every host:
//! a headless [`screen::Controller`], the terminal frontend in `tui`, and the
//! command line.
//!
//! # Design
//!
//! - **Single transition point**: every button goes through
//!   [`core::Calculator::dispatch`]
//! - **Visual feedback**: the display always reflects the latest press,
//!   including `Error` when equals fails
//! - **Shared scenarios**: [`driver::CalculatorDriver`] runs one test against
//!   every host
//!
//! # Example
//!
//! ```rust
//! use tapcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for label in ["1", "2", "+", "3", "="] {
//!     calc.dispatch(ButtonEvent::from_label(label).unwrap()).unwrap();
//! }
//! assert_eq!(calc.display(), "15.000");
//! assert_eq!(calc.state().previous, "15.0");
//!
//! // Repeated operator presses replace the pending operator
//! calc.dispatch(ButtonEvent::Operator(Operator::Add)).unwrap();
//! calc.dispatch(ButtonEvent::Operator(Operator::Multiply)).unwrap();
//! assert_eq!(calc.display(), "15.0 ×");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;
pub mod screen;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, DivisionPolicy};
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::{CalcError, CalcResult, Calculator, CalculatorState, Operator, Phase};
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{ButtonEvent, Keypad, KeypadButton};
    pub use crate::screen::{Controller, MockScreen, Screen};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_covers_headless_flow() {
        let mut controller = Controller::<MockScreen>::default();
        controller.press_label("7").unwrap();
        controller.press_label("×").unwrap();
        controller.press_label("6").unwrap();
        controller.press_label("=").unwrap();
        assert_eq!(controller.screen().text(), Some("42.000"));
        assert_eq!(controller.calculator().state().previous, "42.0");
    }

    #[test]
    fn test_prelude_config_reaches_calculator() {
        let config = CalculatorConfig::new().with_division_by_zero(DivisionPolicy::Error);
        let calc = Calculator::with_config(&config);
        assert_eq!(calc.division_policy(), DivisionPolicy::Error);
    }

    #[test]
    fn test_error_is_reported_and_displayed() {
        let mut calc = Calculator::new();
        for event in [
            ButtonEvent::Digit(1),
            ButtonEvent::Decimal,
            ButtonEvent::Decimal,
            ButtonEvent::Operator(Operator::Add),
            ButtonEvent::Digit(1),
        ] {
            calc.dispatch(event).unwrap();
        }
        let err = calc.dispatch(ButtonEvent::Equals).unwrap_err();
        assert!(matches!(err, CalcError::InvalidOperand(_)));
        assert_eq!(calc.display(), "Error");
    }
}
