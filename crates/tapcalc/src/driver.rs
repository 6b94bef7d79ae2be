//! Unified Calculator Driver
//!
//! Write the scenario once, run it against every host. Each host wraps the
//! same [`Calculator`](crate::core::Calculator); the driver only describes
//! how a test presses buttons and reads the display back.
//!
//! ```rust
//! use tapcalc::prelude::*;
//!
//! fn adds_up<D: CalculatorDriver>(driver: &mut D) {
//!     driver.press_all(&["1", "2", "+", "3", "="]).unwrap();
//!     assert_eq!(driver.display(), "15.000");
//! }
//!
//! adds_up(&mut Controller::<MockScreen>::default());
//! ```

use crate::core::{CalcResult, CalculatorState};
use crate::screen::{Controller, Screen};

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Presses the button carrying `label`
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Returns the text currently shown
    fn display(&self) -> String;

    /// Returns the calculator's three fields
    fn state(&self) -> CalculatorState;

    /// Presses the clear button
    fn clear(&mut self);

    /// Presses every label in order, stopping at the first error
    fn press_all(&mut self, labels: &[&str]) -> CalcResult<()> {
        labels.iter().try_for_each(|label| self.press(label))
    }
}

impl<S: Screen> CalculatorDriver for Controller<S> {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        self.press_label(label)
    }

    fn display(&self) -> String {
        self.calculator().display().to_string()
    }

    fn state(&self) -> CalculatorState {
        self.calculator().state().clone()
    }

    fn clear(&mut self) {
        // Clear never fails
        let _ = self.fire(crate::keypad::ButtonEvent::Clear);
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcResult, CalculatorDriver, CalculatorState};
    use crate::core::CalcError;
    use crate::tui::CalculatorApp;

    /// Drives the terminal app the way key presses would
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, label: &str) -> CalcResult<()> {
            let event = self
                .app
                .keypad()
                .find_button_by_label(label)
                .map(|b| b.event)
                .ok_or_else(|| CalcError::UnknownLabel(label.to_string()))?;
            self.app.press(event);
            match self.app.calculator().last_error() {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        fn display(&self) -> String {
            self.app.calculator().display().to_string()
        }

        fn state(&self) -> CalculatorState {
            self.app.calculator().state().clone()
        }

        fn clear(&mut self) {
            self.app.press(crate::keypad::ButtonEvent::Clear);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;
