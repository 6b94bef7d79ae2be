//! Calculator core: operators, operand handling and the button state machine
//!
//! Nothing in here knows about widgets or terminals. Hosts feed
//! [`ButtonEvent`](crate::keypad::ButtonEvent)s into a [`Calculator`] and show
//! whatever [`Calculator::display`] returns.

mod engine;
pub mod history;
pub mod number;
mod operator;
mod state;

pub use engine::{Calculator, ERROR_DISPLAY, INITIAL_DISPLAY};
pub use operator::Operator;
pub use state::{CalculatorState, Phase};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An operand string is not a decimal literal (for example `1.2.3`)
    #[error("Invalid operand: {0:?}")]
    InvalidOperand(String),

    /// Division by zero under the strict division policy
    #[error("Division by zero")]
    DivisionByZero,

    /// Result is not a finite number
    #[error("Overflow: result exceeds maximum value")]
    Overflow,

    /// Click on a widget id the keypad does not define
    #[error("Unknown widget: {0}")]
    UnknownWidget(String),

    /// Press of a label no keypad button carries
    #[error("Unknown button label: {0:?}")]
    UnknownLabel(String),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalcError {
    /// Creates a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns true for errors raised while computing a result, as opposed to
    /// errors in routing input to the calculator
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::InvalidOperand(_) | Self::DivisionByZero | Self::Overflow
        )
    }
}
