//! The three fields the calculator tracks between presses

use serde::{Deserialize, Serialize};

use super::Operator;

/// Where the calculator is in entering a computation
///
/// Derived from [`CalculatorState`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No pending input, operand or operator
    Idle,
    /// Digits are being typed into the input buffer
    EnteringOperand,
    /// An operand or operator is stored and the next number is awaited
    OperatorSelected,
}

/// Input buffer, stored operand and pending operator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand being typed; empty means no pending input
    pub current: String,
    /// Left operand of the pending operation; empty means none stored
    pub previous: String,
    /// Pending operator
    pub op: Option<Operator>,
}

impl CalculatorState {
    /// Creates an empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the derived phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.current.is_empty() {
            Phase::EnteringOperand
        } else if self.previous.is_empty() && self.op.is_none() {
            Phase::Idle
        } else {
            Phase::OperatorSelected
        }
    }

    /// Returns true when equals would compute a result
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.previous.is_empty() && !self.current.is_empty() && self.op.is_some()
    }

    /// Resets all three fields
    pub fn reset(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.op = None;
    }
}
