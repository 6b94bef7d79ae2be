//! Binary operators offered by the keypad
//!
//! Error prevention: a closed enum keeps the equals dispatch exhaustive

use serde::{Deserialize, Serialize};

use crate::config::DivisionPolicy;
use crate::core::{CalcError, CalcResult};

/// Type-safe operator enum - compile-time guarantee of valid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Returns the name used in widget ids (`btn-<name>`)
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Parses an operator symbol, accepting ASCII and typographic variants
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "+" => Some(Self::Add),
            "-" | "−" | "－" => Some(Self::Subtract),
            "×" | "*" | "x" | "X" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    ///
    /// A zero divisor yields `0.0` under [`DivisionPolicy::Zero`] and
    /// [`CalcError::DivisionByZero`] under [`DivisionPolicy::Error`].
    pub fn apply(self, a: f64, b: f64, policy: DivisionPolicy) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return match policy {
                        DivisionPolicy::Zero => {
                            tracing::warn!(dividend = a, "division by zero coerced to 0");
                            Ok(0.0)
                        }
                        DivisionPolicy::Error => Err(CalcError::DivisionByZero),
                    };
                }
                a / b
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| CalcError::UnknownLabel(s.to_string()))
    }
}
