//! Keypad dispatch table
//!
//! Every button on the screen maps to exactly one [`ButtonEvent`]. Hosts look
//! buttons up by widget id, label, grid position or keyboard key, then hand the
//! event to the calculator. One factory builds every button, so no button
//! needs its own handler.

use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// The four kinds of input the calculator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonEvent {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append a decimal point
    Decimal,
    /// Select an operator
    Operator(Operator),
    /// Compute the pending operation
    Equals,
    /// Reset everything
    Clear,
}

impl ButtonEvent {
    /// Returns the button label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
        }
    }

    /// Returns the widget id for this event
    #[must_use]
    pub fn widget_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(op) => format!("btn-{}", op.name()),
            Self::Equals => "btn-equals".to_string(),
            Self::Clear => "btn-clear".to_string(),
        }
    }

    /// Parses a button label, accepting operator aliases such as `*` and `/`
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "." => Some(Self::Decimal),
            "=" => Some(Self::Equals),
            "C" | "c" => Some(Self::Clear),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => {
                        c.to_digit(10).map(|d| Self::Digit(d as u8))
                    }
                    _ => Operator::from_symbol(other).map(Self::Operator),
                }
            }
        }
    }
}

impl std::fmt::Display for ButtonEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The event this button emits
    pub event: ButtonEvent,
    /// Widget id the host UI knows this button by
    pub id: String,
    /// Text on the button
    pub label: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button; id and label are derived from the event
    #[must_use]
    pub fn new(event: ButtonEvent, row: usize, col: usize) -> Self {
        Self {
            id: event.widget_id(),
            label: event.label(),
            event,
            row,
            col,
        }
    }
}

/// Keypad layout
///
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
/// [ 4 ] [ 5 ] [ 6 ] [ × ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ . ] [ 0 ] [ = ] [ + ]
/// [ C ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// Creates the standard four-function keypad
    #[must_use]
    pub fn standard() -> Self {
        use ButtonEvent::{Clear, Decimal, Digit, Equals};

        let layout: [&[ButtonEvent]; 5] = [
            &[Digit(7), Digit(8), Digit(9), ButtonEvent::Operator(Operator::Divide)],
            &[Digit(4), Digit(5), Digit(6), ButtonEvent::Operator(Operator::Multiply)],
            &[Digit(1), Digit(2), Digit(3), ButtonEvent::Operator(Operator::Subtract)],
            &[Decimal, Digit(0), Equals, ButtonEvent::Operator(Operator::Add)],
            &[Clear],
        ];

        Self::from_rows(&layout)
    }

    /// Builds a keypad from rows of events
    #[must_use]
    pub fn from_rows(rows: &[&[ButtonEvent]]) -> Self {
        let buttons = rows
            .iter()
            .enumerate()
            .flat_map(|(row, events)| {
                events
                    .iter()
                    .enumerate()
                    .map(move |(col, event)| KeypadButton::new(*event, row, col))
            })
            .collect();
        let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);

        Self {
            buttons,
            rows: rows.len(),
            cols,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns all button definitions in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by widget id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by label, accepting operator aliases
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButton> {
        let event = ButtonEvent::from_label(label)?;
        self.find_button_by_event(event)
    }

    /// Finds the button that emits an event
    #[must_use]
    pub fn find_button_by_event(&self, event: ButtonEvent) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.event == event)
    }

    /// Returns the event for a click on a widget id
    #[must_use]
    pub fn handle_click(&self, widget_id: &str) -> Option<ButtonEvent> {
        self.find_button_by_id(widget_id).map(|b| b.event)
    }

    /// Maps a keyboard key name to an event
    #[must_use]
    pub fn key_to_event(key: &str) -> Option<ButtonEvent> {
        match key {
            "Enter" => Some(ButtonEvent::Equals),
            "Escape" => Some(ButtonEvent::Clear),
            other => ButtonEvent::from_label(other),
        }
    }
}
