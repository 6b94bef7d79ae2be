//! Keyboard input handling
//!
//! Error prevention: keys map to a closed set of actions before they reach
//! the calculator

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::keypad::{ButtonEvent, Keypad};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad button
    Press(ButtonEvent),
    /// Clear everything including history
    ClearAll,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Terminals that report releases would otherwise press every key twice
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::ClearAll,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => Self::char_action(c),
            KeyCode::Enter => KeyAction::Press(ButtonEvent::Equals),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(ButtonEvent::Clear),
            _ => KeyAction::None,
        }
    }

    fn char_action(c: char) -> KeyAction {
        let mut buf = [0u8; 4];
        Keypad::key_to_event(c.encode_utf8(&mut buf)).map_or(KeyAction::None, KeyAction::Press)
    }
}
