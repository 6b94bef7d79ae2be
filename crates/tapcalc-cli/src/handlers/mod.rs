//! Command handlers

pub mod config;
pub mod keypad;
pub mod press;
pub mod tui;
