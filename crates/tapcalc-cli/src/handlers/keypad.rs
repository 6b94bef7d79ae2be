//! Keypad command handler

use console::style;
use serde::Serialize;
use tapcalc::keypad::{ButtonEvent, Keypad};

use crate::commands::{KeypadArgs, OutputFormatArg};
use crate::config::CliConfig;
use crate::error::CliResult;

/// A keypad button as listed by `tapcalc keypad --format json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonInfo {
    /// Text on the button
    pub label: String,
    /// Widget id
    pub id: String,
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
    /// Event the button emits
    pub event: ButtonEvent,
}

/// Execute the keypad command
pub fn execute_keypad(config: &CliConfig, args: &KeypadArgs) -> CliResult<()> {
    let keypad = Keypad::standard();
    match args.format {
        OutputFormatArg::Text => print!("{}", render_keypad(&keypad, config.use_color())),
        OutputFormatArg::Json => {
            println!("{}", serde_json::to_string_pretty(&button_infos(&keypad))?);
        }
    }
    Ok(())
}

/// Lists every button in grid order
#[must_use]
pub fn button_infos(keypad: &Keypad) -> Vec<ButtonInfo> {
    keypad
        .buttons()
        .iter()
        .map(|b| ButtonInfo {
            label: b.label.clone(),
            id: b.id.clone(),
            row: b.row,
            col: b.col,
            event: b.event,
        })
        .collect()
}

/// Renders the keypad grid followed by the widget id of each button
#[must_use]
pub fn render_keypad(keypad: &Keypad, use_color: bool) -> String {
    let (rows, cols) = keypad.dimensions();
    let mut out = String::new();

    for row in 0..rows {
        let cells: Vec<String> = (0..cols)
            .map(|col| {
                keypad
                    .get_button_at(row, col)
                    .map_or_else(|| "     ".to_string(), |b| format!("[{:^3}]", b.label))
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }

    out.push('\n');
    for button in keypad.buttons() {
        let id = style(&button.id).cyan().force_styling(use_color);
        out.push_str(&format!("  {:<3} {id}\n", button.label));
    }
    out
}
