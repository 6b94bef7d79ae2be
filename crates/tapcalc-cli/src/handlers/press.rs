//! Press command handler
//!
//! Replays button labels through a headless controller, the same way a host
//! UI would deliver clicks.

use console::style;
use serde::Serialize;
use tapcalc::core::history::HistoryEntry;
use tapcalc::core::{CalculatorState, ERROR_DISPLAY, INITIAL_DISPLAY};
use tapcalc::keypad::ButtonEvent;
use tapcalc::screen::{Controller, MockScreen};

use crate::commands::PressArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// One press and the display it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressStep {
    /// Label that was pressed
    pub label: String,
    /// Display after the press
    pub display: String,
    /// Why equals failed, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of a replayed press sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    /// Every press in order
    pub steps: Vec<PressStep>,
    /// Final display
    pub display: String,
    /// Final calculator fields
    pub state: CalculatorState,
    /// Completed computations, oldest first
    pub history: Vec<HistoryEntry>,
}

/// Execute the press command
pub fn execute_press(config: &CliConfig, args: &PressArgs) -> CliResult<()> {
    let labels = expand_labels(&args.labels);
    if labels.is_empty() {
        return Err(CliError::invalid_argument("no button labels given"));
    }

    let transcript = replay(config, &labels)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&transcript)?);
        return Ok(());
    }

    let final_only = args.final_only || config.verbosity.is_quiet();
    print!(
        "{}",
        render_transcript(&transcript, final_only, config.use_color())
    );
    if args.history && !transcript.history.is_empty() {
        println!();
        for entry in &transcript.history {
            println!("  {entry}");
        }
    }
    Ok(())
}

/// Splits arguments into button labels
///
/// An argument that is itself a label is kept whole; anything else is split
/// into characters, with whitespace dropped.
#[must_use]
pub fn expand_labels(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| {
            if ButtonEvent::from_label(arg).is_some() {
                vec![arg.trim().to_string()]
            } else {
                arg.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(String::from)
                    .collect()
            }
        })
        .collect()
}

/// Presses every label in order
///
/// Failed computations show up in the transcript. Labels that name no button
/// abort the replay.
pub fn replay(config: &CliConfig, labels: &[String]) -> CliResult<Transcript> {
    let mut controller = Controller::with_config(&config.calculator, MockScreen::new());
    let mut steps = Vec::with_capacity(labels.len());

    for label in labels {
        let error = match controller.press_label(label) {
            Ok(()) => None,
            Err(err) if err.is_arithmetic() => Some(err.to_string()),
            Err(err) => return Err(err.into()),
        };
        steps.push(PressStep {
            label: label.clone(),
            display: screen_text(&controller),
            error,
        });
    }

    let calculator = controller.calculator();
    Ok(Transcript {
        steps,
        display: screen_text(&controller),
        state: calculator.state().clone(),
        history: calculator.history().iter().cloned().collect(),
    })
}

fn screen_text(controller: &Controller<MockScreen>) -> String {
    controller
        .screen()
        .text()
        .unwrap_or(INITIAL_DISPLAY)
        .to_string()
}

/// Renders a transcript as text, one press per line
#[must_use]
pub fn render_transcript(transcript: &Transcript, final_only: bool, use_color: bool) -> String {
    let styled = |text: &str| {
        let s = style(text.to_string()).force_styling(use_color);
        if text == ERROR_DISPLAY {
            s.red().bold().to_string()
        } else {
            s.green().to_string()
        }
    };

    if final_only {
        return format!("{}\n", styled(&transcript.display));
    }

    let mut out = String::new();
    for step in &transcript.steps {
        let label = style(format!("{:>3}", step.label))
            .dim()
            .force_styling(use_color);
        out.push_str(&format!("{label}  {}", styled(&step.display)));
        if let Some(err) = &step.error {
            out.push_str(&format!("  ({err})"));
        }
        out.push('\n');
    }
    out
}
