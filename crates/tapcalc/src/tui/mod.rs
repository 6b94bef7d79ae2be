//! TUI Frontend for the calculator
//!
//! Visual feedback through a terminal keypad: keys and mouse clicks both end
//! up as [`ButtonEvent`](crate::keypad::ButtonEvent)s

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{hit_test, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI};

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use crate::config::CalculatorConfig;

/// Runs the interactive calculator until the user quits
///
/// The terminal is restored even when setup or the event loop fails.
pub fn run(config: &CalculatorConfig) -> io::Result<CalculatorApp> {
    enable_raw_mode()?;
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = restore_terminal(&mut io::stdout());
            return Err(err);
        }
    };

    let mut app = CalculatorApp::with_config(config);
    let result = run_app(&mut terminal, &mut app);

    let restored =
        restore_terminal(terminal.backend_mut()).and_then(|()| terminal.show_cursor());

    result.and(restored).map(|()| app)
}

fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leaves raw mode, the alternate screen and mouse capture
fn restore_terminal<W: io::Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
) -> io::Result<()> {
    let input_handler = InputHandler::new();
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|f| {
            area = f.area();
            render(app, f);
        })?;

        match event::read()? {
            Event::Key(key) => app.handle_action(input_handler.handle_key(key)),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(keypad_area(area), mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    tracing::debug!(
        computations = app.calculator().history().len(),
        "terminal session ended"
    );
    Ok(())
}
