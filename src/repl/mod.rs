//! Interactive prompt loop
//!
//! Drives a converter session over stdin/stdout. Each accepted line becomes
//! one session event; the recomputed result is re-rendered immediately on the
//! same task, so every event fully completes before the next one is read.

pub mod command;

use thiserror::Error;
use tokio::io::{stdin, stdout, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};

use crate::convert::Unit;
use crate::session::{reduce, Event, SessionState};

pub use command::{parse_command, Command, CommandError};

/// Prompt loop errors
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Prompt shown before each line, carrying the current unit pair
fn prompt_for(state: &SessionState) -> String {
    format!("[{} -> {}] > ", state.from, state.to)
}

/// Run the interactive session until quit or end of input.
///
/// State lives only for the duration of the loop; nothing survives a restart.
pub async fn run() -> Result<(), ReplError> {
    let mut state = SessionState::default();
    let mut lines = BufReader::new(stdin()).lines();
    let mut out = stdout();

    write_line(&mut out, &usage()).await?;
    render(&mut out, &state).await?;

    loop {
        out.write_all(prompt_for(&state).as_bytes()).await?;
        out.flush().await?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => write_line(&mut out, &usage()).await?,
            Ok(Command::Units) => write_line(&mut out, &unit_list()).await?,
            Ok(Command::State) => {
                let dump = serde_json::to_string_pretty(&state)?;
                write_line(&mut out, &dump).await?;
            }
            Ok(Command::Input(text)) => {
                state = reduce(&state, Event::TextChanged { text });
                render(&mut out, &state).await?;
            }
            Ok(Command::From(unit)) => {
                state = reduce(&state, Event::FromUnitSelected { unit });
                render(&mut out, &state).await?;
            }
            Ok(Command::To(unit)) => {
                state = reduce(&state, Event::ToUnitSelected { unit });
                render(&mut out, &state).await?;
            }
            Err(err) => write_line(&mut out, &err.to_string()).await?,
        }
    }

    tracing::info!("Session ended");
    Ok(())
}

/// Re-render the converter line after an event
async fn render(out: &mut Stdout, state: &SessionState) -> Result<(), ReplError> {
    write_line(out, &result_line(state)).await
}

/// The display line for the current result
fn result_line(state: &SessionState) -> String {
    format!("Result: {}", format_value(state.result))
}

async fn write_line(out: &mut Stdout, line: &str) -> Result<(), ReplError> {
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}

/// Format a result the way a double literal reads, keeping ".0" on whole values
fn format_value(value: f64) -> String {
    if value.is_finite() && value == value.trunc() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn unit_list() -> String {
    let names: Vec<&str> = Unit::ALL.iter().map(|u| u.as_str()).collect();
    names.join(", ")
}

fn usage() -> String {
    [
        "Enter a value to convert, or:",
        "  from <unit>   select the source unit",
        "  to <unit>     select the destination unit",
        "  units         list supported units",
        "  state         dump the session as JSON",
        "  help          show this message",
        "  quit          end the session",
    ]
    .join("\n")
}
