//! Command parsing for the interactive prompt
//!
//! A line is either a control command (unit selection, listing, quit) or raw
//! value text. Value text is never rejected here; deciding whether it parses
//! as a number is the transformer's job.

use thiserror::Error;

use crate::convert::Unit;

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Free text destined for the value field
    Input(String),
    /// Select the source unit
    From(Unit),
    /// Select the destination unit
    To(Unit),
    /// List the supported units
    Units,
    /// Dump the current session state as JSON
    State,
    /// Show usage
    Help,
    /// End the session
    Quit,
}

/// Command parsing errors
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown unit '{0}'. Try 'units' for the supported set.")]
    UnknownUnit(String),

    #[error("Missing unit name after '{0}'.")]
    MissingUnit(&'static str),

    #[error("Unexpected text after '{0} {1}'.")]
    TrailingText(&'static str, String),
}

/// Parse a raw input line into a command.
///
/// `from` and `to` take exactly one unit name argument; the keywords `units`, `state`,
/// `help`, `quit` and `exit` stand alone. Anything else, the empty line
/// included, is value text.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    let mut words = trimmed.split_whitespace();
    let keyword = words.next().unwrap_or("").to_lowercase();
    let arg = words.next().unwrap_or("");
    let extra = words.next();

    match keyword.as_str() {
        "from" => parse_unit_arg(arg, extra, "from").map(Command::From),
        "to" => parse_unit_arg(arg, extra, "to").map(Command::To),
        "units" => Ok(Command::Units),
        "state" => Ok(Command::State),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Ok(Command::Input(trimmed.to_string())),
    }
}

fn parse_unit_arg(
    arg: &str,
    extra: Option<&str>,
    keyword: &'static str,
) -> Result<Unit, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingUnit(keyword));
    }
    if extra.is_some() {
        return Err(CommandError::TrailingText(keyword, arg.to_string()));
    }
    Unit::from_str(arg).ok_or_else(|| CommandError::UnknownUnit(arg.to_string()))
}
