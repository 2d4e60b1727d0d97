//! Parsing of input lines into user gestures
//!
//! Plain lines are confirmed entries. Lines starting with `:` are commands
//! acting on a row of the current frame. A leading `::` escapes the colon so
//! an entry can start with one.

use thiserror::Error;

/// Help shown for `:help`
pub const HELP: &str = "\
Type text and press Enter to add a todo.
  :toggle N  (:t N)   mark row N done / not done
  :delete N  (:d N)   delete row N
  :list      (:l)     show the list again
  :dump               show the list as TOML
  :help      (:h)     show this help
  :quit      (:q)     leave
Start an entry with '::' to add text beginning with ':'.";

/// One user action read from a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// Text confirmed in the entry field
    Enter(String),
    /// Click on a row (1-based)
    Toggle(usize),
    /// Click on a row's delete button (1-based)
    Delete(usize),
    /// Redraw the current frame
    List,
    /// Print the current list as TOML
    Dump,
    /// Show the list of commands
    Help,
    /// End the session
    Quit,
}

/// Input that does not describe any gesture
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown command ':{0}'. Type :help for the list of commands")]
    UnknownCommand(String),

    #[error("':{0}' needs a row number (e.g. ':{0} 1')")]
    MissingRow(&'static str),

    #[error("Invalid row number '{0}'. Rows are numbered from 1")]
    InvalidRow(String),

    #[error("Unexpected argument '{0}'. Type :help for the list of commands")]
    UnexpectedArgument(String),

    #[error("Input line is not valid UTF-8 and was ignored")]
    InvalidEncoding,
}

/// Parse one line of input
///
/// # Arguments
/// * `line` - The line without its trailing newline
///
/// # Returns
/// The gesture, or an error for a malformed command
pub fn parse_gesture(line: &str) -> Result<Gesture, InputError> {
    let Some(command_line) = line.strip_prefix(':') else {
        return Ok(Gesture::Enter(line.to_string()));
    };

    if command_line.starts_with(':') {
        return Ok(Gesture::Enter(command_line.to_string()));
    }

    let mut words = command_line.split_whitespace();
    let command = words.next().unwrap_or("");
    let argument = words.next();

    let gesture = match command {
        "toggle" | "t" => Gesture::Toggle(parse_row("toggle", argument)?),
        "delete" | "d" => Gesture::Delete(parse_row("delete", argument)?),
        "list" | "l" => Gesture::List,
        "dump" => Gesture::Dump,
        "help" | "h" => Gesture::Help,
        "quit" | "q" => Gesture::Quit,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };

    // row commands consumed one argument, the rest take none
    let trailing = match gesture {
        Gesture::Toggle(_) | Gesture::Delete(_) => words.next(),
        _ => argument,
    };
    if let Some(extra) = trailing {
        return Err(InputError::UnexpectedArgument(extra.to_string()));
    }

    Ok(gesture)
}

fn parse_row(command: &'static str, argument: Option<&str>) -> Result<usize, InputError> {
    let value = argument.ok_or(InputError::MissingRow(command))?;
    match value.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row),
        _ => Err(InputError::InvalidRow(value.to_string())),
    }
}
