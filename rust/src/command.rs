//! Parsing of the line-oriented command file.
//!
//! Each non-blank line is either `add <key> <value>` or `delete <key>`.
//! Tokens are separated by whitespace, verbs match case-insensitively and
//! the value is a base-10 `i32`.

use std::num::ParseIntError;
use std::str::Utf8Error;

use thiserror::Error;

use crate::types::Value;

const ADD_VERB: &str = "add";
const DELETE_VERB: &str = "delete";

/// A single parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { key: String, value: Value },
    Delete { key: String },
}

/// A malformed command line. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("line {line}: unknown command {verb:?} (expected `add` or `delete`)")]
    UnknownVerb { line: usize, verb: String },
    #[error("line {line}: `{verb}` needs a key")]
    MissingKey { line: usize, verb: &'static str },
    #[error("line {line}: `add {key}` needs a value")]
    MissingValue { line: usize, key: String },
    #[error("line {line}: value {value:?} is not a valid integer")]
    InvalidValue {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: unexpected token {token:?}")]
    UnexpectedToken { line: usize, token: String },
    #[error("line {line}: not valid UTF-8")]
    InvalidEncoding {
        line: usize,
        #[source]
        source: Utf8Error,
    },
}

impl CommandError {
    /// 1-based line number the error was found on.
    pub fn line(&self) -> usize {
        match self {
            CommandError::UnknownVerb { line, .. }
            | CommandError::MissingKey { line, .. }
            | CommandError::MissingValue { line, .. }
            | CommandError::InvalidValue { line, .. }
            | CommandError::UnexpectedToken { line, .. }
            | CommandError::InvalidEncoding { line, .. } => *line,
        }
    }
}

/// Decode one raw line, dropping the trailing `\n` or `\r\n`.
pub fn decode_line(line: usize, raw: &[u8]) -> Result<&str, CommandError> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw).map_err(|source| CommandError::InvalidEncoding { line, source })
}

/// Parse one line of the command file.
///
/// Returns `Ok(None)` for blank lines.
///
/// # Examples
///
/// ```
/// use bst_report::command::{parse_line, Command};
///
/// assert_eq!(
///     parse_line(1, "add Ethan 1").unwrap(),
///     Some(Command::Add { key: "Ethan".to_string(), value: 1 })
/// );
/// assert_eq!(
///     parse_line(2, "DELETE Ethan").unwrap(),
///     Some(Command::Delete { key: "Ethan".to_string() })
/// );
/// assert_eq!(parse_line(3, "   ").unwrap(), None);
/// assert!(parse_line(4, "add Ethan one").is_err());
/// ```
pub fn parse_line(line: usize, text: &str) -> Result<Option<Command>, CommandError> {
    let mut tokens = text.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Ok(None);
    };

    let command = if verb.eq_ignore_ascii_case(ADD_VERB) {
        let key = tokens.next().ok_or(CommandError::MissingKey {
            line,
            verb: ADD_VERB,
        })?;
        let raw = tokens.next().ok_or_else(|| CommandError::MissingValue {
            line,
            key: key.to_string(),
        })?;
        let value = raw.parse::<Value>().map_err(|source| CommandError::InvalidValue {
            line,
            value: raw.to_string(),
            source,
        })?;
        Command::Add {
            key: key.to_string(),
            value,
        }
    } else if verb.eq_ignore_ascii_case(DELETE_VERB) {
        let key = tokens.next().ok_or(CommandError::MissingKey {
            line,
            verb: DELETE_VERB,
        })?;
        Command::Delete {
            key: key.to_string(),
        }
    } else {
        return Err(CommandError::UnknownVerb {
            line,
            verb: verb.to_string(),
        });
    };

    if let Some(token) = tokens.next() {
        return Err(CommandError::UnexpectedToken {
            line,
            token: token.to_string(),
        });
    }
    Ok(Some(command))
}
