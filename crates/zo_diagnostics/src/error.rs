//! A single positioned error message.

use serde::{Deserialize, Serialize};
use zo_source::Position;

/// An error message attached to a source position.
///
/// Displays as `file:line:column: message`, or just the message when the
/// position carries neither a filename nor a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{}", render(.pos, .msg))]
pub struct Error {
    /// Where the error was detected.
    pub pos: Position,
    /// The error message.
    pub msg: String,
}

impl Error {
    /// Creates a new error.
    pub fn new(pos: Position, msg: impl Into<String>) -> Self {
        Self {
            pos,
            msg: msg.into(),
        }
    }
}

fn render(pos: &Position, msg: &str) -> String {
    if !pos.filename.is_empty() || pos.is_valid() {
        format!("{pos}: {msg}")
    } else {
        msg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_position() {
        let pos = Position {
            filename: "main.zo".to_string(),
            offset: 12,
            line: 2,
            column: 5,
        };
        let err = Error::new(pos, "illegal character U+0040 '@'");
        assert_eq!(err.to_string(), "main.zo:2:5: illegal character U+0040 '@'");
    }

    #[test]
    fn display_line_only() {
        let pos = Position {
            filename: String::new(),
            offset: 0,
            line: 1,
            column: 1,
        };
        assert_eq!(Error::new(pos, "oops").to_string(), "1:1: oops");
    }

    #[test]
    fn display_without_position() {
        let err = Error::new(Position::default(), "no position");
        assert_eq!(err.to_string(), "no position");
    }

    #[test]
    fn serde_roundtrip() {
        let err = Error::new(Position::default(), "x");
        let json = serde_json::to_string(&err).unwrap();
        let back: Error = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
