//! Human-readable resolved source locations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A source location resolved to a filename, line, and column.
///
/// `line` and `column` are 1-based; `column` counts bytes. `offset` is the
/// byte offset within the file. A position is valid when its line is known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// The filename, if any.
    pub filename: String,
    /// Byte offset within the file, starting at 0.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1 (byte count).
    pub column: usize,
}

impl Position {
    /// Returns `true` if the position carries a line number.
    pub fn is_valid(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Position {
    /// Formats as `file:line:column`, `line:column`, `file`, or `-`,
    /// depending on which parts are known.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = self.filename.clone();
        if self.is_valid() {
            if !s.is_empty() {
                s.push(':');
            }
            s.push_str(&self.line.to_string());
            if self.column != 0 {
                s.push_str(&format!(":{}", self.column));
            }
        }
        if s.is_empty() {
            s.push('-');
        }
        f.write_str(&s)
    }
}
