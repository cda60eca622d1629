//! An ordered, deduplicatable list of positioned errors.

use crate::error::Error;
use crate::renderer::render_summary;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use zo_config::DiagnosticsConfig;
use zo_source::Position;

/// A list of [`Error`]s in insertion order until [`sort`](Self::sort)ed.
///
/// The list is itself an error: it displays as its first entry, followed by
/// a count of the remaining entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorList {
    errors: Vec<Error>,
}

impl ErrorList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error with the given position and message.
    pub fn add(&mut self, pos: Position, msg: impl Into<String>) {
        self.errors.push(Error::new(pos, msg));
    }

    /// Removes all errors.
    pub fn reset(&mut self) {
        self.errors.clear();
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if the list holds no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the errors in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Sorts by filename, line, column, and message, in that priority.
    ///
    /// Errors without a filename sort first. The sort is stable.
    pub fn sort(&mut self) {
        self.errors.sort_by(compare);
    }

    /// Keeps only the first error on each (filename, line).
    ///
    /// Only meaningful on a sorted list, where all errors for one line are
    /// adjacent.
    pub fn remove_multiples(&mut self) {
        self.errors.dedup_by(|next, kept| {
            next.pos.filename == kept.pos.filename && next.pos.line == kept.pos.line
        });
    }

    /// Returns `Err(self)` if the list holds any errors.
    pub fn into_result(self) -> Result<(), ErrorList> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Orders and deduplicates the list as `config` asks, then renders at
    /// most `config.max_displayed` errors followed by a count of the rest.
    pub fn report(&mut self, config: &DiagnosticsConfig) -> String {
        if config.sorted || config.one_per_line {
            self.sort();
        }
        if config.one_per_line {
            self.remove_multiples();
        }
        render_summary(self, config.max_displayed)
    }
}

fn compare(a: &Error, b: &Error) -> Ordering {
    a.pos
        .filename
        .cmp(&b.pos.filename)
        .then(a.pos.line.cmp(&b.pos.line))
        .then(a.pos.column.cmp(&b.pos.column))
        .then_with(|| a.msg.cmp(&b.msg))
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => f.write_str("no errors"),
            [only] => write!(f, "{only}"),
            [first, rest @ ..] => write!(f, "{first} (and {} more errors)", rest.len()),
        }
    }
}

impl std::error::Error for ErrorList {}

impl IntoIterator for ErrorList {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl Extend<Error> for ErrorList {
    fn extend<T: IntoIterator<Item = Error>>(&mut self, iter: T) {
        self.errors.extend(iter);
    }
}
