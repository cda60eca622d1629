//! Compact global source positions.

use serde::{Deserialize, Serialize};

/// A compact encoding of a source position within a [`FileSet`](crate::FileSet).
///
/// A `Pos` is the file's base plus a byte offset into that file. It is only
/// meaningful relative to the file set that produced it; use
/// [`FileSet::position`](crate::FileSet::position) to turn it into a
/// [`Position`](crate::Position).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Pos(usize);

impl Pos {
    /// The zero position, which never belongs to any file.
    pub const NONE: Pos = Pos(0);

    /// Creates a `Pos` from a raw global offset.
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw global offset.
    pub fn as_raw(self) -> usize {
        self.0
    }

    /// Returns `true` unless this is [`Pos::NONE`].
    pub fn is_valid(self) -> bool {
        self != Pos::NONE
    }
}
