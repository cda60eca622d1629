//! Source files, global positions, and position resolution for diagnostics.
//!
//! A [`FileSet`] hands out [`File`]s that share one global offset space. Every
//! byte of every registered file has a unique [`Pos`], and the set resolves a
//! `Pos` back to a human-readable [`Position`] (filename, line, column). The
//! line tables are filled in incrementally by the scanner, and the whole set
//! can be captured as a [`FileSetSnapshot`] for persistence.

#![warn(missing_docs)]

pub mod file;
pub mod file_set;
pub mod pos;
pub mod position;
pub mod snapshot;

pub use file::{File, LineInfo};
pub use file_set::FileSet;
pub use pos::Pos;
pub use position::Position;
pub use snapshot::{decode_snapshot, encode_snapshot, FileSetSnapshot, FileSnapshot, SnapshotError};
