//! Persistent form of a [`FileSet`](crate::FileSet).

use crate::file::LineInfo;
use serde::{Deserialize, Serialize};

/// The persistent state of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSnapshot {
    /// The file name.
    pub name: String,
    /// Global offset of the file's first byte.
    pub base: usize,
    /// File size in bytes.
    pub size: usize,
    /// Line-start offsets.
    pub lines: Vec<usize>,
    /// Alternate-position overrides.
    pub infos: Vec<LineInfo>,
}

/// The persistent state of a file set: its next base and its files.
///
/// Produced by [`FileSet::snapshot`](crate::FileSet::snapshot) and consumed by
/// [`FileSet::restore`](crate::FileSet::restore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSetSnapshot {
    /// Next available base offset.
    pub base: usize,
    /// Files in ascending base order.
    pub files: Vec<FileSnapshot>,
}

/// Errors from encoding or decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot could not be serialized.
    #[error("failed to encode file set: {0}")]
    Encode(String),

    /// The bytes are not a valid encoded snapshot.
    #[error("failed to decode file set: {0}")]
    Decode(String),
}

/// Encodes a snapshot into a compact binary form.
pub fn encode_snapshot(snapshot: &FileSetSnapshot) -> Result<Vec<u8>, SnapshotError> {
    bincode::serde::encode_to_vec(snapshot, bincode::config::standard())
        .map_err(|e| SnapshotError::Encode(e.to_string()))
}

/// Decodes a snapshot produced by [`encode_snapshot`].
pub fn decode_snapshot(bytes: &[u8]) -> Result<FileSetSnapshot, SnapshotError> {
    let (snapshot, _) = bincode::serde::decode_from_slice(bytes, bincode::config::standard())
        .map_err(|e| SnapshotError::Decode(e.to_string()))?;
    Ok(snapshot)
}
