//! The shared registry of source files and the global offset space.

use crate::file::{File, FileEntry};
use crate::pos::Pos;
use crate::position::Position;
use crate::snapshot::{FileSetSnapshot, FileSnapshot};
use parking_lot::Mutex;
use std::sync::Arc;
use zo_common::{InternalError, ZoResult};

/// Everything guarded by the file set's lock.
pub(crate) struct FileSetState {
    /// Next available base offset.
    pub(crate) base: usize,
    /// Registered files in ascending base order.
    pub(crate) files: Vec<FileEntry>,
    /// Index of the most recently resolved file.
    pub(crate) last: Option<usize>,
}

impl FileSetState {
    /// Finds the file containing the global offset `p`.
    fn file_index(&mut self, p: usize) -> Option<usize> {
        if let Some(last) = self.last {
            let f = &self.files[last];
            if f.base <= p && p <= f.base + f.size {
                return Some(last);
            }
        }
        let i = self
            .files
            .partition_point(|f| f.base <= p)
            .checked_sub(1)?;
        let f = &self.files[i];
        if p <= f.base + f.size {
            self.last = Some(i);
            return Some(i);
        }
        None
    }
}

/// A set of source files sharing one global offset space.
///
/// Files are laid out back to back: each registered file occupies
/// `base..=base + size`, where `base + size` is the end-of-file position, and
/// the next file starts one past that. Offset 0 is never used, so
/// [`Pos::NONE`] never resolves to a file.
///
/// `FileSet` is a handle; clones share the same set. All state lives behind a
/// single lock, which every operation (including line-table updates made
/// through [`File`] handles) holds only for its own duration.
#[derive(Clone)]
pub struct FileSet {
    shared: Arc<Mutex<FileSetState>>,
}

impl FileSet {
    /// Creates an empty file set whose first file will start at base 1.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(FileSetState {
                base: 1,
                files: Vec::new(),
                last: None,
            })),
        }
    }

    /// Returns the minimum base offset for the next file to be added.
    pub fn base(&self) -> usize {
        self.shared.lock().base
    }

    /// Registers a new file with the given name, base offset, and size.
    ///
    /// `base` is normally [`base()`](Self::base); it must not be lower. On
    /// success the set's base advances to `base + size + 1`, reserving one
    /// position for the end of the file.
    pub fn add_file(&self, name: impl Into<String>, base: usize, size: usize) -> ZoResult<File> {
        let name: Arc<str> = Arc::from(name.into());
        let mut state = self.shared.lock();
        if base < state.base {
            return Err(InternalError::new(format!(
                "illegal base {base} for file '{name}' (expected >= {})",
                state.base
            )));
        }
        let next = base
            .checked_add(size)
            .and_then(|end| end.checked_add(1))
            .ok_or_else(|| {
                InternalError::new(format!(
                    "file '{name}' of size {size} at base {base} overflows the offset space"
                ))
            })?;
        let entry = FileEntry::new(name, base, size);
        let index = state.files.len();
        let file = File::new(Arc::clone(&self.shared), index, &entry);
        state.files.push(entry);
        state.base = next;
        state.last = Some(index);
        tracing::debug!(name = %file.name(), base, size, "registered source file");
        Ok(file)
    }

    /// Returns the file containing `pos`, or `None` if no file does.
    pub fn file(&self, pos: Pos) -> Option<File> {
        if !pos.is_valid() {
            return None;
        }
        let mut state = self.shared.lock();
        let index = state.file_index(pos.as_raw())?;
        Some(File::new(
            Arc::clone(&self.shared),
            index,
            &state.files[index],
        ))
    }

    /// Returns handles to all files in ascending base order.
    pub fn files(&self) -> Vec<File> {
        let state = self.shared.lock();
        state
            .files
            .iter()
            .enumerate()
            .map(|(index, entry)| File::new(Arc::clone(&self.shared), index, entry))
            .collect()
    }

    /// Resolves `pos` to a [`Position`], applying alternate-position overrides.
    ///
    /// Positions outside every file resolve to the invalid default position.
    pub fn position(&self, pos: Pos) -> Position {
        self.position_for(pos, true)
    }

    /// Resolves `pos` to a [`Position`]; overrides apply only if `adjusted`.
    pub fn position_for(&self, pos: Pos, adjusted: bool) -> Position {
        if !pos.is_valid() {
            return Position::default();
        }
        let mut state = self.shared.lock();
        match state.file_index(pos.as_raw()) {
            Some(index) => {
                let entry = &state.files[index];
                entry.position(pos.as_raw() - entry.base, adjusted)
            }
            None => Position::default(),
        }
    }

    /// Captures the persistent state of the set.
    ///
    /// The lookup cache is not part of the snapshot.
    pub fn snapshot(&self) -> FileSetSnapshot {
        let state = self.shared.lock();
        FileSetSnapshot {
            base: state.base,
            files: state
                .files
                .iter()
                .map(|entry| FileSnapshot {
                    name: entry.name.to_string(),
                    base: entry.base,
                    size: entry.size,
                    lines: entry.lines.clone(),
                    infos: entry.infos.clone(),
                })
                .collect(),
        }
    }

    /// Rebuilds a file set from a snapshot.
    ///
    /// Fails if the files overlap, are out of order, or carry malformed line
    /// or override tables, or if the snapshot's base lies inside a file.
    pub fn restore(snapshot: FileSetSnapshot) -> ZoResult<FileSet> {
        let mut expected = 1usize;
        let mut files = Vec::with_capacity(snapshot.files.len());
        for file in snapshot.files {
            if file.base < expected {
                return Err(InternalError::new(format!(
                    "file '{}' has base {} (expected >= {expected})",
                    file.name, file.base
                )));
            }
            if !FileEntry::lines_are_valid(&file.lines, file.size) {
                return Err(InternalError::new(format!(
                    "file '{}' has a malformed line table",
                    file.name
                )));
            }
            if !FileEntry::infos_are_valid(&file.infos, file.size) {
                return Err(InternalError::new(format!(
                    "file '{}' has malformed line overrides",
                    file.name
                )));
            }
            expected = file
                .base
                .checked_add(file.size)
                .and_then(|end| end.checked_add(1))
                .ok_or_else(|| {
                    InternalError::new(format!(
                        "file '{}' overflows the offset space",
                        file.name
                    ))
                })?;
            let mut entry = FileEntry::new(Arc::from(file.name), file.base, file.size);
            entry.lines = file.lines;
            entry.infos = file.infos;
            files.push(entry);
        }
        if snapshot.base < expected {
            return Err(InternalError::new(format!(
                "file set base {} overlaps registered files (expected >= {expected})",
                snapshot.base
            )));
        }
        tracing::debug!(files = files.len(), base = snapshot.base, "restored file set");
        Ok(FileSet {
            shared: Arc::new(Mutex::new(FileSetState {
                base: snapshot.base,
                files,
                last: None,
            })),
        })
    }
}

impl Default for FileSet {
    fn default() -> Self {
        Self::new()
    }
}
