//! Source files registered in a [`FileSet`](crate::FileSet), with line-start
//! tables and alternate-position overrides.

use crate::file_set::FileSetState;
use crate::pos::Pos;
use crate::position::Position;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// An alternate position attached to a file offset.
///
/// Positions at or after `offset` (up to the next override) are reported as
/// if they came from `filename`, with the line at `offset` renumbered to
/// `line`. Line directives in generated code are the typical producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineInfo {
    /// Byte offset within the file where the override starts.
    pub offset: usize,
    /// The reported filename.
    pub filename: String,
    /// The reported line number of the line containing `offset`.
    pub line: usize,
}

/// The per-file state owned by the file set.
pub(crate) struct FileEntry {
    pub(crate) name: Arc<str>,
    pub(crate) base: usize,
    pub(crate) size: usize,
    /// Byte offsets of each line start; the first entry is 0 for fresh files.
    pub(crate) lines: Vec<usize>,
    pub(crate) infos: Vec<LineInfo>,
}

impl FileEntry {
    pub(crate) fn new(name: Arc<str>, base: usize, size: usize) -> Self {
        Self {
            name,
            base,
            size,
            lines: vec![0],
            infos: Vec::new(),
        }
    }

    fn add_line(&mut self, offset: usize) {
        let after_last = self.lines.last().map_or(true, |&last| last < offset);
        if after_last && offset < self.size {
            self.lines.push(offset);
        }
    }

    pub(crate) fn lines_are_valid(lines: &[usize], size: usize) -> bool {
        lines.iter().enumerate().all(|(i, &line)| {
            line < size && (i == 0 || lines[i - 1] < line)
        })
    }

    fn add_line_info(&mut self, offset: usize, filename: String, line: usize) {
        let after_last = self.infos.last().map_or(true, |last| last.offset < offset);
        if after_last && offset < self.size {
            self.infos.push(LineInfo {
                offset,
                filename,
                line,
            });
        }
    }

    pub(crate) fn infos_are_valid(infos: &[LineInfo], size: usize) -> bool {
        infos.iter().enumerate().all(|(i, info)| {
            info.offset < size && (i == 0 || infos[i - 1].offset < info.offset)
        })
    }

    /// Resolves a local offset, optionally applying alternate-position overrides.
    pub(crate) fn position(&self, offset: usize, adjusted: bool) -> Position {
        let mut position = Position {
            filename: self.name.to_string(),
            offset,
            line: 0,
            column: 0,
        };
        if let Some(i) = search_lines(&self.lines, offset) {
            position.line = i + 1;
            position.column = offset - self.lines[i] + 1;
        }
        if adjusted {
            let idx = self.infos.partition_point(|info| info.offset <= offset);
            if let Some(alt) = idx.checked_sub(1).map(|i| &self.infos[i]) {
                position.filename = alt.filename.clone();
                if let Some(j) = search_lines(&self.lines, alt.offset) {
                    position.line = position.line - (j + 1) + alt.line;
                }
            }
        }
        position
    }
}

/// Index of the last line start `<= offset`, if any.
fn search_lines(lines: &[usize], offset: usize) -> Option<usize> {
    lines.partition_point(|&start| start <= offset).checked_sub(1)
}

/// A handle to a source file registered in a [`FileSet`](crate::FileSet).
///
/// The name, base, and size are fixed at registration and readable without
/// locking. The line table and overrides live inside the file set and every
/// access to them takes the set's lock, so handles can be cloned freely and
/// used from several threads.
#[derive(Clone)]
pub struct File {
    set: Arc<Mutex<FileSetState>>,
    index: usize,
    name: Arc<str>,
    base: usize,
    size: usize,
}

impl File {
    pub(crate) fn new(set: Arc<Mutex<FileSetState>>, index: usize, entry: &FileEntry) -> Self {
        Self {
            set,
            index,
            name: Arc::clone(&entry.name),
            base: entry.base,
            size: entry.size,
        }
    }

    fn with_entry<R>(&self, f: impl FnOnce(&mut FileEntry) -> R) -> R {
        let mut state = self.set.lock();
        f(&mut state.files[self.index])
    }

    /// Returns the file name given at registration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the global offset of the file's first byte.
    pub fn base(&self) -> usize {
        self.base
    }

    /// Returns the file size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of lines known so far.
    pub fn line_count(&self) -> usize {
        self.with_entry(|entry| entry.lines.len())
    }

    /// Returns a copy of the line-start table.
    pub fn lines(&self) -> Vec<usize> {
        self.with_entry(|entry| entry.lines.clone())
    }

    /// Records that a new line starts at `offset`.
    ///
    /// Ignored unless `offset` is past the last recorded line start and
    /// before the end of the file, so re-scanning a file is harmless.
    pub fn add_line(&self, offset: usize) {
        self.with_entry(|entry| entry.add_line(offset));
    }

    /// Replaces the line-start table.
    ///
    /// Returns `false` and leaves the table unchanged unless `lines` is
    /// strictly increasing with every entry below the file size.
    pub fn set_lines(&self, lines: Vec<usize>) -> bool {
        if !FileEntry::lines_are_valid(&lines, self.size) {
            return false;
        }
        self.with_entry(|entry| entry.lines = lines);
        true
    }

    /// Replaces the line-start table with the line starts found in `content`.
    ///
    /// Returns `false` if `content` is not exactly the file's size.
    pub fn set_lines_for_content(&self, content: &[u8]) -> bool {
        if content.len() != self.size {
            return false;
        }
        let mut lines = Vec::new();
        let mut pending = Some(0);
        for (offset, &b) in content.iter().enumerate() {
            if let Some(start) = pending.take() {
                lines.push(start);
            }
            if b == b'\n' {
                pending = Some(offset + 1);
            }
        }
        self.with_entry(|entry| entry.lines = lines);
        true
    }

    /// Adds an alternate-position override starting at `offset`.
    ///
    /// Ignored unless `offset` is past the last override and before the end
    /// of the file.
    pub fn add_line_info(&self, offset: usize, filename: impl Into<String>, line: usize) {
        let filename = filename.into();
        self.with_entry(|entry| entry.add_line_info(offset, filename, line));
    }

    /// Returns a copy of the alternate-position overrides.
    pub fn line_infos(&self) -> Vec<LineInfo> {
        self.with_entry(|entry| entry.infos.clone())
    }

    /// Converts a byte offset within the file into a global [`Pos`].
    ///
    /// # Panics
    ///
    /// Panics if `offset` is greater than the file size.
    pub fn pos(&self, offset: usize) -> Pos {
        assert!(
            offset <= self.size,
            "illegal file offset {offset} (size {})",
            self.size
        );
        Pos::from_raw(self.base + offset)
    }

    /// Converts a global [`Pos`] back into a byte offset within the file.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the file.
    pub fn offset(&self, pos: Pos) -> usize {
        let raw = pos.as_raw();
        assert!(
            raw >= self.base && raw <= self.base + self.size,
            "illegal Pos value {raw} for file at base {} (size {})",
            self.base,
            self.size
        );
        raw - self.base
    }

    /// Returns the line number of `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the file.
    pub fn line(&self, pos: Pos) -> usize {
        self.position(pos).line
    }

    /// Resolves `pos` to a [`Position`], applying alternate-position overrides.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is valid but lies outside the file.
    pub fn position(&self, pos: Pos) -> Position {
        self.position_for(pos, true)
    }

    /// Resolves `pos` to a [`Position`]; overrides apply only if `adjusted`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is valid but lies outside the file.
    pub fn position_for(&self, pos: Pos, adjusted: bool) -> Position {
        if !pos.is_valid() {
            return Position::default();
        }
        let offset = self.offset(pos);
        self.with_entry(|entry| entry.position(offset, adjusted))
    }
}

impl PartialEq for File {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.set, &other.set) && self.index == other.index
    }
}

impl Eq for File {}

impl fmt::Debug for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("File")
            .field("name", &self.name)
            .field("base", &self.base)
            .field("size", &self.size)
            .finish()
    }
}
