//! Lexical scanner for zolang source text.
//!
//! A [`Scanner`] walks the UTF-8 bytes of one [`File`](zo_source::File) and
//! produces `(Pos, Token, literal)` triples on demand. It validates numbers,
//! string escapes, and the encoding as it goes, reports every problem through
//! an optional [`ErrorHandler`], and records line starts in the file so that
//! positions can be resolved later. Scanning never stops at an error: a
//! best-effort token is always returned.

#![warn(missing_docs)]

mod escape;
pub mod handler;
mod number;
mod rune;
pub mod scanner;

pub use handler::ErrorHandler;
pub use scanner::{Scanner, BOM};
