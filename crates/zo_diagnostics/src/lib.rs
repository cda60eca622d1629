//! Collection, ordering, and rendering of positioned compile errors.
//!
//! An [`ErrorList`] accumulates [`Error`]s (typically from the scanner's
//! error handler), orders them by position, drops follow-on errors reported
//! on an already-reported line, and renders them for the user.

#![warn(missing_docs)]

pub mod error;
pub mod error_list;
pub mod renderer;

pub use error::Error;
pub use error_list::ErrorList;
pub use renderer::{print_error, render_summary};
