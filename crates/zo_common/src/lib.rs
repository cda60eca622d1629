//! Shared foundational types used across the zolang front end.
//!
//! Currently this is the result type used to signal programmer-contract
//! violations, which are kept apart from the lexical errors reported while
//! scanning user source text.

#![warn(missing_docs)]

pub mod result;

pub use result::{InternalError, ZoResult};
