//! The token vocabulary of the zolang language.
//!
//! Defines the closed set of [`Token`] kinds produced by the scanner, their
//! textual forms, and the classification queries a parser relies on.

#![warn(missing_docs)]

pub mod token;

pub use token::{lookup_ident, Token, HIGHEST_PREC, LOWEST_PREC};
