//! The error-reporting capability injected into a scanner.

use zo_source::Position;

/// Receives the lexical errors found by a [`Scanner`](crate::Scanner).
///
/// `pos` is the resolved position of the offending character. Any
/// `FnMut(&Position, &str)` closure is a handler.
pub trait ErrorHandler {
    /// Reports one error.
    fn report(&mut self, pos: &Position, msg: &str);
}

impl<F> ErrorHandler for F
where
    F: FnMut(&Position, &str),
{
    fn report(&mut self, pos: &Position, msg: &str) {
        self(pos, msg)
    }
}
