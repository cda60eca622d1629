//! Common result and error types for the zolang front end.

/// The standard result type for operations with a caller contract.
///
/// `Err` indicates that the API was misused (a bug in the caller, such as
/// registering a file below the file set's base or handing the scanner a
/// buffer whose length differs from the file size). Problems in the source
/// text are never reported this way; the scanner reports them through its
/// error handler and keeps going.
pub type ZoResult<T> = Result<T, InternalError>;

/// An internal compiler error indicating misuse of the front-end API.
///
/// When an operation returns this error it has not modified any state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("internal compiler error: {message}")]
pub struct InternalError {
    /// Description of the violated contract.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
