use thiserror::Error;

/// Errors surfaced by slot generation and by the value types feeding it.
///
/// A closed or degenerate day is not an error; it produces an empty slot list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Caller or configuration bug, such as a non-positive duration.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed time-of-day or range data.
    #[error("Format error: {0}")]
    Format(String),
}

pub type BookingResult<T> = Result<T, BookingError>;
