//! # Error Handling
//!
//! Maps core errors onto the error document returned to the booking wizard.
//! An empty slot list is never an error; only invalid input and malformed
//! data reach this module, and the wizard shows them differently from
//! "no available slots".

use serde::{Deserialize, Serialize};
use slotbook_core::BookingError;

/// Application error wrapper that provides response mapping
///
/// # Example
///
/// ```
/// use slotbook_booking::error_handling::AppError;
/// use slotbook_core::TimeOfDay;
///
/// fn parse_opening(value: &str) -> Result<TimeOfDay, AppError> {
///     Ok(value.parse::<TimeOfDay>()?)
/// }
///
/// let err = parse_opening("8am").unwrap_err();
/// assert_eq!(err.exit_code(), 3);
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    FormatError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    /// Technical description for logs and support.
    pub error: String,
    /// Text the wizard shows to the customer.
    pub message: String,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match &self.0 {
            BookingError::InvalidInput(_) => ErrorKind::InvalidInput,
            BookingError::Format(_) => ErrorKind::FormatError,
        }
    }

    /// Process exit status used by the command-line front end.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::InvalidInput => 2,
            ErrorKind::FormatError => 3,
        }
    }

    pub fn into_response(self) -> ErrorResponse {
        let kind = self.kind();
        let message = match kind {
            ErrorKind::InvalidInput => "Something went wrong with this booking request. Please review your selection.",
            ErrorKind::FormatError => "Something went wrong while loading available times. Please try again later.",
        };

        ErrorResponse {
            kind,
            error: self.0.to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Automatic conversion from BookingError to AppError
///
/// This implementation allows using `?` operator with core functions inside
/// handlers that return `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}
