//! # Slotbook Booking
//!
//! The calling layer around `slotbook-core`: it accepts the booking wizard's
//! availability query, resolves which working hours apply, gathers the day's
//! bookings and blocked periods, and returns the slots to render.
//!
//! ## Architecture
//!
//! - **Models**: Request and response shapes in the backend's JSON format
//! - **Handlers**: Availability lookup and slot selection
//! - **Error handling**: Mapping core errors to wizard-facing responses
//! - **Config**: Environment-driven defaults

/// Configuration module for booking settings
pub mod config;
/// Mapping of core errors to responses
pub mod error_handling;
/// Query handlers
pub mod handlers;
/// Wire models shared with the booking wizard
pub mod models;

use eyre::Result;
use slotbook_core::BookingError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::{config::BookingConfig, error_handling::AppError, models::AvailabilityResponse};

/// Installs the global tracing subscriber.
///
/// Logs go to stderr; stdout carries the response document.
pub fn init_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

/// Parses an availability query document and answers it.
///
/// A body that is not a valid query, including one with a malformed date or
/// time field, is reported as a format error.
pub fn handle_query(config: &BookingConfig, body: &str) -> Result<AvailabilityResponse, AppError> {
    let query = serde_json::from_str(body)
        .map_err(|err| BookingError::Format(format!("Invalid availability query: {err}")))?;

    handlers::availability::available_slots(config, &query)
}
