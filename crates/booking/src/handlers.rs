/// Availability lookup for the booking wizard
pub mod availability;
