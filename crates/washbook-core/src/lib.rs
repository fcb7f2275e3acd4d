pub mod appointment;
pub mod error;
pub mod id;
pub mod money;
pub mod status;

pub use appointment::{Appointment, NewAppointment};
pub use error::{CoreError, ValidationError};
pub use id::AppointmentId;
pub use money::Money;
pub use status::ServiceStatus;

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Result<chrono::NaiveDate, CoreError> {
    chrono::NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::InvalidDate(format!("{s}: {e}")))
}
