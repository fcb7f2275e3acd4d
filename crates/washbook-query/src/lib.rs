//! Read-only views over a snapshot of the appointment book.
//!
//! Nothing here holds state. The caller passes the snapshot and, where it
//! matters, the date the operator has selected.

pub mod calendar;
pub mod filter;
pub mod summary;

pub use calendar::{dates_with_appointments, DayMarker};
pub use filter::filter_by_date;
pub use summary::{summarize_by_status, DailySummary, SummaryBucket};
