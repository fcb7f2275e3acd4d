use chrono::NaiveDate;

use washbook_core::Appointment;

/// Every record whose entry date is exactly `date`, in snapshot order.
pub fn filter_by_date(snapshot: &[Appointment], date: NaiveDate) -> Vec<&Appointment> {
    snapshot.iter().filter(|a| a.entry_date == date).collect()
}
