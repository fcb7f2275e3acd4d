use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use washbook_core::Appointment;

/// How a calendar day is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayMarker {
    pub marked: bool,
    pub selected: bool,
}

/// One marker per distinct entry date. `selected` is only set on the entry
/// for `selected`; a selected day with no appointments gets no entry.
pub fn dates_with_appointments(
    snapshot: &[Appointment],
    selected: NaiveDate,
) -> BTreeMap<NaiveDate, DayMarker> {
    snapshot
        .iter()
        .map(|a| {
            (
                a.entry_date,
                DayMarker {
                    marked: true,
                    selected: a.entry_date == selected,
                },
            )
        })
        .collect()
}
