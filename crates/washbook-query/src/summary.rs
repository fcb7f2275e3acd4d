use serde::Serialize;

use washbook_core::{Appointment, Money, ServiceStatus};

/// Which total of the daily summary a status counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryBucket {
    ToReceive,
    Received,
    Denied,
}

impl SummaryBucket {
    pub fn for_status(status: ServiceStatus) -> Self {
        match status {
            ServiceStatus::ToDo | ServiceStatus::ToBill => Self::ToReceive,
            ServiceStatus::Done => Self::Received,
            ServiceStatus::Cancelled => Self::Denied,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub to_receive: Money,
    pub received: Money,
    pub denied: Money,
}

impl DailySummary {
    pub fn total(&self) -> Money {
        self.to_receive + self.received + self.denied
    }
}

pub fn summarize_by_status<'a, I>(day_records: I) -> DailySummary
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let mut summary = DailySummary::default();
    for record in day_records {
        let slot = match SummaryBucket::for_status(record.status) {
            SummaryBucket::ToReceive => &mut summary.to_receive,
            SummaryBucket::Received => &mut summary.received,
            SummaryBucket::Denied => &mut summary.denied,
        };
        *slot = *slot + record.price;
    }
    summary
}
