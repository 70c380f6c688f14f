// Month window selection over the canonical series
use chrono::NaiveDate;
use shared::models::{Observation, YearMonth};

/// Inclusive date bounds covering every day from the first day of `start`
/// through the last calendar day of `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl MonthWindow {
    pub fn new(start: YearMonth, end: YearMonth) -> Self {
        MonthWindow {
            from: start.first_day(),
            to: end.last_day(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// Observations inside the window, in their existing order.
/// A window with `start > end` matches nothing.
pub fn filter_range(observations: &[Observation], window: MonthWindow) -> Vec<Observation> {
    observations
        .iter()
        .filter(|o| window.contains(o.date))
        .copied()
        .collect()
}
