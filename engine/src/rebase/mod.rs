// Range rebasing: filter the canonical series to a month range and express it relative to its first point
pub mod change;
pub mod window;

use shared::models::{ChangeResult, DateRange, Series};
use shared::utils::round2;

use crate::error::EngineError;
pub use change::{percent_change, rebase_values};
pub use window::{filter_range, MonthWindow};

/// Computes the change over `range` from the canonical `series`.
///
/// The series is only borrowed, so repeated calls with different ranges always
/// start from the original values and never compound.
pub fn rebase(series: &Series, range: &DateRange) -> Result<ChangeResult, EngineError> {
    let start = range.start.ok_or(EngineError::MissingRange { field: "start" })?;
    let end = range.end.ok_or(EngineError::MissingRange { field: "end" })?;

    let window = MonthWindow::new(start, end);
    let filtered = filter_range(series.observations(), window);

    let (first, last) = match (filtered.first(), filtered.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => {
            tracing::warn!(%start, %end, "No observations in selected range");
            return Err(EngineError::RangeEmpty { start, end });
        }
    };

    let change = percent_change(first.value, last.value)?;
    // Rounding scales by 100 and can overflow a finite change.
    let rounded = round2(change);
    if !rounded.is_finite() {
        return Err(EngineError::ComputationError(format!(
            "change from {} to {} overflows when rounded",
            first.value, last.value
        )));
    }
    let rebased_series = rebase_values(&filtered, first.value)?;

    tracing::debug!(
        %start,
        %end,
        points = rebased_series.len(),
        change,
        "Rebased series over range"
    );

    Ok(ChangeResult {
        percent_change: rounded,
        rebased_series,
        first,
        last,
    })
}
