// Percent arithmetic relative to a baseline observation
use shared::models::{Observation, Series};

use crate::error::EngineError;

/// `(value - baseline) / baseline * 100`, rejecting a zero baseline and any
/// non-finite outcome instead of letting NaN/inf through.
pub fn percent_change(baseline: f64, value: f64) -> Result<f64, EngineError> {
    if baseline == 0.0 {
        return Err(EngineError::ComputationError(
            "baseline value is zero".to_string(),
        ));
    }
    let change = (value - baseline) / baseline * 100.0;
    if !change.is_finite() {
        return Err(EngineError::ComputationError(format!(
            "non-finite change from {} to {}",
            baseline, value
        )));
    }
    Ok(change)
}

/// Re-expresses every observation as a percent change from `baseline`.
pub fn rebase_values(observations: &[Observation], baseline: f64) -> Result<Series, EngineError> {
    observations
        .iter()
        .map(|o| {
            let value = percent_change(baseline, o.value)?;
            Ok(Observation { date: o.date, value })
        })
        .collect()
}
