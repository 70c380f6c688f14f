// Holds the canonical series once loading has finished
use shared::models::Series;
use std::sync::Arc;

/// The store never hands out a partially built series: `publish` swaps in a
/// complete `Arc<Series>` and readers only ever clone that `Arc`.
#[derive(Debug, Default)]
pub struct SeriesStore {
    canonical: Option<Arc<Series>>,
}

impl SeriesStore {
    pub fn new() -> Self {
        SeriesStore { canonical: None }
    }

    pub fn publish(&mut self, series: Series) -> Arc<Series> {
        let series = Arc::new(series);
        self.canonical = Some(series.clone());
        series
    }

    /// Empty until something is published.
    pub fn canonical(&self) -> Arc<Series> {
        self.canonical.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::Observation;

    #[test]
    fn test_canonical_empty_before_publish() {
        let store = SeriesStore::new();
        assert!(store.canonical().is_empty());
    }

    #[test]
    fn test_publish_replaces_whole_series() {
        let mut store = SeriesStore::new();
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let before = store.canonical();

        store.publish(Series::new(vec![Observation::new(date, 100.0).unwrap()]));

        assert_eq!(store.canonical().len(), 1);
        // Readers holding the earlier Arc are unaffected.
        assert!(before.is_empty());
    }
}
