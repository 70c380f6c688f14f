// CpiTracker owns the session state: the canonical series once loaded, and
// the most recent successful result. Each user action is a method here and
// dispatches to a handler in a sibling module.
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::settings::EngineSettings;
use crate::data::series_store::SeriesStore;
use crate::error::Notification;
use shared::models::{ChangeResult, DateRange, Series};

pub mod calculate_change;
pub mod helpers;
pub mod load_series;

pub struct CpiTracker {
    series_store: Arc<RwLock<SeriesStore>>,
    latest: Arc<RwLock<Option<ChangeResult>>>,
}

impl CpiTracker {
    pub fn new(series_store: Arc<RwLock<SeriesStore>>) -> Self {
        CpiTracker {
            series_store,
            latest: Arc::new(RwLock::new(None)),
        }
    }

    /// Fetches the configured resource and publishes it as the canonical series.
    /// On failure an empty series is published and the error comes back as a notification.
    pub async fn load(&self, settings: &EngineSettings) -> Result<usize, Notification> {
        tracing::info!(
            path = %settings.data_path.display(),
            "Received load request, dispatching to handler."
        );
        load_series::handle_load_series(settings, self.series_store.clone()).await
    }

    pub async fn calculate_change(&self, range: &DateRange) -> Result<ChangeResult, Notification> {
        tracing::info!(
            start = ?range.start,
            end = ?range.end,
            "Received calculate change request, dispatching to handler."
        );
        calculate_change::handle_calculate_change(
            range,
            self.series_store.clone(),
            self.latest.clone(),
        )
        .await
    }

    pub async fn latest(&self) -> Option<ChangeResult> {
        self.latest.read().await.clone()
    }

    pub async fn canonical(&self) -> Arc<Series> {
        self.series_store.read().await.canonical()
    }
}
