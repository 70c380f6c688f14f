// Handler for the startup load
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::settings::EngineSettings;
use crate::data::loader::load_series;
use crate::data::series_store::SeriesStore;
use crate::error::Notification;
use shared::models::Series;

pub async fn handle_load_series(
    settings: &EngineSettings,
    series_store: Arc<RwLock<SeriesStore>>,
) -> Result<usize, Notification> {
    match load_series(settings).await {
        Ok(series) => {
            let rows = series.len();
            series_store.write().await.publish(series);
            tracing::info!(rows, "Published canonical CPI series");
            Ok(rows)
        }
        Err(e) => {
            // Stay usable with an empty dataset; queries will report an empty range.
            series_store.write().await.publish(Series::default());
            Err(e.into())
        }
    }
}
