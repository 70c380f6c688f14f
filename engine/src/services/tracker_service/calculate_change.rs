// Handler for the "calculate change" action
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::data::series_store::SeriesStore;
use crate::error::Notification;
use crate::rebase::rebase;
use shared::models::{ChangeResult, DateRange};

pub async fn handle_calculate_change(
    range: &DateRange,
    series_store: Arc<RwLock<SeriesStore>>,
    latest: Arc<RwLock<Option<ChangeResult>>>,
) -> Result<ChangeResult, Notification> {
    let canonical = series_store.read().await.canonical();

    // On error the previous result is left in place.
    let result = rebase(&canonical, range)?;

    *latest.write().await = Some(result.clone());
    Ok(result)
}
