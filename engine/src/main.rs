// CPI tracker entry point
use anyhow::Context;
use engine::config::settings::EngineSettings;
use engine::data::series_store::SeriesStore;
use engine::query::parse_query;
use engine::services::tracker_service::helpers::{to_initial_chart, to_query_output};
use engine::services::CpiTracker;
use engine::Notification;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity; logs go to stderr so stdout stays JSON only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting CPI tracker...");

    let settings = EngineSettings::from_env().context("Failed to load settings")?;
    info!(path = %settings.data_path.display(), "Using CPI resource");

    let series_store = Arc::new(RwLock::new(SeriesStore::new()));
    let tracker = CpiTracker::new(series_store);

    // A failed load still leaves an interactive session over an empty dataset.
    match tracker.load(&settings).await {
        Ok(_) => {
            let canonical = tracker.canonical().await;
            println!("{}", serde_json::to_string(&to_initial_chart(&canonical))?);
        }
        Err(notification) => print_notification(&notification)?,
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }

        let range = match parse_query(line) {
            Ok(range) => range,
            Err(e) => {
                print_notification(&e.into())?;
                continue;
            }
        };

        match tracker.calculate_change(&range).await {
            Ok(result) => println!("{}", serde_json::to_string(&to_query_output(&result, &range))?),
            Err(notification) => print_notification(&notification)?,
        }
    }

    info!("CPI tracker stopped");
    Ok(())
}

fn print_notification(notification: &Notification) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(notification)?);
    Ok(())
}
