// Startup fetch of the index resource. This is the only await point before queries start.
use shared::models::Series;

use crate::config::settings::EngineSettings;
use crate::data::csv_parser::CpiCsvParser;
use crate::error::EngineError;

pub async fn load_series(settings: &EngineSettings) -> Result<Series, EngineError> {
    let path = &settings.data_path;
    tracing::info!(path = %path.display(), "Fetching CPI resource");

    let raw_text = tokio::fs::read_to_string(path).await.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to read CPI resource");
        EngineError::from(e)
    })?;

    CpiCsvParser::parse_series(&raw_text, &settings.columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_for(file: &NamedTempFile) -> EngineSettings {
        EngineSettings {
            data_path: file.path().to_path_buf(),
            ..EngineSettings::default()
        }
    }

    #[tokio::test]
    async fn test_load_series_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Date,CPI\n2020-01-01,100.0\n2020-06-01,110.0").unwrap();

        let series = load_series(&settings_for(&file)).await.unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.last().unwrap().value, 110.0);
    }

    #[tokio::test]
    async fn test_load_series_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let result = load_series(&settings_for(&file)).await;
        assert!(matches!(result, Err(EngineError::EmptyResource)));
    }

    #[tokio::test]
    async fn test_load_series_unreachable_resource() {
        let settings = EngineSettings {
            data_path: "/nonexistent/cpi_data.csv".into(),
            ..EngineSettings::default()
        };
        let result = load_series(&settings).await;
        assert!(matches!(result, Err(EngineError::IoError { .. })));
    }
}
