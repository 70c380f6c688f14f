use csv::{ReaderBuilder, StringRecord};
use shared::models::{Observation, Series};
use shared::utils::{parse_index_value, parse_observation_date};

use crate::config::settings::ColumnSettings;
use crate::error::EngineError;

pub struct CpiCsvParser;

impl CpiCsvParser {
    // Header: Date,CPI (names and delimiter come from ColumnSettings)
    // Example Row: 2020-01-01,258.682
    //
    // Rows with an empty, unparsable or missing date/index field are skipped.
    // Only a resource that yields no rows at all is an error.
    pub fn parse_series(raw_text: &str, columns: &ColumnSettings) -> Result<Series, EngineError> {
        if raw_text.trim().is_empty() {
            return Err(EngineError::EmptyResource);
        }

        let mut rdr = ReaderBuilder::new()
            .delimiter(columns.delimiter_byte()?)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(raw_text.as_bytes());

        let headers = rdr.headers()?.clone();
        let date_idx = Self::column_index(&headers, &columns.date_column)?;
        let value_idx = Self::column_index(&headers, &columns.value_column)?;

        let mut observations = Vec::new();
        let mut skipped = 0usize;

        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2;
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    tracing::debug!(line, error = %e, "Skipping unreadable row");
                    skipped += 1;
                    continue;
                }
            };

            match Self::parse_row(&record, date_idx, value_idx) {
                Some(observation) => observations.push(observation),
                None => {
                    tracing::debug!(line, "Skipping row with missing or invalid date/index");
                    skipped += 1;
                }
            }
        }

        if observations.is_empty() {
            return Err(EngineError::NoRows);
        }

        tracing::info!(rows = observations.len(), skipped, "Parsed CPI series");
        Ok(Series::new(observations))
    }

    fn parse_row(record: &StringRecord, date_idx: usize, value_idx: usize) -> Option<Observation> {
        let date_str = record.get(date_idx).filter(|s| !s.is_empty())?;
        let value_str = record.get(value_idx).filter(|s| !s.is_empty())?;

        let date = parse_observation_date(date_str).ok()?;
        let value = parse_index_value(value_str).ok()?;
        Observation::new(date, value)
    }

    fn column_index(headers: &StringRecord, name: &str) -> Result<usize, EngineError> {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| EngineError::MissingColumn(name.to_string()))
    }
}
