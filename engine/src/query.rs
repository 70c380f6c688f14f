// Text form of the two month pickers: "<start> <end>", "-" leaves a side unset
use shared::models::{DateRange, YearMonth};
use shared::utils::parse_year_month;

use crate::error::EngineError;

const UNSET: &str = "-";

pub fn parse_query(line: &str) -> Result<DateRange, EngineError> {
    let mut tokens = line.split_whitespace();
    let start = parse_side(tokens.next())?;
    let end = parse_side(tokens.next())?;
    if let Some(extra) = tokens.next() {
        return Err(EngineError::InvalidMonth {
            input: extra.to_string(),
        });
    }
    Ok(DateRange { start, end })
}

fn parse_side(token: Option<&str>) -> Result<Option<YearMonth>, EngineError> {
    match token {
        None | Some(UNSET) => Ok(None),
        Some(s) => parse_year_month(s)
            .map(Some)
            .map_err(|e| {
                tracing::debug!(input = s, error = %e, "Rejected month input");
                EngineError::InvalidMonth {
                    input: s.to_string(),
                }
            }),
    }
}
