// Date and number helpers shared by the engine and any front end.
use anyhow::{anyhow, Result};
use chrono::{DateTime, Datelike, Months, NaiveDate};

use crate::models::YearMonth;

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last calendar day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Short English month label, e.g. "Jan 2020".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Parses a picker value: "2020-01" or "01/2020".
pub fn parse_year_month(s: &str) -> Result<YearMonth> {
    let s = s.trim();
    let (year, month) = if let Some((y, m)) = s.split_once('-') {
        (y, m)
    } else if let Some((m, y)) = s.split_once('/') {
        (y, m)
    } else {
        return Err(anyhow!("Unrecognized month '{}', expected YYYY-MM or MM/YYYY", s));
    };

    let year: i32 = year
        .parse()
        .map_err(|e| anyhow!("Failed to parse year in '{}': {}", s, e))?;
    let month: u32 = month
        .parse()
        .map_err(|e| anyhow!("Failed to parse month in '{}': {}", s, e))?;

    YearMonth::new(year, month).ok_or_else(|| anyhow!("Month out of range in '{}'", s))
}

/// Parses the date column of the source file.
///
/// Accepted: `2020-01-15`, `2020/01/15`, `2020-01`, `01/2020`, and RFC 3339
/// timestamps (only the date part is kept).
pub fn parse_observation_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    parse_year_month(s)
        .map(|ym| ym.first_day())
        .map_err(|_| anyhow!("Failed to parse date '{}'", s))
}

/// Parses the index column. Non-finite values are rejected.
pub fn parse_index_value(s: &str) -> Result<f64> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| anyhow!("Failed to parse index value '{}': {}", s, e))?;
    if !value.is_finite() {
        return Err(anyhow!("Index value '{}' is not finite", s));
    }
    Ok(value)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(day(2020, 1, 10)), day(2020, 1, 31));
        assert_eq!(last_day_of_month(day(2020, 4, 1)), day(2020, 4, 30));
        assert_eq!(last_day_of_month(day(2019, 2, 1)), day(2019, 2, 28));
        assert_eq!(last_day_of_month(day(2000, 2, 1)), day(2000, 2, 29));
        assert_eq!(last_day_of_month(day(1900, 2, 1)), day(1900, 2, 28));
        assert_eq!(last_day_of_month(day(2021, 12, 15)), day(2021, 12, 31));
    }

    #[test]
    fn test_parse_year_month_formats() {
        let expected = YearMonth::new(2020, 3).unwrap();
        assert_eq!(parse_year_month("2020-03").unwrap(), expected);
        assert_eq!(parse_year_month("03/2020").unwrap(), expected);
        assert_eq!(parse_year_month(" 2020-3 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_year_month_invalid() {
        assert!(parse_year_month("2020-13").is_err());
        assert!(parse_year_month("march").is_err());
        assert!(parse_year_month("").is_err());
    }

    #[test]
    fn test_parse_observation_date_variants() {
        assert_eq!(parse_observation_date("2020-01-15").unwrap(), day(2020, 1, 15));
        assert_eq!(parse_observation_date("2020/01/15").unwrap(), day(2020, 1, 15));
        assert_eq!(parse_observation_date("2020-01").unwrap(), day(2020, 1, 1));
        assert_eq!(parse_observation_date("01/2020").unwrap(), day(2020, 1, 1));
        assert_eq!(
            parse_observation_date("2020-01-15T10:00:00Z").unwrap(),
            day(2020, 1, 15)
        );
    }

    #[test]
    fn test_parse_observation_date_invalid() {
        assert!(parse_observation_date("2020-02-30").is_err());
        assert!(parse_observation_date("not a date").is_err());
    }

    #[test]
    fn test_parse_index_value() {
        assert_eq!(parse_index_value(" 101.25 ").unwrap(), 101.25);
        assert!(parse_index_value("abc").is_err());
        assert!(parse_index_value("NaN").is_err());
        assert!(parse_index_value("inf").is_err());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(10.004), 10.0);
        assert_eq!(round2(10.006), 10.01);
        assert_eq!(round2(-3.14159), -3.14);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(day(2020, 1, 1)), "Jan 2020");
    }
}
