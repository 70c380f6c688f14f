// Conversions from series and results to what a chart or caption consumes
use serde::Serialize;
use shared::models::{ChangeResult, DateRange, Observation, Series};
use shared::utils::month_label;

/// One point of the trend line. `value` is the raw index on the initial
/// chart and the percent change after a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub timestamp: i64,
    pub label: String,
    pub value: f64,
}

/// The full canonical series, shown before any range is picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitialChart {
    pub rows: usize,
    pub points: Vec<ChartPoint>,
}

/// Everything the front end needs to render one successful query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutput {
    pub percent_change: String,
    pub from: String,
    pub to: String,
    pub points: Vec<ChartPoint>,
}

pub fn to_chart_point(observation: &Observation) -> ChartPoint {
    ChartPoint {
        timestamp: observation
            .date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default(),
        label: month_label(observation.date),
        value: observation.value,
    }
}

pub fn chart_points(series: &Series) -> Vec<ChartPoint> {
    series.iter().map(to_chart_point).collect()
}

pub fn to_initial_chart(series: &Series) -> InitialChart {
    InitialChart {
        rows: series.len(),
        points: chart_points(series),
    }
}

/// The caption names the picked months, not the first/last matched rows.
pub fn to_query_output(result: &ChangeResult, range: &DateRange) -> QueryOutput {
    QueryOutput {
        percent_change: result.display_percent(),
        from: range.start.map(|m| m.label()).unwrap_or_default(),
        to: range.end.map(|m| m.label()).unwrap_or_default(),
        points: chart_points(&result.rebased_series),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::YearMonth;

    fn day(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn test_query_output_from_result() {
        let result = ChangeResult {
            percent_change: 10.0,
            rebased_series: Series::new(vec![
                Observation { date: day(2020, 1), value: 0.0 },
                Observation { date: day(2020, 6), value: 10.0 },
            ]),
            first: Observation { date: day(2020, 1), value: 100.0 },
            last: Observation { date: day(2020, 6), value: 110.0 },
        };
        let range = DateRange::new(YearMonth::new(2020, 1).unwrap(), YearMonth::new(2020, 6).unwrap());

        let output = to_query_output(&result, &range);
        assert_eq!(output.percent_change, "10.00");
        assert_eq!(output.from, "Jan 2020");
        assert_eq!(output.to, "Jun 2020");
        assert_eq!(output.points.len(), 2);
        assert_eq!(output.points[0].timestamp, 1_577_836_800_000);
        assert_eq!(output.points[1].label, "Jun 2020");
        assert_eq!(output.points[1].value, 10.0);
    }

    #[test]
    fn test_caption_uses_picked_months_for_sparse_data() {
        // Only Feb and May have data, but the user picked Jan..Jul.
        let result = ChangeResult {
            percent_change: 5.0,
            rebased_series: Series::new(vec![
                Observation { date: day(2020, 2), value: 0.0 },
                Observation { date: day(2020, 5), value: 5.0 },
            ]),
            first: Observation { date: day(2020, 2), value: 100.0 },
            last: Observation { date: day(2020, 5), value: 105.0 },
        };
        let range = DateRange::new(YearMonth::new(2020, 1).unwrap(), YearMonth::new(2020, 7).unwrap());

        let output = to_query_output(&result, &range);
        assert_eq!(output.from, "Jan 2020");
        assert_eq!(output.to, "Jul 2020");
    }

    #[test]
    fn test_initial_chart_shows_raw_canonical_series() {
        let series = Series::new(vec![
            Observation { date: day(2020, 1), value: 257.971 },
            Observation { date: day(2020, 2), value: 258.678 },
            Observation { date: day(2020, 3), value: 258.115 },
        ]);

        let chart = to_initial_chart(&series);
        assert_eq!(chart.rows, 3);
        let values: Vec<_> = chart.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![257.971, 258.678, 258.115]);
        assert_eq!(chart.points[0].label, "Jan 2020");
        assert_eq!(chart.points[2].label, "Mar 2020");
    }
}
