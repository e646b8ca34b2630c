//! Chart payload served to the dashboard.
//!
//! Field names are the wire contract with the frontend charting code and
//! must stay bit-for-bit: columnar `t/o/h/l/c/v` arrays plus the live
//! reference fields merged alongside.

use serde::{Deserialize, Serialize};

use crate::{StockReference, TimeSeries};

/// Columnar OHLCV series merged with the symbol's live reference fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResponse {
    /// Unix-second timestamps, oldest first.
    pub t: Vec<i64>,
    pub o: Vec<f64>,
    pub h: Vec<f64>,
    pub l: Vec<f64>,
    pub c: Vec<f64>,
    pub v: Vec<u64>,
    #[serde(rename = "currentPrice")]
    pub current_price: f64,
    pub change: f64,
    #[serde(rename = "changePercent")]
    pub change_percent: f64,
    #[serde(rename = "companyName")]
    pub company_name: String,
}

impl ChartResponse {
    /// Merge a synthesized series with the reference record it was built
    /// from; the live quote fields ride alongside the columnar series.
    pub fn assemble(reference: &StockReference, series: &TimeSeries) -> Self {
        let mut t = Vec::with_capacity(series.len());
        let mut o = Vec::with_capacity(series.len());
        let mut h = Vec::with_capacity(series.len());
        let mut l = Vec::with_capacity(series.len());
        let mut c = Vec::with_capacity(series.len());
        let mut v = Vec::with_capacity(series.len());

        for point in &series.points {
            t.push(point.timestamp);
            o.push(point.open);
            h.push(point.high);
            l.push(point.low);
            c.push(point.close);
            v.push(point.volume);
        }

        Self {
            t,
            o,
            h,
            l,
            c,
            v,
            current_price: reference.price,
            change: reference.change,
            change_percent: reference.change_percent,
            company_name: reference.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_catalog;
    use crate::{RangeCode, SeriesSynthesizer, UtcDateTime};

    #[test]
    fn assembles_columns_and_reference_fields() {
        let reference = sample_catalog().remove(0);
        let series = SeriesSynthesizer::default()
            .synthesize(
                &reference,
                RangeCode::OneMonth,
                UtcDateTime::parse("2024-06-03T20:00:00Z").expect("timestamp"),
            )
            .expect("series");

        let chart = ChartResponse::assemble(&reference, &series);

        assert_eq!(chart.t.len(), 22);
        assert_eq!(chart.c.len(), 22);
        assert_eq!(chart.current_price, 185.92);
        assert_eq!(chart.company_name, "Apple Inc.");
        assert_eq!(chart.c.last().copied(), Some(185.92));
    }

    #[test]
    fn wire_field_names_are_preserved() {
        let reference = sample_catalog().remove(0);
        let series = SeriesSynthesizer::default()
            .synthesize(
                &reference,
                RangeCode::OneDay,
                UtcDateTime::parse("2024-06-03T20:00:00Z").expect("timestamp"),
            )
            .expect("series");

        let json = serde_json::to_value(ChartResponse::assemble(&reference, &series))
            .expect("serialize");

        for key in ["t", "o", "h", "l", "c", "v"] {
            assert!(json[key].is_array(), "missing column {key}");
        }
        assert!(json["currentPrice"].is_number());
        assert!(json["changePercent"].is_number());
        assert!(json["companyName"].is_string());
    }
}
