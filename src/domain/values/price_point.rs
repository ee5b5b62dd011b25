use chrono::{DateTime, NaiveDate};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One daily sample of a price history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: Decimal,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: Decimal) -> Self {
        Self { date, price }
    }
}

/// Calendar day (UTC) of a UNIX timestamp in seconds.
pub fn utc_date(timestamp: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp, 0).map(|dt| dt.date_naive())
}

/// Pair timestamps with prices by index, truncating to the shorter array.
///
/// Indices whose price is missing or not finite are skipped, so a halted
/// trading day yields no point instead of a bogus one.
pub fn zip_by_index(timestamps: &[i64], prices: &[Option<f64>]) -> Vec<PricePoint> {
    timestamps
        .iter()
        .zip(prices)
        .filter_map(|(ts, price)| {
            let date = utc_date(*ts)?;
            let price = Decimal::from_f64((*price)?)?;
            Some(PricePoint::new(date, price))
        })
        .collect()
}

/// Convert candle rows shaped `[timestamp, close, ...]` into chart points.
///
/// Cells may be JSON numbers or numeric strings. Malformed rows are dropped.
/// The result is sorted oldest first.
pub fn points_from_rows(rows: &[Vec<serde_json::Value>]) -> Vec<PricePoint> {
    let mut points: Vec<PricePoint> = rows
        .iter()
        .filter_map(|row| {
            let ts = row.first().and_then(cell_as_i64)?;
            let price = row.get(1).and_then(cell_as_decimal)?;
            Some(PricePoint::new(utc_date(ts)?, price))
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

fn cell_as_i64(cell: &serde_json::Value) -> Option<i64> {
    match cell {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn cell_as_decimal(cell: &serde_json::Value) -> Option<Decimal> {
    match cell {
        serde_json::Value::Number(n) => n.as_f64().and_then(Decimal::from_f64),
        serde_json::Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DAY: i64 = 86_400;
    // 2024-03-01T14:30:00Z
    const T0: i64 = 1_709_303_400;

    #[test]
    fn test_utc_date() {
        assert_eq!(
            utc_date(T0),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn test_zip_truncates_to_shorter_prices() {
        let ts = vec![T0, T0 + DAY, T0 + 2 * DAY, T0 + 3 * DAY];
        let prices = vec![Some(1.0), Some(2.0)];
        let chart = zip_by_index(&ts, &prices);
        assert_eq!(chart.len(), 2);
        assert_eq!(chart[1].date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn test_zip_skips_null_holes() {
        let ts = vec![T0, T0 + DAY, T0 + 2 * DAY];
        let prices = vec![Some(10.0), None, Some(f64::NAN)];
        let chart = zip_by_index(&ts, &prices);
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].price, Decimal::from(10));
    }

    #[test]
    fn test_rows_accept_strings_and_numbers() {
        let rows = vec![
            vec![json!((T0 + DAY).to_string()), json!("42.5"), json!("40")],
            vec![json!(T0), json!(41), json!("39")],
            vec![json!("garbage"), json!("1")],
            vec![json!(T0)],
        ];
        let chart = points_from_rows(&rows);
        assert_eq!(chart.len(), 2);
        assert_eq!(chart[0].price, Decimal::from(41));
        assert_eq!(chart[1].price, Decimal::from_str("42.5").unwrap());
        assert!(chart[0].date < chart[1].date);
    }
}
