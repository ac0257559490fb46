use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{AxisError, AxisResult};

/// Which vertical axis a series or config belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YAxisSide {
    Left,
    Right,
}

/// One row of uploaded tabular data: an x value plus one y value per series.
///
/// `X` is a date, a number or a category string depending on the chart kind.
/// Period-marker series store 0/1 flags in their column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry<X> {
    pub x: X,
    pub ys: Vec<f64>,
}

impl<X> DataEntry<X> {
    pub fn new(x: X, ys: Vec<f64>) -> Self {
        Self { x, ys }
    }

    /// Builds a row from decimal-typed upload values.
    pub fn from_decimal_row(x: X, values: &[Decimal]) -> AxisResult<Self> {
        let ys = values
            .iter()
            .map(|value| decimal_to_f64(*value, "series value"))
            .collect::<AxisResult<Vec<f64>>>()?;
        Ok(Self { x, ys })
    }
}

/// One labeled gridline position: a typed value plus its display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick<T> {
    pub value: T,
    pub label: String,
}

impl<T> Tick<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Extracts one series column from rows, failing on ragged or missing data.
pub fn series_column<X>(entries: &[DataEntry<X>], series: usize) -> AxisResult<Vec<f64>> {
    entries
        .iter()
        .map(|entry| {
            entry
                .ys
                .get(series)
                .copied()
                .ok_or(AxisError::SeriesOutOfRange {
                    index: series,
                    columns: entry.ys.len(),
                })
        })
        .collect()
}

/// Computes the `[min, max]` extent of one or more value columns.
///
/// Empty input and non-finite values are contract violations, not
/// recoverable states.
pub fn extent(values: &[f64]) -> AxisResult<(f64, f64)> {
    if values.is_empty() {
        return Err(AxisError::InvalidData(
            "extent cannot be computed from an empty column".to_owned(),
        ));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for value in values {
        if !value.is_finite() {
            return Err(AxisError::InvalidData(
                "series values must be finite".to_owned(),
            ));
        }
        min = min.min(*value);
        max = max.max(*value);
    }

    Ok((min, max))
}
