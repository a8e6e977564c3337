//! Percent change and anomaly flagging over period-aligned series.
//!
//! Comparison is always with the immediately preceding element. A `None`
//! breaks the chain on both sides: the missing point and the point after it
//! have no change.

use aura_ratios::frame::{column_values, magnitude, rounded, safe_div, series_frame};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::TrendConfig;
use crate::mode::TrendMode;

/// A flagged point of a percent-change series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyPoint {
    /// Position in the period axis
    pub index: usize,
    /// The percent change at that position
    pub value: f64,
}

/// Result of [`transform`]: the plotted values and, in abnormal mode, the
/// points to highlight.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransformedSeries {
    /// One value per period
    pub values: Vec<Option<f64>>,
    /// Flagged points; empty unless the mode is [`TrendMode::Abnormal`]
    pub anomalies: Vec<AnomalyPoint>,
}

/// `(curr − prev) / |prev| × 100`, rounded to `precision` decimals.
///
/// `None` if either side is missing or `prev` is zero.
pub fn percent_change(
    prev: Option<f64>,
    curr: Option<f64>,
    precision: u32,
) -> PolarsResult<Option<f64>> {
    Ok(percent_changes(&[prev, curr], precision)?.pop().flatten())
}

/// Percent change of every element vs. its predecessor; index 0 is `None`.
pub fn percent_changes(series: &[Option<f64>], precision: u32) -> PolarsResult<Vec<Option<f64>>> {
    let previous = col("value").shift(lit(1));
    let change = safe_div(col("value") - previous.clone(), magnitude(previous)) * lit(100.0);

    let out = series_frame([("value", series)])?
        .lazy()
        .select([rounded(change, precision).alias("change")])
        .collect()?;
    column_values(&out, "change")
}

/// Points whose value is strictly greater than `threshold` or strictly less
/// than `-threshold`.
pub fn flag_anomalies(values: &[Option<f64>], threshold: f64) -> Vec<AnomalyPoint> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let value = (*value)?;
            (value > threshold || value < -threshold).then_some(AnomalyPoint { index, value })
        })
        .collect()
}

/// Transform a series for display in `mode`.
///
/// The output always has the same length as `series`.
pub fn transform(
    series: &[Option<f64>],
    mode: TrendMode,
    config: &TrendConfig,
) -> PolarsResult<TransformedSeries> {
    let values = match mode {
        TrendMode::Value => series.to_vec(),
        TrendMode::Yoy | TrendMode::Qoq | TrendMode::Abnormal => {
            percent_changes(series, config.precision)?
        }
    };

    let anomalies = if mode == TrendMode::Abnormal {
        flag_anomalies(&values, config.anomaly_threshold)
    } else {
        Vec::new()
    };

    tracing::trace!(
        %mode,
        points = values.len(),
        anomalies = anomalies.len(),
        "transformed series"
    );

    Ok(TransformedSeries { values, anomalies })
}
