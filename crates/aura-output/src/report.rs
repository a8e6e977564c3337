//! Trend report assembly and rendering.

use aura_data::row::aligned_values;
use aura_data::{Periods, RowLookup, StatementKind, periods};
use aura_ratios::{
    DEFAULT_SELECTED_RATIOS, PrecomputedRatios, RatioSet, RatioSource, compute_ratios,
};
use aura_trend::{AnomalyPoint, TrendMode, transform};
use chrono::{DateTime, Utc};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::metric::{MetricKey, Unit, resolve_metrics};

/// What to plot: periods, display mode and metric keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRequest {
    /// Period axis, in display order
    pub periods: Periods,
    /// Display mode
    pub mode: TrendMode,
    /// Raw item keys or ratio keys
    pub metrics: Vec<String>,
}

impl TrendRequest {
    /// Create a new request.
    pub fn new<I, S>(periods: Periods, mode: TrendMode, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            periods,
            mode,
            metrics: metrics.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for TrendRequest {
    /// Default periods, value mode, and the ratios preselected in the ratio view.
    fn default() -> Self {
        Self::new(
            Periods::default_trend(),
            TrendMode::Value,
            DEFAULT_SELECTED_RATIOS.map(|kind| kind.key()),
        )
    }
}

/// One plotted metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    /// Stable key
    pub key: String,
    /// Display label
    pub label: String,
    /// True for derived ratios
    pub is_ratio: bool,
    /// Unit of the untransformed values
    pub unit: Unit,
    /// One value per period, after the mode transform
    pub values: Vec<Option<f64>>,
    /// Flagged points (abnormal mode only)
    pub anomalies: Vec<AnomalyPoint>,
}

impl MetricSeries {
    /// True if the point at `index` is flagged.
    pub fn is_anomaly(&self, index: usize) -> bool {
        self.anomalies.iter().any(|p| p.index == index)
    }
}

/// Everything the trend panel shows for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    /// Report generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Display mode
    pub mode: TrendMode,
    /// Period axis
    pub periods: Periods,
    /// Where ratio values came from ("raw" or "precomputed")
    pub ratio_source: String,
    /// Threshold the anomalies were flagged against
    pub anomaly_threshold: f64,
    /// Series in request order
    pub series: Vec<MetricSeries>,
}

/// Build the report for `request`.
///
/// Raw items are read from the statement their catalog category belongs to.
/// Ratios come from `precomputed` when it holds any value, otherwise they are
/// computed from the two statements. Unknown metric keys are skipped.
pub fn build_report(
    request: &TrendRequest,
    balance_sheet: &dyn RowLookup,
    income_statement: &dyn RowLookup,
    precomputed: Option<&PrecomputedRatios>,
    config: &EngineConfig,
) -> aura_data::Result<TrendReport> {
    let metrics = resolve_metrics(&request.metrics);
    let source = RatioSource::select(precomputed, balance_sheet, income_statement);
    tracing::debug!(
        mode = %request.mode,
        periods = request.periods.len(),
        metrics = metrics.len(),
        source = source.name(),
        "building trend report"
    );

    let ratios: Option<RatioSet> = if metrics.iter().any(MetricKey::is_ratio) {
        Some(compute_ratios(&source, &request.periods, &config.ratios)?)
    } else {
        None
    };

    let series = metrics
        .into_iter()
        .map(|metric| -> aura_data::Result<MetricSeries> {
            let raw = match (metric, &ratios) {
                (MetricKey::Item(item), _) => {
                    let statement = match item.category.statement() {
                        StatementKind::IncomeStatement => income_statement,
                        StatementKind::BalanceSheet | StatementKind::CashFlow => balance_sheet,
                    };
                    aligned_values(statement.find(item.label), &request.periods)
                }
                (MetricKey::Ratio(kind), Some(ratios)) => ratios.get(kind).to_vec(),
                (MetricKey::Ratio(_), None) => vec![None; request.periods.len()],
            };
            let transformed = transform(&raw, request.mode, &config.trend)?;
            Ok(MetricSeries {
                key: metric.key().to_string(),
                label: metric.label().to_string(),
                is_ratio: metric.is_ratio(),
                unit: metric.unit(),
                values: transformed.values,
                anomalies: transformed.anomalies,
            })
        })
        .collect::<aura_data::Result<Vec<_>>>()?;

    Ok(TrendReport {
        generated_at: Utc::now(),
        mode: request.mode,
        periods: request.periods.clone(),
        ratio_source: source.name().to_string(),
        anomaly_threshold: config.trend.anomaly_threshold,
        series,
    })
}

impl TrendReport {
    /// Series for a metric key.
    pub fn get(&self, key: &str) -> Option<&MetricSeries> {
        self.series.iter().find(|s| s.key == key)
    }

    /// Total number of flagged points across all series.
    pub fn anomaly_count(&self) -> usize {
        self.series.iter().map(|s| s.anomalies.len()).sum()
    }

    /// Lower bound of the chart's value axis.
    ///
    /// `0` unless some plotted value is negative, then `floor(min × 1.1)`.
    pub fn axis_floor(&self) -> f64 {
        let min = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().flatten())
            .copied()
            .fold(f64::INFINITY, f64::min);
        if min < 0.0 { (min * 1.1).floor() } else { 0.0 }
    }

    fn format_cell(&self, series: &MetricSeries, index: usize) -> String {
        let Some(value) = series.values.get(index).copied().flatten() else {
            return "-".to_string();
        };
        let text = if self.mode.is_growth() {
            Unit::Percent.format(value)
        } else {
            series.unit.format(value)
        };
        if series.is_anomaly(index) {
            format!("{text}!")
        } else {
            text
        }
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let labels = self.periods.labels();
        let width = 22 + labels.len() * 15;
        let mut output = String::new();

        output.push_str(&format!(
            "\nTrend Report: {} ({})\n",
            self.mode.subtitle(),
            self.mode
        ));
        output.push_str(&format!(
            "Generated: {}  Ratio source: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.ratio_source
        ));
        output.push_str(&"=".repeat(width));
        output.push('\n');

        output.push_str(&format!("{:<22}", "Metric"));
        for label in &labels {
            output.push_str(&format!(" {label:>14}"));
        }
        output.push('\n');
        output.push_str(&"-".repeat(width));
        output.push('\n');

        for series in &self.series {
            output.push_str(&format!("{:<22}", series.label));
            for index in 0..labels.len() {
                output.push_str(&format!(" {:>14}", self.format_cell(series, index)));
            }
            output.push('\n');
        }

        output.push_str(&"=".repeat(width));
        output.push('\n');

        if self.mode == TrendMode::Abnormal {
            output.push_str(&format!(
                "{} point(s) flagged with ! (change beyond ±{}%)\n",
                self.anomaly_count(),
                self.anomaly_threshold
            ));
        }
        let floor = self.axis_floor();
        if floor < 0.0 {
            output.push_str(&format!("Axis floor: {floor}\n"));
        }

        output
    }

    /// Format as Markdown for documentation.
    pub fn to_markdown(&self) -> String {
        let labels = self.periods.labels();
        let mut output = String::new();

        output.push_str(&format!("# Trend Report: {}\n\n", self.mode.subtitle()));
        output.push_str(&format!("**Mode:** {}\n\n", self.mode));
        output.push_str(&format!("**Ratio source:** {}\n\n", self.ratio_source));

        output.push_str("| Metric |");
        for label in &labels {
            output.push_str(&format!(" {label} |"));
        }
        output.push('\n');
        output.push_str("|--------|");
        for _ in &labels {
            output.push_str("------|");
        }
        output.push('\n');

        for series in &self.series {
            output.push_str(&format!("| {} |", series.label));
            for index in 0..labels.len() {
                output.push_str(&format!(" {} |", self.format_cell(series, index)));
            }
            output.push('\n');
        }

        if self.anomaly_count() > 0 {
            output.push_str("\n## Anomalies\n\n");
            for series in &self.series {
                for point in &series.anomalies {
                    let period = self
                        .periods
                        .get(point.index)
                        .map(periods::label)
                        .unwrap_or_default();
                    output.push_str(&format!(
                        "- **{}** {}: {:.2}%\n",
                        series.label, period, point.value
                    ));
                }
            }
        }

        output
    }

    /// One row per period: a `period` column plus a `Float64` column per metric.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.series.len() + 1);
        columns.push(Series::new("period".into(), self.periods.as_slice()).into());
        for series in &self.series {
            columns.push(Series::new(series.key.as_str().into(), series.values.as_slice()).into());
        }
        DataFrame::new(columns)
    }
}
