//! A single financial statement line item across reporting periods.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::periods::Periods;

/// One line item of a financial statement (e.g. `货币资金`) with one value per period.
///
/// The wire shape is the flat object the backend emits:
/// `{"item": "资产总计", "2020": 1000.0, "2021": null}`. Period values that are
/// absent, `null`, or not numeric are all treated as unreported.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "WireRow", into = "WireRow")]
pub struct FinancialRow {
    /// Line-item label as it appears in the statement
    pub item: String,
    /// Reported values keyed by period identifier
    pub values: BTreeMap<String, Option<f64>>,
}

impl FinancialRow {
    /// Create an empty row for the given line item.
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style setter for one period value.
    pub fn with_value(mut self, period: impl Into<String>, value: impl Into<Option<f64>>) -> Self {
        self.values.insert(period.into(), value.into());
        self
    }

    /// Reported value for a period, `None` when absent or unreported.
    pub fn value(&self, period: &str) -> Option<f64> {
        self.values.get(period).copied().flatten()
    }

    /// Values aligned to `periods`; always the same length as `periods`.
    pub fn series(&self, periods: &Periods) -> Vec<Option<f64>> {
        periods.iter().map(|p| self.value(p)).collect()
    }
}

/// Period-aligned values for an optional row.
///
/// A missing row behaves exactly like a row with every period unreported.
pub fn aligned_values(row: Option<&FinancialRow>, periods: &Periods) -> Vec<Option<f64>> {
    row.map_or_else(|| vec![None; periods.len()], |r| r.series(periods))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireRow {
    #[serde(default)]
    item: String,
    #[serde(flatten)]
    cells: BTreeMap<String, Value>,
}

impl From<WireRow> for FinancialRow {
    fn from(wire: WireRow) -> Self {
        let values = wire
            .cells
            .into_iter()
            .map(|(period, cell)| {
                let value = cell_value(&cell);
                if value.is_none() && !cell.is_null() {
                    tracing::trace!(item = %wire.item, %period, "ignoring non-numeric cell");
                }
                (period, value)
            })
            .collect();
        Self {
            item: wire.item,
            values,
        }
    }
}

impl From<FinancialRow> for WireRow {
    fn from(row: FinancialRow) -> Self {
        let cells = row
            .values
            .into_iter()
            .map(|(period, value)| {
                let cell = value
                    .and_then(serde_json::Number::from_f64)
                    .map_or(Value::Null, Value::Number);
                (period, cell)
            })
            .collect();
        Self {
            item: row.item,
            cells,
        }
    }
}

/// Numeric value of a JSON cell; numeric strings are accepted, everything else is unreported.
pub fn cell_value(cell: &Value) -> Option<f64> {
    match cell {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
