//! Financial statements as ordered row sets.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DataError, Result};
use crate::row::FinancialRow;

/// Which financial statement a row set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// Balance sheet (资产负债表)
    BalanceSheet,
    /// Income statement (利润表)
    IncomeStatement,
    /// Cash-flow statement (现金流量表)
    CashFlow,
}

impl StatementKind {
    /// Sheet identifier used by the finance API (`合并-bs`, `合并-is`, `合并-cf`).
    pub const fn sheet(&self) -> &'static str {
        match self {
            Self::BalanceSheet => "合并-bs",
            Self::IncomeStatement => "合并-is",
            Self::CashFlow => "合并-cf",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BalanceSheet => "balance sheet",
            Self::IncomeStatement => "income statement",
            Self::CashFlow => "cash flow statement",
        };
        f.write_str(name)
    }
}

/// An ordered set of rows from one statement of one company.
///
/// Rows have no identity beyond their label; order matters for lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement type
    pub kind: StatementKind,
    /// Line items in statement order
    pub rows: Vec<FinancialRow>,
}

impl Statement {
    /// Create a statement from rows.
    pub const fn new(kind: StatementKind, rows: Vec<FinancialRow>) -> Self {
        Self { kind, rows }
    }

    /// An empty statement of the given kind.
    pub const fn empty(kind: StatementKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Parse from JSON text. See [`Statement::from_value`] for accepted shapes.
    pub fn from_json_str(kind: StatementKind, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(kind, value)
    }

    /// Parse from a JSON file.
    pub fn from_path(kind: StatementKind, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(%kind, path = %path.display(), "loading statement");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(kind, &json)
    }

    /// Build from a JSON value: either the API envelope `{"data": [...]}` or a
    /// bare array of rows.
    pub fn from_value(kind: StatementKind, value: Value) -> Result<Self> {
        let rows = match value {
            Value::Array(_) => value,
            Value::Object(mut map) => match map.remove("data") {
                Some(data @ Value::Array(_)) => data,
                Some(other) => {
                    return Err(DataError::UnexpectedPayload {
                        what: kind.to_string(),
                        expected: "array under \"data\"",
                        found: DataError::json_kind(&other),
                    });
                }
                None => {
                    return Err(DataError::UnexpectedPayload {
                        what: kind.to_string(),
                        expected: "object with \"data\"",
                        found: "object without \"data\"",
                    });
                }
            },
            other => {
                return Err(DataError::UnexpectedPayload {
                    what: kind.to_string(),
                    expected: "array or object",
                    found: DataError::json_kind(&other),
                });
            }
        };

        let rows: Vec<FinancialRow> = serde_json::from_value(rows)?;
        tracing::debug!(%kind, rows = rows.len(), "parsed statement");
        Ok(Self::new(kind, rows))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Labels of every row, in statement order.
    pub fn items(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(|r| r.item.as_str())
    }

    /// Every row's value for one period, for drill-down tables.
    pub fn snapshot(&self, period: &str) -> Vec<(&str, Option<f64>)> {
        self.rows
            .iter()
            .map(|r| (r.item.as_str(), r.value(period)))
            .collect()
    }
}
