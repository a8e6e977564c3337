//! Where ratio series come from.
//!
//! Ratios are either computed here from raw statement rows or taken as-is
//! from a backend payload that already holds them per period. The choice is an
//! explicit [`RatioSource`] variant rather than a guess based on input shape.

use std::collections::BTreeMap;
use std::path::Path;

use aura_data::row::cell_value;
use aura_data::{DataError, Periods, RowLookup};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::efficiency::{AssetTurnover, InventoryTurnover, ReceivableTurnover};
use crate::growth::CapitalAccumulationRatio;
use crate::profitability::{MainNetProfitRatio, Roe};
use crate::registry::RatioKind;
use crate::solvency::{CurrentRatio, DebtRatio, InterestDebtRatio, QuickRatio};
use crate::traits::{Ratio, RatioConfig, RatioContext};

/// Ratio values by period, then by ratio name, as the finance API returns them:
/// `{"2020": {"资产负债率": 60.0, "流动比率": 1.5}, "2021": {...}}`.
///
/// Names may be keys, display labels or backend aliases; see [`RatioKind::from_key`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrecomputedRatios(BTreeMap<String, BTreeMap<String, Option<f64>>>);

impl PrecomputedRatios {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of one value.
    pub fn with_value(
        mut self,
        period: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<Option<f64>>,
    ) -> Self {
        self.0
            .entry(period.into())
            .or_default()
            .insert(name.into(), value.into());
        self
    }

    /// True when no period carries any ratio.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }

    /// Periods present in the payload.
    pub fn periods(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Value of one ratio for one period.
    ///
    /// When several names in the period resolve to the same ratio, the first
    /// reported value in name order wins.
    pub fn get(&self, period: &str, kind: RatioKind) -> Option<f64> {
        self.0.get(period).and_then(|named| {
            named
                .iter()
                .filter(|(name, _)| RatioKind::from_key(name) == Some(kind))
                .find_map(|(_, value)| *value)
        })
    }

    /// Parse from JSON text: either `{"data": {period: {...}}}` or the bare map.
    pub fn from_json_str(json: &str) -> aura_data::Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> aura_data::Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading precomputed ratios");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Build from a JSON value. Non-numeric ratio values are kept as unreported.
    pub fn from_value(value: Value) -> aura_data::Result<Self> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(DataError::UnexpectedPayload {
                    what: "financial ratios".to_string(),
                    expected: "object keyed by period",
                    found: DataError::json_kind(&other),
                });
            }
        };
        match map.remove("data") {
            Some(Value::Object(inner)) => map = inner,
            Some(other) => {
                return Err(DataError::UnexpectedPayload {
                    what: "financial ratios".to_string(),
                    expected: "object under \"data\"",
                    found: DataError::json_kind(&other),
                });
            }
            None => {}
        }

        let mut periods = BTreeMap::new();
        for (period, named) in map {
            let named = match named {
                Value::Object(named) => named,
                other => {
                    return Err(DataError::UnexpectedPayload {
                        what: format!("financial ratios for {period}"),
                        expected: "object keyed by ratio name",
                        found: DataError::json_kind(&other),
                    });
                }
            };
            let values = named
                .into_iter()
                .map(|(name, cell)| (name, cell_value(&cell)))
                .collect();
            periods.insert(period, values);
        }
        Ok(Self(periods))
    }
}

/// Input to [`compute_ratios`].
#[derive(Debug, Clone, Copy)]
pub enum RatioSource<'a> {
    /// Compute client-side from balance-sheet and income-statement rows.
    Raw {
        /// Balance-sheet rows
        balance_sheet: &'a dyn RowLookup,
        /// Income-statement rows
        income_statement: &'a dyn RowLookup,
    },
    /// Re-key ratios the backend already computed; nothing is recomputed.
    Precomputed(&'a PrecomputedRatios),
}

impl<'a> RatioSource<'a> {
    /// Prefer a non-empty precomputed payload; otherwise compute from rows.
    pub fn select(
        precomputed: Option<&'a PrecomputedRatios>,
        balance_sheet: &'a dyn RowLookup,
        income_statement: &'a dyn RowLookup,
    ) -> Self {
        match precomputed {
            Some(ratios) if !ratios.is_empty() => Self::Precomputed(ratios),
            _ => Self::Raw {
                balance_sheet,
                income_statement,
            },
        }
    }

    /// Short name for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Raw { .. } => "raw",
            Self::Precomputed(_) => "precomputed",
        }
    }
}

/// All ten ratio series, aligned to one period axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioSet {
    periods: Periods,
    series: BTreeMap<RatioKind, Vec<Option<f64>>>,
}

impl RatioSet {
    /// The period axis every series is aligned to.
    pub const fn periods(&self) -> &Periods {
        &self.periods
    }

    /// Series for one ratio; always `periods().len()` long.
    pub fn get(&self, kind: RatioKind) -> &[Option<f64>] {
        self.series.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate `(ratio, series)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (RatioKind, &[Option<f64>])> + '_ {
        RatioKind::ALL.into_iter().map(|k| (k, self.get(k)))
    }
}

/// The formula object for a ratio.
pub fn ratio_for(kind: RatioKind) -> Box<dyn Ratio> {
    match kind {
        RatioKind::DebtRatio => Box::new(DebtRatio),
        RatioKind::CurrentRatio => Box::new(CurrentRatio),
        RatioKind::QuickRatio => Box::new(QuickRatio),
        RatioKind::InterestDebtRatio => Box::new(InterestDebtRatio),
        RatioKind::Roe => Box::new(Roe),
        RatioKind::CapitalAccumulationRatio => Box::new(CapitalAccumulationRatio),
        RatioKind::MainNetProfitRatio => Box::new(MainNetProfitRatio),
        RatioKind::AssetTurnover => Box::new(AssetTurnover),
        RatioKind::ReceivableTurnover => Box::new(ReceivableTurnover),
        RatioKind::InventoryTurnover => Box::new(InventoryTurnover),
    }
}

/// Formula objects for all ten ratios, in display order.
pub fn all_ratios() -> Vec<Box<dyn Ratio>> {
    RatioKind::ALL.into_iter().map(ratio_for).collect()
}

/// Compute all ten ratio series for `periods`.
///
/// Missing rows, unreported values and zero denominators become `None` at the
/// affected points. Raw computation evaluates every formula over one shared
/// frame of inputs; only that evaluation can fail.
pub fn compute_ratios(
    source: &RatioSource<'_>,
    periods: &Periods,
    config: &RatioConfig,
) -> aura_data::Result<RatioSet> {
    tracing::debug!(source = source.name(), periods = periods.len(), "computing ratios");

    let series = match source {
        RatioSource::Raw {
            balance_sheet,
            income_statement,
        } => {
            let ctx = RatioContext::new(*balance_sheet, *income_statement, periods, config);
            ctx.evaluate(&all_ratios())?.into_iter().collect()
        }
        RatioSource::Precomputed(ratios) => RatioKind::ALL
            .into_iter()
            .map(|kind| {
                let values = periods.iter().map(|p| ratios.get(p, kind)).collect();
                (kind, values)
            })
            .collect(),
    };

    Ok(RatioSet {
        periods: periods.clone(),
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::Input;
    use aura_data::FinancialRow;

    #[test]
    fn test_precomputed_parse_envelope_and_aliases() {
        let json = r#"{"data": {
            "2020": {"资产负债率": 55.1234, "有息负债占总资产比": 20.5, "资本回报率": 9.0},
            "2021": {"debt_ratio": 57.0, "流动比率": "1.8"}
        }}"#;
        let ratios = PrecomputedRatios::from_json_str(json).unwrap();
        assert_eq!(ratios.get("2020", RatioKind::DebtRatio), Some(55.1234));
        assert_eq!(ratios.get("2020", RatioKind::InterestDebtRatio), Some(20.5));
        assert_eq!(ratios.get("2021", RatioKind::DebtRatio), Some(57.0));
        assert_eq!(ratios.get("2021", RatioKind::CurrentRatio), Some(1.8));
        assert_eq!(ratios.get("2022", RatioKind::DebtRatio), None);
    }

    #[test]
    fn test_precomputed_gross_margin_is_ignored() {
        let ratios = PrecomputedRatios::new().with_value("2020", "主营业务利润率", 35.0);
        assert!(!ratios.is_empty());
        assert_eq!(ratios.get("2020", RatioKind::MainNetProfitRatio), None);
    }

    #[test]
    fn test_formula_inputs_match_registry() {
        for info in crate::registry::available_ratios() {
            let ratio = ratio_for(info.kind);
            assert_eq!(ratio.kind(), info.kind);
            assert_eq!(ratio.name(), info.kind.key());
            let labels: Vec<&str> = ratio.inputs().iter().map(Input::label).collect();
            assert_eq!(labels, info.required_items, "{}", info.kind);
        }
    }

    #[test]
    fn test_precomputed_rejects_arrays() {
        assert!(PrecomputedRatios::from_json_str("[]").is_err());
        assert!(PrecomputedRatios::from_json_str(r#"{"2020": [1, 2]}"#).is_err());
        assert!(PrecomputedRatios::from_json_str(r#"{"data": []}"#).is_err());
    }

    #[test]
    fn test_select_prefers_non_empty_precomputed() {
        let rows: Vec<FinancialRow> = Vec::new();
        let sparse = PrecomputedRatios::new().with_value("2020", "roe", None);
        assert!(!sparse.is_empty());
        assert!(matches!(
            RatioSource::select(Some(&PrecomputedRatios::new()), &rows, &rows),
            RatioSource::Raw { .. }
        ));
        assert!(matches!(
            RatioSource::select(None, &rows, &rows),
            RatioSource::Raw { .. }
        ));
        assert!(matches!(
            RatioSource::select(Some(&sparse), &rows, &rows),
            RatioSource::Precomputed(_)
        ));
    }

    #[test]
    fn test_precomputed_rekeying_is_not_rounded() {
        let ratios = PrecomputedRatios::new()
            .with_value("2020", "净资产收益率", 12.3456)
            .with_value("2021", "roe", None);
        let periods = Periods::from(vec!["2020", "2021", "2022"]);
        let set = compute_ratios(
            &RatioSource::Precomputed(&ratios),
            &periods,
            &RatioConfig::default(),
        )
        .unwrap();
        assert_eq!(set.get(RatioKind::Roe), &[Some(12.3456), None, None]);
        assert!(set.get(RatioKind::DebtRatio).iter().all(Option::is_none));
        assert_eq!(set.iter().count(), 10);
    }
}
