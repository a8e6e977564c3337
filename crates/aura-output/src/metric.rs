//! Requested metric keys.

use aura_data::{CatalogItem, get_item};
use aura_ratios::{RatioKind, Scale};
use serde::{Deserialize, Serialize};

/// How a metric's raw values are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Statement amount in yuan, displayed in 万 (ten thousands)
    Amount,
    /// Percentage ratio
    Percent,
    /// Plain multiple
    Times,
}

impl Unit {
    /// Format a value of this unit for tables.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Amount => format!("{:.2}万", value / 10_000.0),
            Self::Percent => format!("{value:.2}%"),
            Self::Times => format!("{value:.2}"),
        }
    }
}

/// A metric the trend panel can plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKey {
    /// A raw statement line item
    Item(CatalogItem),
    /// One of the ten derived ratios
    Ratio(RatioKind),
}

impl MetricKey {
    /// Resolve a key. Ratio keys, labels and aliases are tried before catalog item keys.
    pub fn resolve(key: &str) -> Option<Self> {
        RatioKind::from_key(key)
            .map(Self::Ratio)
            .or_else(|| get_item(key.trim()).map(Self::Item))
    }

    /// Stable key.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Item(item) => item.key,
            Self::Ratio(kind) => kind.key(),
        }
    }

    /// Display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Item(item) => item.label,
            Self::Ratio(kind) => kind.label(),
        }
    }

    /// True for derived ratios.
    pub const fn is_ratio(&self) -> bool {
        matches!(self, Self::Ratio(_))
    }

    /// Display unit of untransformed values.
    pub const fn unit(&self) -> Unit {
        match self {
            Self::Item(_) => Unit::Amount,
            Self::Ratio(kind) => match kind.scale() {
                Scale::Percent => Unit::Percent,
                Scale::Times => Unit::Times,
            },
        }
    }
}

/// Resolve requested keys in order, dropping duplicates and logging unknown keys.
pub fn resolve_metrics<S: AsRef<str>>(keys: &[S]) -> Vec<MetricKey> {
    let mut resolved: Vec<MetricKey> = Vec::with_capacity(keys.len());
    for key in keys {
        let key = key.as_ref();
        match MetricKey::resolve(key) {
            Some(metric) if !resolved.contains(&metric) => resolved.push(metric),
            Some(_) => tracing::debug!(key, "duplicate metric key ignored"),
            None => tracing::warn!(key, "unknown metric key skipped"),
        }
    }
    resolved
}
