//! Ordered reporting-period axis.
//!
//! Every derived series is aligned to a `Periods` value. Order is positional:
//! period-over-period transforms compare element `i` with element `i - 1`
//! whatever those identifiers are. Nothing here checks that the periods are
//! contiguous or sorted.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Periods shown by the trend panel when the caller does not choose any.
pub const DEFAULT_TREND_PERIODS: [&str; 6] = ["2020", "2021", "2022", "2023", "2024", "2025_Q1"];

/// An ordered sequence of period identifiers such as `"2020"` or `"2025_Q1"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Periods(Vec<String>);

impl Periods {
    /// Create from any list of identifiers, keeping the given order.
    pub fn new<I, S>(periods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(periods.into_iter().map(Into::into).collect())
    }

    /// The default six-period trend axis.
    pub fn default_trend() -> Self {
        Self::new(DEFAULT_TREND_PERIODS)
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no periods.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Period at position `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterate period identifiers in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    /// Borrow the identifiers.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Display labels for every period, in order.
    pub fn labels(&self) -> Vec<String> {
        self.iter().map(label).collect()
    }
}

/// Display label for a period identifier.
///
/// `"2025_Q1"` becomes `"2025年Q1末"`, `"2024_09"` becomes `"2024年9月末"`;
/// anything else is returned unchanged.
pub fn label(period: &str) -> String {
    let Some((year, suffix)) = period.split_once('_') else {
        return period.to_string();
    };

    if let Some(quarter) = suffix.strip_prefix('Q') {
        return match quarter {
            "1" | "2" | "3" | "4" => format!("{year}年Q{quarter}末"),
            _ => period.to_string(),
        };
    }

    match suffix.parse::<u8>() {
        Ok(month @ 1..=12) => format!("{year}年{month}月末"),
        _ => period.to_string(),
    }
}

impl FromStr for Periods {
    type Err = Infallible;

    /// Parse a comma-separated list, e.g. `"2020,2021,2025_Q1"`. Blank entries are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(
            s.split(',').map(str::trim).filter(|p| !p.is_empty()),
        ))
    }
}

impl fmt::Display for Periods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl From<Vec<String>> for Periods {
    fn from(periods: Vec<String>) -> Self {
        Self(periods)
    }
}

impl From<Vec<&str>> for Periods {
    fn from(periods: Vec<&str>) -> Self {
        Self::new(periods)
    }
}

impl<'a> IntoIterator for &'a Periods {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
