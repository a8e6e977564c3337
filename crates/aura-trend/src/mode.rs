//! Display modes of the trend panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// How a series is transformed before it is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendMode {
    /// Raw values, multi-period comparison
    #[default]
    Value,
    /// Percent change vs. the previous element, read as year-over-year
    Yoy,
    /// Percent change vs. the previous element, read as quarter-over-quarter
    Qoq,
    /// Percent change plus flagged outliers
    Abnormal,
}

impl TrendMode {
    /// All modes in selector order.
    pub const ALL: [Self; 4] = [Self::Value, Self::Yoy, Self::Qoq, Self::Abnormal];

    /// Lowercase identifier used on the command line and in JSON.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Yoy => "yoy",
            Self::Qoq => "qoq",
            Self::Abnormal => "abnormal",
        }
    }

    /// Chart subtitle shown for the mode.
    pub const fn subtitle(&self) -> &'static str {
        match self {
            Self::Value => "多期对比，审计关注重点项目",
            Self::Yoy => "同比增长率，关注趋势变化",
            Self::Qoq => "环比增长率，关注短期波动",
            Self::Abnormal => "异常点高亮，辅助识别重大风险",
        }
    }

    /// True for the modes that plot percent change instead of raw values.
    pub const fn is_growth(&self) -> bool {
        !matches!(self, Self::Value)
    }
}

impl fmt::Display for TrendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("value", TrendMode::Value)]
    #[case("yoy", TrendMode::Yoy)]
    #[case("QoQ", TrendMode::Qoq)]
    #[case(" abnormal ", TrendMode::Abnormal)]
    fn test_parse(#[case] input: &str, #[case] expected: TrendMode) {
        assert_eq!(input.parse::<TrendMode>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "mom".parse::<TrendMode>().unwrap_err();
        assert!(err.to_string().contains("mom"));
    }

    #[test]
    fn test_growth_modes() {
        assert!(!TrendMode::Value.is_growth());
        assert!(TrendMode::Yoy.is_growth());
        assert!(TrendMode::Qoq.is_growth());
        assert!(TrendMode::Abnormal.is_growth());
    }

    #[test]
    fn test_deserialize_lowercase() {
        #[derive(Deserialize)]
        struct Panel {
            mode: TrendMode,
        }
        let panel: Panel = toml::from_str("mode = \"qoq\"").unwrap();
        assert_eq!(panel.mode, TrendMode::Qoq);
    }
}
