//! Ratio Registry
//!
//! Central registry of the ten financial ratios. Maps the stable keys used by
//! callers, the display labels, and the backend's alternate labels onto
//! [`RatioKind`].

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Available ratio categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioCategory {
    /// Solvency ratios (debt ratio, current ratio, quick ratio, interest-bearing debt)
    Solvency,
    /// Profitability ratios (ROE, main-business net margin)
    Profitability,
    /// Growth ratios (capital accumulation)
    Growth,
    /// Efficiency ratios (asset, receivable and inventory turnover)
    Efficiency,
}

/// How a ratio's raw quotient is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Quotient × 100, shown with a `%` sign
    Percent,
    /// Plain quotient (times)
    Times,
}

impl Scale {
    /// Multiplier applied to the raw quotient.
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Percent => 100.0,
            Self::Times => 1.0,
        }
    }
}

/// The ten supported ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKind {
    /// 资产负债率
    DebtRatio,
    /// 流动比率
    CurrentRatio,
    /// 速动比率
    QuickRatio,
    /// 有息负债占比
    InterestDebtRatio,
    /// 净资产收益率
    Roe,
    /// 资本积累率
    CapitalAccumulationRatio,
    /// 主营业务净利率
    MainNetProfitRatio,
    /// 总资产周转率
    AssetTurnover,
    /// 应收账款周转率
    ReceivableTurnover,
    /// 存货周转率
    InventoryTurnover,
}

impl RatioKind {
    /// Every ratio, in display order.
    pub const ALL: [Self; 10] = [
        Self::DebtRatio,
        Self::CurrentRatio,
        Self::QuickRatio,
        Self::InterestDebtRatio,
        Self::Roe,
        Self::CapitalAccumulationRatio,
        Self::MainNetProfitRatio,
        Self::AssetTurnover,
        Self::ReceivableTurnover,
        Self::InventoryTurnover,
    ];

    /// Stable snake_case key.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::DebtRatio => "debt_ratio",
            Self::CurrentRatio => "current_ratio",
            Self::QuickRatio => "quick_ratio",
            Self::InterestDebtRatio => "interest_debt_ratio",
            Self::Roe => "roe",
            Self::CapitalAccumulationRatio => "capital_accumulation_ratio",
            Self::MainNetProfitRatio => "main_net_profit_ratio",
            Self::AssetTurnover => "asset_turnover",
            Self::ReceivableTurnover => "receivable_turnover",
            Self::InventoryTurnover => "inventory_turnover",
        }
    }

    /// Display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DebtRatio => "资产负债率",
            Self::CurrentRatio => "流动比率",
            Self::QuickRatio => "速动比率",
            Self::InterestDebtRatio => "有息负债占比",
            Self::Roe => "净资产收益率",
            Self::CapitalAccumulationRatio => "资本积累率",
            Self::MainNetProfitRatio => "主营业务净利率",
            Self::AssetTurnover => "总资产周转率",
            Self::ReceivableTurnover => "应收账款周转率",
            Self::InventoryTurnover => "存货周转率",
        }
    }

    /// Other labels the finance API uses for the same ratio.
    ///
    /// `主营业务利润率` is not one: the finance API computes it as a gross
    /// margin, which is not [`RatioKind::MainNetProfitRatio`].
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::InterestDebtRatio => &["有息负债占总资产比"],
            _ => &[],
        }
    }

    /// Ratio category.
    pub const fn category(&self) -> RatioCategory {
        match self {
            Self::DebtRatio | Self::CurrentRatio | Self::QuickRatio | Self::InterestDebtRatio => {
                RatioCategory::Solvency
            }
            Self::Roe | Self::MainNetProfitRatio => RatioCategory::Profitability,
            Self::CapitalAccumulationRatio => RatioCategory::Growth,
            Self::AssetTurnover | Self::ReceivableTurnover | Self::InventoryTurnover => {
                RatioCategory::Efficiency
            }
        }
    }

    /// Presentation scale.
    pub const fn scale(&self) -> Scale {
        match self {
            Self::DebtRatio
            | Self::InterestDebtRatio
            | Self::Roe
            | Self::CapitalAccumulationRatio
            | Self::MainNetProfitRatio => Scale::Percent,
            Self::CurrentRatio
            | Self::QuickRatio
            | Self::AssetTurnover
            | Self::ReceivableTurnover
            | Self::InventoryTurnover => Scale::Times,
        }
    }

    /// Resolve a key, display label or backend alias.
    pub fn from_key(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.key() == name || k.label() == name || k.aliases().contains(&name))
    }
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Ratios selected when the ratio view first opens.
pub const DEFAULT_SELECTED_RATIOS: [RatioKind; 4] = [
    RatioKind::DebtRatio,
    RatioKind::CurrentRatio,
    RatioKind::Roe,
    RatioKind::InterestDebtRatio,
];

/// Ratio metadata
#[derive(Debug, Clone)]
pub struct RatioInfo {
    /// Ratio identifier
    pub kind: RatioKind,
    /// Ratio category
    pub category: RatioCategory,
    /// Brief description of the formula
    pub description: &'static str,
    /// Statement labels the formula reads (canonical label of each input)
    pub required_items: &'static [&'static str],
}

/// Get all available ratio info
pub fn available_ratios() -> Vec<RatioInfo> {
    vec![
        // Solvency
        RatioInfo {
            kind: RatioKind::DebtRatio,
            category: RatioCategory::Solvency,
            description: "Total liabilities over total assets, in percent",
            required_items: &["负债合计", "资产总计"],
        },
        RatioInfo {
            kind: RatioKind::CurrentRatio,
            category: RatioCategory::Solvency,
            description: "Current assets over current liabilities",
            required_items: &["流动资产合计", "流动负债合计"],
        },
        RatioInfo {
            kind: RatioKind::QuickRatio,
            category: RatioCategory::Solvency,
            description: "Current assets less inventory over current liabilities",
            required_items: &["流动资产合计", "存货", "流动负债合计"],
        },
        RatioInfo {
            kind: RatioKind::InterestDebtRatio,
            category: RatioCategory::Solvency,
            description: "Short and long-term loans plus bonds over total assets, in percent",
            required_items: &["短期借款", "长期借款", "应付债券", "资产总计"],
        },
        // Profitability
        RatioInfo {
            kind: RatioKind::Roe,
            category: RatioCategory::Profitability,
            description: "Net profit over owners' equity, in percent",
            required_items: &["净利润", "所有者权益合计"],
        },
        RatioInfo {
            kind: RatioKind::MainNetProfitRatio,
            category: RatioCategory::Profitability,
            description: "Net profit over main-business revenue, in percent",
            required_items: &["净利润", "主营业务收入"],
        },
        // Growth
        RatioInfo {
            kind: RatioKind::CapitalAccumulationRatio,
            category: RatioCategory::Growth,
            description: "Change in owners' equity versus the previous period, in percent",
            required_items: &["所有者权益合计"],
        },
        // Efficiency
        RatioInfo {
            kind: RatioKind::AssetTurnover,
            category: RatioCategory::Efficiency,
            description: "Main-business revenue over total assets",
            required_items: &["主营业务收入", "资产总计"],
        },
        RatioInfo {
            kind: RatioKind::ReceivableTurnover,
            category: RatioCategory::Efficiency,
            description: "Main-business revenue over accounts receivable",
            required_items: &["主营业务收入", "应收账款"],
        },
        RatioInfo {
            kind: RatioKind::InventoryTurnover,
            category: RatioCategory::Efficiency,
            description: "Main-business cost over inventory",
            required_items: &["主营业务成本", "存货"],
        },
    ]
}

/// Get ratios by category
pub fn ratios_by_category(category: RatioCategory) -> Vec<RatioInfo> {
    available_ratios()
        .into_iter()
        .filter(|r| r.category == category)
        .collect()
}

/// Get ratio info by key, label or alias
pub fn get_ratio_info(name: &str) -> Option<RatioInfo> {
    let kind = RatioKind::from_key(name)?;
    available_ratios().into_iter().find(|r| r.kind == kind)
}

/// Count ratios by category
pub fn count_by_category() -> HashMap<RatioCategory, usize> {
    let mut counts = HashMap::new();
    for ratio in available_ratios() {
        *counts.entry(ratio.category).or_insert(0) += 1;
    }
    counts
}
