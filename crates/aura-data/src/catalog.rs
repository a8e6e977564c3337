//! Raw line-item catalog
//!
//! The statement line items a trend chart can plot directly, keyed by a
//! stable identifier. Each item knows which statement it lives in.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::statement::StatementKind;

/// Line-item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Balance-sheet assets
    Asset,
    /// Balance-sheet liabilities
    Liability,
    /// Balance-sheet owners' equity
    Equity,
    /// Income-statement items
    Income,
}

impl ItemCategory {
    /// The statement items of this category are looked up in.
    pub const fn statement(&self) -> StatementKind {
        match self {
            Self::Income => StatementKind::IncomeStatement,
            Self::Asset | Self::Liability | Self::Equity => StatementKind::BalanceSheet,
        }
    }
}

/// A selectable raw line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CatalogItem {
    /// Stable key (unique identifier)
    pub key: &'static str,
    /// Statement label, resolved with exact-then-contains lookup
    pub label: &'static str,
    /// Item category
    pub category: ItemCategory,
}

const fn item(key: &'static str, label: &'static str, category: ItemCategory) -> CatalogItem {
    CatalogItem {
        key,
        label,
        category,
    }
}

const MAIN_ITEMS: &[CatalogItem] = &[
    // Assets
    item("cash", "货币资金", ItemCategory::Asset),
    item("receivable", "应收账款", ItemCategory::Asset),
    item("inventory", "存货", ItemCategory::Asset),
    item("fixed_assets", "固定资产", ItemCategory::Asset),
    item("construction", "在建工程", ItemCategory::Asset),
    item("intangible", "无形资产", ItemCategory::Asset),
    item("investment_property", "投资性房地产", ItemCategory::Asset),
    item("long_term_equity", "长期股权投资", ItemCategory::Asset),
    item("other_receivables", "其他应收款", ItemCategory::Asset),
    item("total_current_assets", "流动资产合计", ItemCategory::Asset),
    item("total_assets", "资产总计", ItemCategory::Asset),
    // Liabilities
    item("short_borrowings", "短期借款", ItemCategory::Liability),
    item("accounts_payable", "应付账款", ItemCategory::Liability),
    item("contract_liabilities", "合同负债", ItemCategory::Liability),
    item("long_borrowings", "长期借款", ItemCategory::Liability),
    item("bonds_payable", "应付债券", ItemCategory::Liability),
    item("debt", "流动负债合计", ItemCategory::Liability),
    item("non_current_liabilities", "非流动负债合计", ItemCategory::Liability),
    item("total_liabilities", "负债合计", ItemCategory::Liability),
    // Equity
    item("share_capital", "实收资本（或股本）", ItemCategory::Equity),
    item("capital_reserve", "资本公积", ItemCategory::Equity),
    item("surplus_reserve", "盈余公积", ItemCategory::Equity),
    item("undistributed_profit", "未分配利润", ItemCategory::Equity),
    item("total_equity", "所有者权益合计", ItemCategory::Equity),
    // Income statement
    item("revenue", "营业收入", ItemCategory::Income),
    item("operating_costs", "营业成本", ItemCategory::Income),
    item("operating_profit", "营业利润", ItemCategory::Income),
    item("total_profit", "利润总额", ItemCategory::Income),
    item("net_profit", "净利润", ItemCategory::Income),
];

/// Items selected when the main-items view first opens.
pub const DEFAULT_MAIN_SELECTION: [&str; 5] =
    ["cash", "receivable", "fixed_assets", "accounts_payable", "net_profit"];

/// All catalog items, in display order.
pub fn main_items() -> &'static [CatalogItem] {
    MAIN_ITEMS
}

/// Items of one category.
pub fn items_by_category(category: ItemCategory) -> Vec<CatalogItem> {
    MAIN_ITEMS
        .iter()
        .filter(|i| i.category == category)
        .copied()
        .collect()
}

/// Look up an item by key.
pub fn get_item(key: &str) -> Option<CatalogItem> {
    MAIN_ITEMS.iter().find(|i| i.key == key).copied()
}

/// Count items by category.
pub fn count_by_category() -> HashMap<ItemCategory, usize> {
    let mut counts = HashMap::new();
    for item in MAIN_ITEMS {
        *counts.entry(item.category).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(main_items().len(), 29);
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = main_items().iter().map(|i| i.key).collect();
        assert_eq!(keys.len(), main_items().len());
    }

    #[test]
    fn test_count_by_category() {
        let counts = count_by_category();
        assert_eq!(counts.get(&ItemCategory::Asset), Some(&11));
        assert_eq!(counts.get(&ItemCategory::Liability), Some(&8));
        assert_eq!(counts.get(&ItemCategory::Equity), Some(&5));
        assert_eq!(counts.get(&ItemCategory::Income), Some(&5));
        assert_eq!(items_by_category(ItemCategory::Income).len(), 5);
    }

    #[test]
    fn test_get_item() {
        let debt = get_item("debt").unwrap();
        assert_eq!(debt.label, "流动负债合计");
        assert_eq!(debt.category.statement(), StatementKind::BalanceSheet);

        let net_profit = get_item("net_profit").unwrap();
        assert_eq!(net_profit.category.statement(), StatementKind::IncomeStatement);

        assert!(get_item("debt_ratio").is_none());
    }

    #[test]
    fn test_default_selection_is_in_catalog() {
        for key in DEFAULT_MAIN_SELECTION {
            assert!(get_item(key).is_some(), "{key} missing from catalog");
        }
    }
}
