//! Statement inputs read by the ratio formulas.
//!
//! Each input lists label variants in preference order; the first is the
//! canonical label. Lookup uses [`aura_data::find_row_any`].

use aura_data::StatementKind;
use polars::prelude::{Expr, col};

/// One formula input: where to look and which labels to try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input {
    /// Short name used in logs
    pub name: &'static str,
    /// Statement the row lives in
    pub statement: StatementKind,
    /// Label variants, canonical first
    pub candidates: &'static [&'static str],
}

impl Input {
    const fn balance_sheet(name: &'static str, candidates: &'static [&'static str]) -> Self {
        Self {
            name,
            statement: StatementKind::BalanceSheet,
            candidates,
        }
    }

    const fn income_statement(name: &'static str, candidates: &'static [&'static str]) -> Self {
        Self {
            name,
            statement: StatementKind::IncomeStatement,
            candidates,
        }
    }

    /// Canonical label.
    pub const fn label(&self) -> &'static str {
        self.candidates[0]
    }

    /// The input's column in a ratio input frame.
    pub fn col(&self) -> Expr {
        col(self.name)
    }
}

/// 资产总计
pub const TOTAL_ASSETS: Input = Input::balance_sheet("total_assets", &["资产总计"]);
/// 负债合计
pub const TOTAL_LIABILITIES: Input = Input::balance_sheet("total_liabilities", &["负债合计"]);
/// 流动资产合计
pub const CURRENT_ASSETS: Input = Input::balance_sheet("current_assets", &["流动资产合计"]);
/// 流动负债合计
pub const CURRENT_LIABILITIES: Input =
    Input::balance_sheet("current_liabilities", &["流动负债合计"]);
/// 所有者权益合计
pub const TOTAL_EQUITY: Input = Input::balance_sheet(
    "total_equity",
    &["所有者权益合计", "所有者权益（或股东权益）合计", "股东权益合计"],
);
/// 存货
pub const INVENTORY: Input = Input::balance_sheet("inventory", &["存货"]);
/// 短期借款
pub const SHORT_TERM_LOANS: Input = Input::balance_sheet("short_term_loans", &["短期借款"]);
/// 长期借款
pub const LONG_TERM_LOANS: Input = Input::balance_sheet("long_term_loans", &["长期借款"]);
/// 应付债券
pub const BONDS_PAYABLE: Input = Input::balance_sheet("bonds_payable", &["应付债券"]);
/// 应收账款
pub const ACCOUNTS_RECEIVABLE: Input =
    Input::balance_sheet("accounts_receivable", &["应收账款", "应收票据及应收账款"]);

/// 净利润
pub const NET_PROFIT: Input = Input::income_statement("net_profit", &["净利润"]);
/// 主营业务收入
pub const MAIN_REVENUE: Input = Input::income_statement(
    "main_business_revenue",
    &["主营业务收入", "营业收入", "一、营业总收入"],
);
/// 主营业务成本
pub const MAIN_COST: Input = Input::income_statement(
    "main_business_cost",
    &["主营业务成本", "营业成本", "其中：营业成本"],
);
