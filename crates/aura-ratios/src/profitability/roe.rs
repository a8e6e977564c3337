//! Return on Equity (净资产收益率)
//!
//! Net profit over period-end owners' equity. Equity is taken at period end,
//! not averaged with the previous period.

use polars::prelude::Expr;

use crate::frame::safe_div;
use crate::inputs::{Input, NET_PROFIT, TOTAL_EQUITY};
use crate::registry::RatioKind;
use crate::traits::Ratio;

/// ROE = net profit / total equity × 100
#[derive(Debug, Default, Clone, Copy)]
pub struct Roe;

impl Ratio for Roe {
    fn kind(&self) -> RatioKind {
        RatioKind::Roe
    }

    fn inputs(&self) -> &'static [Input] {
        &[NET_PROFIT, TOTAL_EQUITY]
    }

    fn quotient(&self) -> Expr {
        safe_div(NET_PROFIT.col(), TOTAL_EQUITY.col())
    }
}
