//! Receivable Turnover (应收账款周转率)

use polars::prelude::Expr;

use crate::frame::safe_div;
use crate::inputs::{ACCOUNTS_RECEIVABLE, Input, MAIN_REVENUE};
use crate::registry::RatioKind;
use crate::traits::Ratio;

/// Receivable Turnover = main-business revenue / accounts receivable
#[derive(Debug, Default, Clone, Copy)]
pub struct ReceivableTurnover;

impl Ratio for ReceivableTurnover {
    fn kind(&self) -> RatioKind {
        RatioKind::ReceivableTurnover
    }

    fn inputs(&self) -> &'static [Input] {
        &[MAIN_REVENUE, ACCOUNTS_RECEIVABLE]
    }

    fn quotient(&self) -> Expr {
        safe_div(MAIN_REVENUE.col(), ACCOUNTS_RECEIVABLE.col())
    }
}
