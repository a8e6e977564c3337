//! Asset Turnover (总资产周转率)
//!
//! Uses period-end total assets; there is no averaging with the prior period.

use polars::prelude::Expr;

use crate::frame::safe_div;
use crate::inputs::{Input, MAIN_REVENUE, TOTAL_ASSETS};
use crate::registry::RatioKind;
use crate::traits::Ratio;

/// Asset Turnover = main-business revenue / total assets
#[derive(Debug, Default, Clone, Copy)]
pub struct AssetTurnover;

impl Ratio for AssetTurnover {
    fn kind(&self) -> RatioKind {
        RatioKind::AssetTurnover
    }

    fn inputs(&self) -> &'static [Input] {
        &[MAIN_REVENUE, TOTAL_ASSETS]
    }

    fn quotient(&self) -> Expr {
        safe_div(MAIN_REVENUE.col(), TOTAL_ASSETS.col())
    }
}
