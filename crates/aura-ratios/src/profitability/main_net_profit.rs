//! Main-Business Net Profit Ratio (主营业务净利率)

use polars::prelude::Expr;

use crate::frame::safe_div;
use crate::inputs::{Input, MAIN_REVENUE, NET_PROFIT};
use crate::registry::RatioKind;
use crate::traits::Ratio;

/// Main net profit ratio = net profit / main-business revenue × 100
#[derive(Debug, Default, Clone, Copy)]
pub struct MainNetProfitRatio;

impl Ratio for MainNetProfitRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::MainNetProfitRatio
    }

    fn inputs(&self) -> &'static [Input] {
        &[NET_PROFIT, MAIN_REVENUE]
    }

    fn quotient(&self) -> Expr {
        safe_div(NET_PROFIT.col(), MAIN_REVENUE.col())
    }
}
