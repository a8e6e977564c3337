//! Debt Ratio (资产负债率)
//!
//! Total liabilities as a percentage of total assets.

use polars::prelude::Expr;

use crate::frame::safe_div;
use crate::inputs::{Input, TOTAL_ASSETS, TOTAL_LIABILITIES};
use crate::registry::RatioKind;
use crate::traits::Ratio;

/// Debt ratio = total liabilities / total assets × 100
#[derive(Debug, Default, Clone, Copy)]
pub struct DebtRatio;

impl Ratio for DebtRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::DebtRatio
    }

    fn inputs(&self) -> &'static [Input] {
        &[TOTAL_LIABILITIES, TOTAL_ASSETS]
    }

    fn quotient(&self) -> Expr {
        safe_div(TOTAL_LIABILITIES.col(), TOTAL_ASSETS.col())
    }
}
