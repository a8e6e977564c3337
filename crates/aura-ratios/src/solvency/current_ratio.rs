//! Current Ratio (流动比率)

use polars::prelude::Expr;

use crate::frame::safe_div;
use crate::inputs::{CURRENT_ASSETS, CURRENT_LIABILITIES, Input};
use crate::registry::RatioKind;
use crate::traits::Ratio;

/// Current ratio = current assets / current liabilities
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentRatio;

impl Ratio for CurrentRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::CurrentRatio
    }

    fn inputs(&self) -> &'static [Input] {
        &[CURRENT_ASSETS, CURRENT_LIABILITIES]
    }

    fn quotient(&self) -> Expr {
        safe_div(CURRENT_ASSETS.col(), CURRENT_LIABILITIES.col())
    }
}
