//! Quick Ratio (速动比率)
//!
//! Like the current ratio but excludes inventory, the least liquid current
//! asset. An unreported inventory counts as zero, so a company without an
//! inventory line gets its current ratio here.

use polars::prelude::*;

use crate::frame::safe_div;
use crate::inputs::{CURRENT_ASSETS, CURRENT_LIABILITIES, INVENTORY, Input};
use crate::registry::RatioKind;
use crate::traits::Ratio;

/// Quick ratio = (current assets − inventory) / current liabilities
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickRatio;

impl Ratio for QuickRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::QuickRatio
    }

    fn inputs(&self) -> &'static [Input] {
        &[CURRENT_ASSETS, INVENTORY, CURRENT_LIABILITIES]
    }

    fn quotient(&self) -> Expr {
        let quick_assets = CURRENT_ASSETS.col() - INVENTORY.col().fill_null(lit(0.0));
        safe_div(quick_assets, CURRENT_LIABILITIES.col())
    }
}
