//! Capital Accumulation Ratio (资本积累率)
//!
//! Growth of owners' equity relative to the previous element of the period
//! axis. The comparison is positional: whatever period precedes `i` in the
//! caller's list is treated as the prior period.

use polars::prelude::*;

use crate::frame::safe_div;
use crate::inputs::{Input, TOTAL_EQUITY};
use crate::registry::RatioKind;
use crate::traits::Ratio;

/// Capital accumulation[i] = (equity[i] − equity[i−1]) / equity[i−1] × 100, `None` at i = 0
#[derive(Debug, Default, Clone, Copy)]
pub struct CapitalAccumulationRatio;

impl Ratio for CapitalAccumulationRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::CapitalAccumulationRatio
    }

    fn inputs(&self) -> &'static [Input] {
        &[TOTAL_EQUITY]
    }

    fn quotient(&self) -> Expr {
        let previous = TOTAL_EQUITY.col().shift(lit(1));
        safe_div(TOTAL_EQUITY.col() - previous.clone(), previous)
    }
}
