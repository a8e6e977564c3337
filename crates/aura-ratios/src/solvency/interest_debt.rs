//! Interest-Bearing Debt Ratio (有息负债占比)
//!
//! Share of total assets financed by interest-bearing debt: short-term loans,
//! long-term loans and bonds payable. Components that are not reported count
//! as zero, but at least one of the three must be reported for a period to
//! have a value.

use polars::prelude::*;

use crate::frame::safe_div;
use crate::inputs::{BONDS_PAYABLE, Input, LONG_TERM_LOANS, SHORT_TERM_LOANS, TOTAL_ASSETS};
use crate::registry::RatioKind;
use crate::traits::Ratio;

/// Interest-bearing debt ratio = (short loans + long loans + bonds) / total assets × 100
#[derive(Debug, Default, Clone, Copy)]
pub struct InterestDebtRatio;

impl InterestDebtRatio {
    /// Sum of the reported components, null if none is reported.
    fn interest_bearing_debt() -> Expr {
        let short = SHORT_TERM_LOANS.col();
        let long = LONG_TERM_LOANS.col();
        let bonds = BONDS_PAYABLE.col();
        let none_reported = short
            .clone()
            .is_null()
            .and(long.clone().is_null())
            .and(bonds.clone().is_null());
        when(none_reported).then(lit(NULL)).otherwise(
            short.fill_null(lit(0.0)) + long.fill_null(lit(0.0)) + bonds.fill_null(lit(0.0)),
        )
    }
}

impl Ratio for InterestDebtRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::InterestDebtRatio
    }

    fn inputs(&self) -> &'static [Input] {
        &[SHORT_TERM_LOANS, LONG_TERM_LOANS, BONDS_PAYABLE, TOTAL_ASSETS]
    }

    fn quotient(&self) -> Expr {
        safe_div(Self::interest_bearing_debt(), TOTAL_ASSETS.col())
    }
}
