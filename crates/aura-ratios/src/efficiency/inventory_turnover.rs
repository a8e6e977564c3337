//! Inventory Turnover (存货周转率)

use polars::prelude::Expr;

use crate::frame::safe_div;
use crate::inputs::{INVENTORY, Input, MAIN_COST};
use crate::registry::RatioKind;
use crate::traits::Ratio;

/// Inventory Turnover = main-business cost / inventory
#[derive(Debug, Default, Clone, Copy)]
pub struct InventoryTurnover;

impl Ratio for InventoryTurnover {
    fn kind(&self) -> RatioKind {
        RatioKind::InventoryTurnover
    }

    fn inputs(&self) -> &'static [Input] {
        &[MAIN_COST, INVENTORY]
    }

    fn quotient(&self) -> Expr {
        safe_div(MAIN_COST.col(), INVENTORY.col())
    }
}
