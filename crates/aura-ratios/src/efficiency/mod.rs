//! Efficiency ratios - how hard the company's assets work
//!
//! Turnover ratios divide main-business revenue (or cost) by a period-end
//! balance. They are plain multiples, not percentages.

pub mod asset_turnover;
pub mod inventory_turnover;
pub mod receivable_turnover;

pub use asset_turnover::AssetTurnover;
pub use inventory_turnover::InventoryTurnover;
pub use receivable_turnover::ReceivableTurnover;
