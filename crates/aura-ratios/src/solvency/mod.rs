//! Solvency ratios - the company's ability to meet its obligations
//!
//! Debt ratio and interest-bearing debt ratio measure leverage against total
//! assets; current and quick ratios measure short-term liquidity.

pub mod current_ratio;
pub mod debt_ratio;
pub mod interest_debt;
pub mod quick_ratio;

pub use current_ratio::CurrentRatio;
pub use debt_ratio::DebtRatio;
pub use interest_debt::InterestDebtRatio;
pub use quick_ratio::QuickRatio;
