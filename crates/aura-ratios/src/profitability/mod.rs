//! Profitability ratios - returns generated on equity and on revenue

pub mod main_net_profit;
pub mod roe;

pub use main_net_profit::MainNetProfitRatio;
pub use roe::Roe;
