//! Growth ratios - period-over-period change in balance-sheet strength

pub mod capital_accumulation;

pub use capital_accumulation::CapitalAccumulationRatio;
