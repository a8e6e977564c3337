#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use aura_data as data;
pub use aura_output as output;
pub use aura_ratios as ratios;
pub use aura_trend as trend;

// Re-export the types most callers need
pub use aura_data::{FinancialRow, Periods, Statement, StatementKind};
pub use aura_output::{EngineConfig, TrendReport, TrendRequest, build_report};
pub use aura_ratios::{RatioKind, RatioSource, compute_ratios};
pub use aura_trend::{TrendMode, transform};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
