#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod mode;
pub mod transform;

pub use config::{ConfigError, TrendConfig};
pub use mode::TrendMode;
pub use transform::{
    AnomalyPoint, TransformedSeries, flag_anomalies, percent_change, percent_changes, transform,
};
