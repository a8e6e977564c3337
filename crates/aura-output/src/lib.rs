#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod export;
pub mod metric;
pub mod report;

pub use config::EngineConfig;
pub use export::{ExportError, ExportFormat, Exporter};
pub use metric::{MetricKey, Unit, resolve_metrics};
pub use report::{MetricSeries, TrendReport, TrendRequest, build_report};
