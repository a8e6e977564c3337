#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod efficiency;
pub mod frame;
pub mod growth;
pub mod inputs;
pub mod profitability;
pub mod registry;
pub mod solvency;
pub mod source;
pub mod traits;

// Re-export registry types for convenience
pub use registry::{
    DEFAULT_SELECTED_RATIOS, RatioCategory, RatioInfo, RatioKind, Scale, available_ratios,
    get_ratio_info, ratios_by_category,
};
pub use source::{
    PrecomputedRatios, RatioSet, RatioSource, all_ratios, compute_ratios, ratio_for,
};
pub use traits::{Ratio, RatioConfig, RatioContext};
