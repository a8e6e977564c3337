#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod lookup;
pub mod periods;
pub mod row;
pub mod statement;

pub use catalog::{CatalogItem, ItemCategory, get_item, main_items};
pub use error::{DataError, Result};
pub use lookup::{RowLookup, find_row, find_row_any};
pub use periods::Periods;
pub use row::FinancialRow;
pub use statement::{Statement, StatementKind};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
