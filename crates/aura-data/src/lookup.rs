//! Line-item lookup by label.
//!
//! Rows are matched by free-text label: an exact match wins, otherwise the
//! first row whose label contains the requested name. There is no case or
//! whitespace normalization and no fuzzy matching.

use std::fmt;

use crate::row::FinancialRow;
use crate::statement::Statement;

/// Find the row for `name`: first exact match on `item`, else first row whose
/// `item` contains `name`.
///
/// Rows with an empty label never match by containment, and an empty `name`
/// never matches anything. Plain substring semantics would differ here:
/// every label contains `""`, so an empty name would pick the first row with
/// a non-empty label.
pub fn find_row<'a>(rows: &'a [FinancialRow], name: &str) -> Option<&'a FinancialRow> {
    if name.is_empty() {
        return None;
    }
    rows.iter()
        .find(|r| r.item == name)
        .or_else(|| rows.iter().find(|r| contains(r, name)))
}

/// Find a row using an ordered list of label variants.
///
/// Pass one returns the first exact match trying each candidate in order; pass
/// two does the same with containment. An exact match on a later candidate
/// therefore beats a containment match on an earlier one.
pub fn find_row_any<'a>(rows: &'a [FinancialRow], candidates: &[&str]) -> Option<&'a FinancialRow> {
    let names = || candidates.iter().filter(|c| !c.is_empty());

    names()
        .find_map(|name| rows.iter().find(|r| r.item == *name))
        .or_else(|| names().find_map(|name| rows.iter().find(|r| contains(r, name))))
}

fn contains(row: &FinancialRow, name: &str) -> bool {
    !row.item.is_empty() && row.item.contains(name)
}

/// A row lookup bound to one statement's rows.
pub trait RowLookup: fmt::Debug {
    /// The rows searched by this lookup.
    fn rows(&self) -> &[FinancialRow];

    /// See [`find_row`].
    fn find(&self, name: &str) -> Option<&FinancialRow> {
        find_row(self.rows(), name)
    }

    /// See [`find_row_any`].
    fn find_any(&self, candidates: &[&str]) -> Option<&FinancialRow> {
        find_row_any(self.rows(), candidates)
    }
}

impl RowLookup for Vec<FinancialRow> {
    fn rows(&self) -> &[FinancialRow] {
        self
    }
}

impl RowLookup for Statement {
    fn rows(&self) -> &[FinancialRow] {
        &self.rows
    }
}
