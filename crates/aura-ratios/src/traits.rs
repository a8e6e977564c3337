//! The `Ratio` trait and the context formulas are evaluated in.

use std::fmt;

use aura_data::row::aligned_values;
use aura_data::{Periods, RowLookup, StatementKind};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::frame::{column_values, rounded, series_frame};
use crate::inputs::Input;
use crate::registry::RatioKind;

/// Configuration for client-side ratio computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatioConfig {
    /// Decimal places results are rounded to (default: 2, at most
    /// [`MAX_PRECISION`](crate::frame::MAX_PRECISION))
    pub precision: u32,
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

/// Everything a formula can read: both statements, the period axis, and config.
pub struct RatioContext<'a> {
    balance_sheet: &'a dyn RowLookup,
    income_statement: &'a dyn RowLookup,
    periods: &'a Periods,
    config: &'a RatioConfig,
}

impl fmt::Debug for RatioContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatioContext")
            .field("balance_sheet_rows", &self.balance_sheet.rows().len())
            .field("income_statement_rows", &self.income_statement.rows().len())
            .field("periods", self.periods)
            .field("config", self.config)
            .finish()
    }
}

impl<'a> RatioContext<'a> {
    /// Bind the two statement lookups to a period axis.
    pub fn new(
        balance_sheet: &'a dyn RowLookup,
        income_statement: &'a dyn RowLookup,
        periods: &'a Periods,
        config: &'a RatioConfig,
    ) -> Self {
        Self {
            balance_sheet,
            income_statement,
            periods,
            config,
        }
    }

    /// The period axis.
    pub const fn periods(&self) -> &Periods {
        self.periods
    }

    /// Period-aligned values of an input; all `None` when its row is missing.
    pub fn values(&self, input: &Input) -> Vec<Option<f64>> {
        let row = match input.statement {
            StatementKind::BalanceSheet => self.balance_sheet.find_any(input.candidates),
            StatementKind::IncomeStatement => self.income_statement.find_any(input.candidates),
            StatementKind::CashFlow => None,
        };
        if row.is_none() {
            tracing::trace!(input = input.name, "input row not found");
        }
        aligned_values(row, self.periods)
    }

    /// Frame with one Float64 column per distinct input, named by [`Input::name`].
    pub fn input_frame<'i, I>(&self, inputs: I) -> PolarsResult<DataFrame>
    where
        I: IntoIterator<Item = &'i Input>,
    {
        let mut columns: Vec<(&str, Vec<Option<f64>>)> = Vec::new();
        for input in inputs {
            if !columns.iter().any(|(name, _)| *name == input.name) {
                columns.push((input.name, self.values(input)));
            }
        }
        series_frame(columns.iter().map(|(name, values)| (*name, values.as_slice())))
    }

    /// Scale a quotient expression and round it to the configured precision.
    /// The output column is named by the ratio key.
    pub fn finish(&self, kind: RatioKind, quotient: Expr) -> Expr {
        rounded(quotient * lit(kind.scale().factor()), self.config.precision).alias(kind.key())
    }

    /// Evaluate several ratios over one shared input frame.
    pub fn evaluate(
        &self,
        ratios: &[Box<dyn Ratio>],
    ) -> PolarsResult<Vec<(RatioKind, Vec<Option<f64>>)>> {
        let exprs: Vec<Expr> = ratios
            .iter()
            .map(|ratio| self.finish(ratio.kind(), ratio.quotient()))
            .collect();
        let out = self
            .input_frame(ratios.iter().flat_map(|ratio| ratio.inputs()))?
            .lazy()
            .select(exprs)
            .collect()?;
        ratios
            .iter()
            .map(|ratio| Ok((ratio.kind(), column_values(&out, ratio.name())?)))
            .collect()
    }
}

/// A financial ratio computed per period from statement rows.
pub trait Ratio: fmt::Debug + Send + Sync {
    /// Which ratio this is.
    fn kind(&self) -> RatioKind;

    /// Stable key of the ratio.
    fn name(&self) -> &'static str {
        self.kind().key()
    }

    /// Statement inputs the formula reads.
    fn inputs(&self) -> &'static [Input];

    /// Unscaled quotient over the input columns. Null where an input is
    /// missing or a denominator is zero.
    fn quotient(&self) -> Expr;

    /// One value per period in `ctx.periods()`, scaled and rounded.
    fn compute(&self, ctx: &RatioContext<'_>) -> PolarsResult<Vec<Option<f64>>> {
        let out = ctx
            .input_frame(self.inputs())?
            .lazy()
            .select([ctx.finish(self.kind(), self.quotient())])
            .collect()?;
        column_values(&out, self.name())
    }
}
