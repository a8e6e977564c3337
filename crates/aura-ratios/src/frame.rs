//! Polars helpers shared by the ratio formulas and the trend transforms.
//!
//! Series enter as `Vec<Option<f64>>`, become Float64 columns of one frame,
//! are combined with lazy expressions, and leave again as `Vec<Option<f64>>`.

use polars::prelude::*;

/// Largest number of decimals results are rounded to. Larger requests are
/// clamped, since `10^precision` stops being finite long before `u32::MAX`.
pub const MAX_PRECISION: u32 = 15;

/// Build a frame from named, equally long series.
pub fn series_frame<'a, I>(columns: I) -> PolarsResult<DataFrame>
where
    I: IntoIterator<Item = (&'a str, &'a [Option<f64>])>,
{
    let columns = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into())
        .collect::<Vec<Column>>();
    DataFrame::new(columns)
}

/// Values of a Float64 column. Non-finite values come back as `None`, and
/// `-0.0` comes back as `0.0`.
pub fn column_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let values = df
        .column(name)?
        .as_materialized_series()
        .f64()?
        .into_iter()
        .map(|value| {
            value
                .filter(|v| v.is_finite())
                .map(|v| if v == 0.0 { 0.0 } else { v })
        })
        .collect();
    Ok(values)
}

/// `num / den`, null where either side is null or the denominator is zero.
pub fn safe_div(num: Expr, den: Expr) -> Expr {
    when(den.clone().fill_null(lit(0.0)).neq(lit(0.0)))
        .then(num / den)
        .otherwise(lit(NULL))
}

/// `|expr|`
pub fn magnitude(expr: Expr) -> Expr {
    when(expr.clone().lt(lit(0.0)))
        .then(-expr.clone())
        .otherwise(expr)
}

/// Round half away from zero, with `precision` clamped to [`MAX_PRECISION`].
pub fn rounded(expr: Expr, precision: u32) -> Expr {
    expr.round(precision.min(MAX_PRECISION))
}
