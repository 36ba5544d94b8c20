//! Ranking Views Module
//! Top-N selections and the ROI derivation.

use super::ViewError;
use polars::prelude::*;

/// The records with the `n` largest values of `field`.
///
/// Stable descending sort: ties keep their original row order. Null values
/// never rank, so the result may hold fewer than `n` rows.
pub fn top_n(df: &DataFrame, field: &str, n: usize) -> Result<DataFrame, ViewError> {
    let out = df
        .clone()
        .lazy()
        .filter(col(field).is_not_null())
        .sort(
            vec![PlSmallStr::from(field)],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .limit(n as IdxSize)
        .collect()?;
    Ok(out)
}

/// Append `roi = valuation / funding`.
///
/// ROI is null when funding is null or zero; a division by zero must never
/// surface as infinity.
pub fn with_roi(df: &DataFrame) -> Result<DataFrame, ViewError> {
    let roi: Vec<Option<f64>> = {
        let valuation = df.column("valuation")?.f64()?;
        let funding = df.column("funding")?.f64()?;
        valuation
            .into_iter()
            .zip(funding.into_iter())
            .map(|(valuation, funding)| match (valuation, funding) {
                (Some(v), Some(f)) if f != 0.0 => Some(v / f),
                _ => None,
            })
            .collect()
    };

    let mut out = df.clone();
    out.with_column(Column::new("roi".into(), roi))?;
    Ok(out)
}

/// Top `n` companies by valuation, as a `company`/`valuation` table.
pub fn top_valuation(df: &DataFrame, n: usize) -> Result<DataFrame, ViewError> {
    Ok(top_n(df, "valuation", n)?.select(["company", "valuation"])?)
}

/// Top `n` companies by ROI, as a `company`/`roi` table.
pub fn top_roi(df: &DataFrame, n: usize) -> Result<DataFrame, ViewError> {
    Ok(top_n(&with_roi(df)?, "roi", n)?.select(["company", "roi"])?)
}
