//! Trend Views Module
//! Relational group-by aggregations over years, industries and cities.

use super::ViewError;
use polars::prelude::*;

/// Sum `value` grouped by one or two categorical keys, sorted by key.
pub fn group_by_sum(df: &DataFrame, keys: &[&str], value: &str) -> Result<DataFrame, ViewError> {
    let key_cols: Vec<Expr> = keys.iter().map(|key| col(*key)).collect();
    let by: Vec<PlSmallStr> = keys.iter().map(|key| PlSmallStr::from(*key)).collect();
    let out = df
        .clone()
        .lazy()
        .group_by(key_cols)
        .agg([col(value).sum()])
        .sort(by, SortMultipleOptions::default())
        .collect()?;
    Ok(out)
}

/// Record count grouped by one or two categorical keys, sorted by key.
pub fn group_by_count(df: &DataFrame, keys: &[&str]) -> Result<DataFrame, ViewError> {
    let key_cols: Vec<Expr> = keys.iter().map(|key| col(*key)).collect();
    let by: Vec<PlSmallStr> = keys.iter().map(|key| PlSmallStr::from(*key)).collect();
    let out = df
        .clone()
        .lazy()
        .group_by(key_cols)
        .agg([len().alias("count")])
        .sort(by, SortMultipleOptions::default())
        .collect()?;
    Ok(out)
}

/// Unicorn foundings per `year_founded`, ascending. Rows without metadata
/// (null founding year) are left out.
pub fn foundings_by_year(df: &DataFrame) -> Result<DataFrame, ViewError> {
    let out = df
        .clone()
        .lazy()
        .filter(col("year_founded").is_not_null())
        .group_by([col("year_founded")])
        .agg([len().alias("count")])
        .sort(
            vec![PlSmallStr::from("year_founded")],
            SortMultipleOptions::default(),
        )
        .collect()?;
    Ok(out)
}

/// Total valuation per (join year, industry).
pub fn valuation_by_industry_year(df: &DataFrame) -> Result<DataFrame, ViewError> {
    group_by_sum(df, &["date_joined", "industry"], "valuation")
}

/// Unicorn count per (city, industry).
pub fn city_industry_counts(df: &DataFrame) -> Result<DataFrame, ViewError> {
    group_by_count(df, &["city", "industry"])
}
