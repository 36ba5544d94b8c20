//! Statistics Calculator Module
//! Welch's t-test and distribution-shape measures over the unicorn table.

use polars::prelude::*;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("stats query failed: {0}")]
    Query(#[from] PolarsError),
}

/// Two-sample comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TTest {
    pub statistic: f64,
    pub p_value: f64,
}

/// Perform Welch's t-test (independent samples, unequal variance).
///
/// Returns `None` when either sample has fewer than two values. A zero
/// pooled standard error (no spread in either sample) yields statistic 0
/// and p-value 1.
pub fn welch_ttest(sample_a: &[f64], sample_b: &[f64]) -> Option<TTest> {
    let n1 = sample_a.len() as f64;
    let n2 = sample_b.len() as f64;

    if n1 < 2.0 || n2 < 2.0 {
        return None;
    }

    let mean1 = sample_a.iter().sum::<f64>() / n1;
    let mean2 = sample_b.iter().sum::<f64>() / n2;

    let var1 = sample_a.iter().map(|x| (x - mean1).powi(2)).sum::<f64>() / (n1 - 1.0);
    let var2 = sample_b.iter().map(|x| (x - mean2).powi(2)).sum::<f64>() / (n2 - 1.0);

    let se = (var1 / n1 + var2 / n2).sqrt();
    if se == 0.0 {
        return Some(TTest {
            statistic: 0.0,
            p_value: 1.0,
        });
    }

    let statistic = (mean1 - mean2) / se;

    // Welch-Satterthwaite degrees of freedom
    let df_num = (var1 / n1 + var2 / n2).powi(2);
    let df_denom = (var1 / n1).powi(2) / (n1 - 1.0) + (var2 / n2).powi(2) / (n2 - 1.0);
    let df = df_num / df_denom;

    // Two-tailed p-value using the t-distribution
    let dist = StudentsT::new(0.0, 1.0, df).ok()?;
    let p_value = 2.0 * (1.0 - dist.cdf(statistic.abs()));
    Some(TTest { statistic, p_value })
}

/// Fisher-Pearson skewness (third standardized moment, population form,
/// matching `scipy.stats.skew` with its default bias).
///
/// Returns `None` for an empty sample or one with zero variance.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }
    let n = n as f64;
    let mean = values.iter().sum::<f64>() / n;
    let m2 = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let m3 = values.iter().map(|x| (x - mean).powi(3)).sum::<f64>() / n;
    if m2 == 0.0 {
        return None;
    }
    Some(m3 / m2.powf(1.5))
}

/// Non-null values of a numeric column.
pub fn column_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, StatsError> {
    Ok(df.column(column)?.f64()?.into_iter().flatten().collect())
}

/// The valuation sample for a single industry.
pub fn industry_valuations(df: &DataFrame, industry: &str) -> Result<Vec<f64>, StatsError> {
    let filtered = df
        .clone()
        .lazy()
        .filter(col("industry").eq(lit(industry)))
        .select([col("valuation")])
        .collect()?;
    Ok(filtered
        .column("valuation")?
        .f64()?
        .into_iter()
        .flatten()
        .collect())
}

/// Welch's t-test between the valuation distributions of two industries.
///
/// `None` when either industry has fewer than two valuations.
pub fn industry_ttest(
    df: &DataFrame,
    industry_a: &str,
    industry_b: &str,
) -> Result<Option<TTest>, StatsError> {
    let a = industry_valuations(df, industry_a)?;
    let b = industry_valuations(df, industry_b)?;
    Ok(welch_ttest(&a, &b))
}
