//! Valuation Bands Module
//! Fixed binning of valuations into named bands.

use super::ViewError;
use polars::prelude::*;

/// Band edges in billions. Kept exactly as the upstream analysis defined
/// them: assignment is anchored at 1, so values below 1 or at/above 500 get
/// no band and the "500+" label is unreachable unless the edges are extended.
pub const BAND_EDGES: [f64; 9] = [0.0, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 500.0];

pub const BAND_LABELS: [&str; 8] = [
    "1-2B", "2-5B", "5-10B", "10-20B", "20-50B", "50-100B", "100-500B", "500+",
];

fn band_index(valuation: f64) -> Option<usize> {
    // Half-open [lower, upper): "1-2B" is [1, 2), ... "100-500B" is [100, 500).
    (0..BAND_LABELS.len() - 1)
        .find(|&i| valuation >= BAND_EDGES[i + 1] && valuation < BAND_EDGES[i + 2])
}

/// The band label for a single valuation, if any.
pub fn valuation_band(valuation: f64) -> Option<&'static str> {
    band_index(valuation).map(|i| BAND_LABELS[i])
}

/// Record count per valuation band, in band order.
///
/// Every label appears, zero-count bands included; unassignable valuations
/// are not counted anywhere.
pub fn band_counts(df: &DataFrame) -> Result<DataFrame, ViewError> {
    let mut counts = [0u32; BAND_LABELS.len()];
    let valuation = df.column("valuation")?.f64()?;
    for value in valuation.into_iter().flatten() {
        if let Some(index) = band_index(value) {
            counts[index] += 1;
        }
    }

    let labels: Vec<String> = BAND_LABELS.iter().map(|label| label.to_string()).collect();
    Ok(DataFrame::new(vec![
        Column::new("valuation_band".into(), labels),
        Column::new("count".into(), counts.to_vec()),
    ])?)
}

/// Band counts extended with each band's share of all banded records.
pub fn band_proportions(df: &DataFrame) -> Result<DataFrame, ViewError> {
    let mut counts = band_counts(df)?;
    let shares: Vec<f64> = {
        let count = counts.column("count")?.u32()?;
        let total: u32 = count.into_iter().flatten().sum();
        count
            .into_iter()
            .map(|value| {
                let value = value.unwrap_or(0) as f64;
                if total == 0 {
                    0.0
                } else {
                    value / total as f64
                }
            })
            .collect()
    };
    counts.with_column(Column::new("share".into(), shares))?;
    Ok(counts)
}
