//! Investor Tally Module
//! Flattens the comma-separated investor lists and counts appearances.

use super::ViewError;
use polars::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// One investor and the number of portfolio unicorns they appear on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvestorCount {
    pub investor: String,
    pub count: u32,
}

/// Count how many records each distinct investor appears on, descending.
///
/// Each record's `investors` string is split on `", "` and every token is
/// trimmed; empty tokens are dropped. Ties are broken alphabetically so the
/// ordering is deterministic.
pub fn investor_tally(df: &DataFrame) -> Result<Vec<InvestorCount>, ViewError> {
    let investors = df.column("investors")?.str()?;

    let mut counts: HashMap<String, u32> = HashMap::new();
    for value in investors.into_iter().flatten() {
        for token in value.split(", ") {
            let name = token.trim();
            if !name.is_empty() {
                *counts.entry(name.to_string()).or_insert(0) += 1;
            }
        }
    }

    let mut tally: Vec<InvestorCount> = counts
        .into_iter()
        .map(|(investor, count)| InvestorCount { investor, count })
        .collect();
    tally.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.investor.cmp(&b.investor)));
    Ok(tally)
}

/// The `n` most frequent investors.
pub fn top_investors(df: &DataFrame, n: usize) -> Result<Vec<InvestorCount>, ViewError> {
    let mut tally = investor_tally(df)?;
    tally.truncate(n);
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> DataFrame {
        DataFrame::new(vec![Column::new(
            "investors".into(),
            vec![
                Some("Sequoia Capital, Tiger Global".to_string()),
                Some("Sequoia Capital,  Accel ".to_string()),
                None,
                Some("Accel".to_string()),
            ],
        )])
        .unwrap()
    }

    #[test]
    fn tally_splits_trims_and_counts() {
        let tally = investor_tally(&fixture()).unwrap();
        assert_eq!(
            tally,
            [
                InvestorCount {
                    investor: "Accel".to_string(),
                    count: 2
                },
                InvestorCount {
                    investor: "Sequoia Capital".to_string(),
                    count: 2
                },
                InvestorCount {
                    investor: "Tiger Global".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn top_investors_truncates() {
        let top = top_investors(&fixture(), 1).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].investor, "Accel");
    }
}
