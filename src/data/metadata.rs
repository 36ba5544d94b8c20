//! Company Metadata Loader Module
//! Reads the funding/founding metadata table and normalizes its fields.

use super::{loader, DataError};
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

/// Sentinel used by the source table for companies with undisclosed funding.
const UNKNOWN_FUNDING: &str = "Unknown";

/// Load the company metadata table: `company`, `funding`, `year_founded`.
///
/// Funding is parsed from currency-and-suffix strings ("$1.2B", "$500M");
/// the `Unknown` sentinel becomes null. Company names are left in their raw
/// casing here; the join side title-cases them.
pub fn load_metadata(path: &Path) -> Result<DataFrame, DataError> {
    let raw = loader::read_table(path)?;
    metadata_from_table(raw)
}

/// Select and normalize the three metadata columns from a raw table.
///
/// Requires `Company`, `Funding` and `Year Founded`; any other columns are
/// ignored.
pub fn metadata_from_table(raw: DataFrame) -> Result<DataFrame, DataError> {
    let company: Vec<Option<String>> = raw
        .column("Company")?
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect();

    let mut funding: Vec<Option<f64>> = Vec::with_capacity(raw.height());
    for value in raw.column("Funding")?.str()?.into_iter() {
        funding.push(match value {
            Some(s) => parse_funding(s)?,
            None => None,
        });
    }

    let mut year_founded: Vec<Option<i32>> = Vec::with_capacity(raw.height());
    for value in raw.column("Year Founded")?.str()?.into_iter() {
        year_founded.push(match value {
            Some(s) => Some(
                s.trim()
                    .parse::<i32>()
                    .map_err(|_| DataError::parse("year_founded", s))?,
            ),
            None => None,
        });
    }

    let out = DataFrame::new(vec![
        Column::new("company".into(), company),
        Column::new("funding".into(), funding),
        Column::new("year_founded".into(), year_founded),
    ])?;
    debug!(rows = out.height(), "loaded company metadata");
    Ok(out)
}

/// Parse a funding string into billions-or-millions-agnostic units.
///
/// The source data never distinguishes the `B`/`M` suffix when it matters:
/// both are stripped, so "$500M" and "$500B" parse to the same 500.0. The
/// upstream data carries this ambiguity and the scale must not be inferred
/// here.
fn parse_funding(raw: &str) -> Result<Option<f64>, DataError> {
    let trimmed = raw.trim();
    if trimmed == UNKNOWN_FUNDING {
        return Ok(None);
    }

    let stripped = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let stripped = stripped
        .strip_suffix('B')
        .or_else(|| stripped.strip_suffix('M'))
        .unwrap_or(stripped);

    stripped
        .parse::<f64>()
        .map(Some)
        .map_err(|_| DataError::parse("funding", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn funding_parses_currency_and_suffix() {
        assert_eq!(parse_funding("$1.5B").unwrap(), Some(1.5));
        assert_eq!(parse_funding("$500M").unwrap(), Some(500.0));
        assert_eq!(parse_funding("$2B").unwrap(), Some(2.0));
        assert_eq!(parse_funding("75").unwrap(), Some(75.0));
    }

    #[test]
    fn funding_suffix_scale_is_not_applied() {
        // "500M" and "500B" collapse to the same value; the source is lossy.
        assert_eq!(
            parse_funding("$500M").unwrap(),
            parse_funding("$500B").unwrap()
        );
    }

    #[test]
    fn unknown_funding_is_null() {
        assert_eq!(parse_funding("Unknown").unwrap(), None);
    }

    #[test]
    fn malformed_funding_is_a_parse_error() {
        let err = parse_funding("$12x").unwrap_err();
        match err {
            DataError::Parse { field, value } => {
                assert_eq!(field, "funding");
                assert_eq!(value, "$12x");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
        assert!(parse_funding("garbage").is_err());
    }

    #[test]
    fn funding_parse_is_idempotent_on_parsed_output() {
        let once = parse_funding("$1.5B").unwrap().unwrap();
        assert_eq!(parse_funding(&once.to_string()).unwrap(), Some(once));
    }

    #[test]
    fn selects_and_renames_the_three_columns() {
        let raw = df!(
            "Company" => ["Acme", "Globex"],
            "Funding" => ["$2B", "Unknown"],
            "Year Founded" => ["2015", "1999"],
            "Country" => ["USA", "USA"]
        )
        .unwrap();

        let meta = metadata_from_table(raw).unwrap();
        let names: Vec<String> = meta
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, ["company", "funding", "year_founded"]);

        let funding = meta.column("funding").unwrap().f64().unwrap();
        assert_eq!(funding.get(0), Some(2.0));
        assert_eq!(funding.get(1), None);

        let years = meta.column("year_founded").unwrap().i32().unwrap();
        assert_eq!(years.get(0), Some(2015));
        assert_eq!(years.get(1), Some(1999));
    }

    #[test]
    fn missing_required_column_fails() {
        let raw = df!("Company" => ["Acme"], "Funding" => ["$2B"]).unwrap();
        assert!(metadata_from_table(raw).is_err());
    }
}
