//! Primary Loader & Normalizer Module
//! Cleans the unicorn valuation table and joins the company metadata.
//!
//! The steps run strictly in order; later repairs depend on the earlier
//! normalization having happened.

use super::{loader, metadata, DataError};
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Known-bad source row: this company's investors field is garbage upstream
/// and is overwritten with the published investor list.
const LINKSURE_COMPANY: &str = "LinkSure Network";
const LINKSURE_INVESTORS: &str = "Bank of China Group Investment, China Merchants Innovation \
     Investment Management, and Hopu Fund";

/// Date formats observed in the source data, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

/// Load, normalize and join both tables into the final unicorn dataset.
pub fn load_unicorns(primary_path: &Path, metadata_path: &Path) -> Result<DataFrame, DataError> {
    let raw = loader::read_table(primary_path)?;
    let cleaned = clean_primary(raw)?;
    let metadata = metadata::load_metadata(metadata_path)?;
    let joined = join_metadata(cleaned, metadata)?;
    info!(rows = joined.height(), "normalized and joined unicorn table");
    Ok(joined)
}

/// Canonicalize a column header: trim, drop a literal " ($B)" suffix,
/// lower-case, spaces to underscores.
pub fn to_snake_case(name: &str) -> String {
    name.trim().replace(" ($B)", "").to_lowercase().replace(' ', "_")
}

/// Normalize the primary table in place: canonical headers, typed valuation
/// and join year, the categorical repair chain, and text casing.
pub fn clean_primary(mut df: DataFrame) -> Result<DataFrame, DataError> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| to_snake_case(name.as_str()))
        .collect();
    df.set_column_names(names)?;

    let valuation = parse_valuation_column(&df)?;
    df.with_column(Column::new("valuation".into(), valuation))?;

    let years = parse_join_year_column(&df)?;
    df.with_column(Column::new("date_joined".into(), years))?;

    let company = string_column(&df, "company")?;
    let mut industry = string_column(&df, "industry")?;
    let mut city = string_column(&df, "city")?;
    let country = string_column(&df, "country")?;
    let mut investors = string_column(&df, "investors")?;
    let rows = df.height();

    for i in 0..rows {
        if company[i].as_deref() == Some(LINKSURE_COMPANY) {
            investors[i] = Some(LINKSURE_INVESTORS.to_string());
        }
    }

    // Some malformed rows carry investor names in the industry column.
    for i in 0..rows {
        if investors[i].is_none() {
            investors[i] = industry[i].clone();
        }
    }

    // Shift pattern: rows whose industry/city/country columns were offset by
    // one position each inherit the right-hand neighbor's value. The first
    // rule is idempotent; running it twice (as the source did) changes
    // nothing, because a repaired industry no longer matches investors.
    for i in 0..rows {
        if industry[i].is_some() && industry[i] == investors[i] {
            industry[i] = city[i].clone();
        }
    }
    for i in 0..rows {
        if city[i].is_some() && city[i] == industry[i] {
            city[i] = country[i].clone();
        }
    }

    let industry: Vec<Option<String>> = industry
        .into_iter()
        .map(|value| value.map(|s| capitalize(&s)))
        .collect();
    let city: Vec<Option<String>> = city
        .into_iter()
        .map(|value| value.map(|s| title_case(&s)))
        .collect();
    let country: Vec<Option<String>> = country
        .into_iter()
        .map(|value| value.map(|s| title_case(&s)))
        .collect();
    let company: Vec<Option<String>> = company
        .into_iter()
        .map(|value| value.map(|s| title_case(&s)))
        .collect();

    df.with_column(Column::new("company".into(), company))?;
    df.with_column(Column::new("industry".into(), industry))?;
    df.with_column(Column::new("city".into(), city))?;
    df.with_column(Column::new("country".into(), country))?;
    df.with_column(Column::new("investors".into(), investors))?;

    debug!(rows, "cleaned primary table");
    Ok(df)
}

/// Left-join the metadata table on title-cased company name.
///
/// Every primary row survives; rows without a metadata match carry null
/// funding and founding year, and a duplicated metadata company fans its
/// primary row out once per match.
pub fn join_metadata(df: DataFrame, mut metadata: DataFrame) -> Result<DataFrame, DataError> {
    let titled: Vec<Option<String>> = metadata
        .column("company")?
        .str()?
        .into_iter()
        .map(|value| value.map(title_case))
        .collect();
    metadata.with_column(Column::new("company".into(), titled))?;

    let primary_rows = df.height();
    let joined = df
        .lazy()
        .join(
            metadata.lazy(),
            [col("company")],
            [col("company")],
            JoinArgs::new(JoinType::Left),
        )
        .collect()?;

    if joined.height() < primary_rows {
        return Err(DataError::Join(format!(
            "left join dropped primary rows: {primary_rows} in, {} out",
            joined.height()
        )));
    }
    Ok(joined)
}

fn parse_valuation_column(df: &DataFrame) -> Result<Vec<f64>, DataError> {
    let raw = df.column("valuation")?.str()?;
    let mut out = Vec::with_capacity(raw.len());
    for value in raw.into_iter() {
        let s = value.ok_or_else(|| DataError::parse("valuation", "<missing>"))?;
        out.push(parse_valuation(s).ok_or_else(|| DataError::parse("valuation", s))?);
    }
    Ok(out)
}

/// Strip one leading `$` and parse the remainder as a float.
fn parse_valuation(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let parsed: f64 = stripped.parse().ok()?;
    if parsed.is_finite() && parsed >= 0.0 {
        Some(parsed)
    } else {
        None
    }
}

fn parse_join_year_column(df: &DataFrame) -> Result<Vec<i32>, DataError> {
    let raw = df.column("date_joined")?.str()?;
    let mut out = Vec::with_capacity(raw.len());
    for value in raw.into_iter() {
        let s = value.ok_or_else(|| DataError::parse("date_joined", "<missing>"))?;
        out.push(parse_join_year(s).ok_or_else(|| DataError::parse("date_joined", s))?);
    }
    Ok(out)
}

/// Parse a calendar date and keep only the year.
fn parse_join_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .map(|date| date.year())
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, DataError> {
    Ok(df
        .column(name)?
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// First letter upper-cased, everything else lowered (pandas `str.capitalize`).
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Every word's first letter upper-cased, the rest lowered (pandas `str.title`).
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}
