//! Views module - summary views over the normalized unicorn table
//!
//! Every view is a pure function of the joined dataset; nothing here mutates
//! or re-reads it.

mod bands;
mod investors;
mod rankings;
mod trends;

pub use bands::{band_counts, band_proportions, valuation_band, BAND_EDGES, BAND_LABELS};
pub use investors::{investor_tally, top_investors, InvestorCount};
pub use rankings::{top_n, top_roi, top_valuation, with_roi};
pub use trends::{
    city_industry_counts, foundings_by_year, group_by_count, group_by_sum,
    valuation_by_industry_year,
};

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("view query failed: {0}")]
    Query(#[from] PolarsError),
}
