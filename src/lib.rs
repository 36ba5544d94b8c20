//! Unicorn Insights - unicorn company data cleaning and summary analytics
//!
//! Ingests the two unicorn CSV tables (valuations and funding/founding
//! metadata), normalizes and joins them into a single in-memory table, and
//! derives the summary views consumed by a reporting layer.

pub mod data;
pub mod stats;
pub mod views;
