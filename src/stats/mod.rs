//! Statistics module - distribution comparison and shape measures

mod calculator;

pub use calculator::{
    column_values, industry_ttest, industry_valuations, skewness, welch_ttest, StatsError, TTest,
};
