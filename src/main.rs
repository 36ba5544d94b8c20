//! Unicorn Insights - unicorn company data cleaning and summary analytics
//!
//! Reference reporting consumer: loads the dataset once and prints each of
//! the summary views as a table.

use unicorn_insights::data::UnicornStore;
use unicorn_insights::stats;
use unicorn_insights::views;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    // One failure unit: any error in the pipeline or a view surfaces as a
    // single message, never a panic.
    if let Err(err) = run() {
        eprintln!("Error preparing unicorn data: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let store = UnicornStore::default();
    let unicorns = store.dataset()?;

    let top_valuation = views::top_valuation(unicorns, 5)?;
    println!("Top Unicorns by Valuation\n{top_valuation}\n");

    let bands = views::band_counts(unicorns)?;
    println!("Unicorn Count by Valuation Band\n{bands}\n");

    let shares = views::band_proportions(unicorns)?;
    println!("Valuation Band Proportions\n{shares}\n");

    let valuations = stats::column_values(unicorns, "valuation")?;
    match stats::skewness(&valuations) {
        Some(skew) => println!("Valuation skewness: {skew:.4}\n"),
        None => println!("Valuation skewness: undefined for this sample\n"),
    }

    let foundings = views::foundings_by_year(unicorns)?;
    println!("Unicorn Foundings over Time\n{foundings}\n");

    let industry_years = views::valuation_by_industry_year(unicorns)?;
    println!("Total Valuation by Industry over the Years\n{industry_years}\n");

    match stats::industry_ttest(unicorns, "Artificial intelligence", "Internet")? {
        Some(ttest) => println!(
            "Welch's t-test, Artificial intelligence vs Internet: t = {:.4}, p = {:.4}\n",
            ttest.statistic, ttest.p_value
        ),
        None => println!("Welch's t-test: not enough valuations in one of the industries\n"),
    }

    let top_roi = views::top_roi(unicorns, 5)?;
    println!("Top Unicorns by ROI\n{top_roi}\n");

    let hubs = views::city_industry_counts(unicorns)?;
    println!("City-Industry Unicorn Hubs\n{hubs}\n");

    let investors = views::top_investors(unicorns, 12)?;
    println!("Top 12 Investors");
    for entry in &investors {
        println!("{:>5}  {}", entry.count, entry.investor);
    }

    Ok(())
}
