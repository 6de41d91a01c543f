//! Report shell commands

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use super::Console;
use crate::config::Settings;
use crate::display::{format_category_report, format_summary};
use crate::error::{FinTrackError, FinTrackResult};
use crate::reports::SortRegistry;
use crate::services::AnalyticsService;
use crate::storage::Storage;

fn ask_period<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> FinTrackResult<(NaiveDate, NaiveDate)> {
    let from = console.ask_date("From date (YYYY-MM-DD): ")?;
    let to = console.ask_date("To date (YYYY-MM-DD): ")?;
    Ok((from, to))
}

/// `report-summary`
pub fn report_summary<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let (from, to) = ask_period(console)?;
    let summary = AnalyticsService::new(storage).summary(from, to)?;
    write!(console.out(), "{}", format_summary(&summary))?;
    Ok(())
}

/// `report-by-category`; a blank sort answer uses the session default
pub fn report_by_category<R: BufRead, W: Write>(
    storage: &Storage,
    settings: &Settings,
    registry: &SortRegistry,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let (from, to) = ask_period(console)?;

    let label = format!(
        "Sort [{}] ({}): ",
        settings.sort_strategy,
        registry.names().join(", ")
    );
    let strategy = match console.ask_optional(&label)? {
        Some(name) => registry.select(&name),
        None => settings.sort_strategy(registry),
    }
    .ok_or_else(|| FinTrackError::InvalidArgument("No sort strategies registered".into()))?;

    let rows = AnalyticsService::new(storage).category_report(from, to, strategy)?;
    write!(
        console.out(),
        "{}",
        format_category_report(&rows, strategy.name())
    )?;
    Ok(())
}
