//! One full scrape → match → notify pass.

use anyhow::Result;
use chrono::Local;
use tracing::info;

use crate::fanout::collect_all;
use crate::fetcher::FetchPage;
use crate::matcher::MatchCriteria;
use crate::notifier::{Notifier, SendText};
use crate::types::Query;

/// Format of the site's publication dates, e.g. "23 February 2026".
const REFERENCE_DATE_FORMAT: &str = "%-d %B %Y";

/// Today's date in the site's publication-date format.
///
/// Record dates are compared against this by exact string equality, so the
/// day is unpadded to line up with the site's own formatting.
pub fn reference_date_string() -> String {
    Local::now().format(REFERENCE_DATE_FORMAT).to_string()
}

/// Run one complete pipeline pass. A fetch failure aborts the pass; the
/// caller's schedule loop starts fresh next cycle.
pub async fn run_once<M: SendText>(
    fetcher: &impl FetchPage,
    queries: &[Query],
    criteria: &MatchCriteria,
    notifier: &mut Notifier<M>,
) -> Result<()> {
    let today = reference_date_string();

    info!(
        reference_date = %today,
        queries = queries.len(),
        "Checking NHS Jobs"
    );

    let todays_jobs = collect_all(fetcher, queries, &today).await?;
    info!(count = todays_jobs.len(), "Jobs posted today");

    let matched: Vec<_> = todays_jobs
        .into_iter()
        .filter(|located| criteria.is_match(&located.job))
        .collect();
    info!(count = matched.len(), "Matched jobs to alert");

    let alerted = notifier.process_and_alert(&matched).await;
    info!(count = alerted, "Run complete");

    Ok(())
}
