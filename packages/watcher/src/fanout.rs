//! Keyword×location fan-out and cross-query deduplication.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::info;

use crate::fetcher::FetchPage;
use crate::types::{LocatedJob, Query};
use crate::walker::walk_query;

/// Delay between consecutive queries
const QUERY_DELAY: Duration = Duration::from_secs(2);

/// One query per keyword/location combination, keywords outermost.
pub fn build_queries(keywords: &[String], locations: &[String]) -> Vec<Query> {
    let mut queries = Vec::new();
    for keyword in keywords {
        for location in locations {
            queries.push(Query::new(keyword, location));
        }
    }
    queries
}

/// Walk every query strictly in order, deduplicating across queries by link.
///
/// The same posting can surface under several keywords or locations; the
/// first occurrence wins and later duplicates are dropped, so the result
/// preserves first-seen order. A fetch failure anywhere aborts the pass.
pub async fn collect_all(
    fetcher: &impl FetchPage,
    queries: &[Query],
    reference_date: &str,
) -> Result<Vec<LocatedJob>> {
    let mut all_jobs = Vec::new();
    let mut seen_links: HashSet<String> = HashSet::new();

    for (i, query) in queries.iter().enumerate() {
        if i > 0 {
            sleep(QUERY_DELAY).await;
        }

        let jobs = walk_query(fetcher, query, reference_date).await?;
        for located in jobs {
            if seen_links.insert(located.job.link.clone()) {
                all_jobs.push(located);
            }
        }
    }

    info!(
        queries = queries.len(),
        total = all_jobs.len(),
        "Fan-out complete"
    );
    Ok(all_jobs)
}
