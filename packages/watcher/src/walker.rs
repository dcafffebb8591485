//! Date-cutoff pagination over a query's search results.

use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::fetcher::FetchPage;
use crate::parser::parse_jobs;
use crate::types::{LocatedJob, Query};

/// Delay between consecutive page fetches
const PAGE_DELAY: Duration = Duration::from_secs(1);

/// Sanity cap on pagination. A dated search never comes close; the cutoff
/// or an empty page stops the walk long before this.
const MAX_PAGES: u32 = 100;

/// Collect every record on `query`'s results posted on `reference_date`,
/// tagged with the query's location.
///
/// The site orders results by publication date descending, so the first
/// record with a different date means no more of today's jobs follow:
/// scanning stops there and pagination ends ("cutoff hit"). An empty page
/// means the results are exhausted. If that ordering assumption is ever
/// violated upstream, the walk silently under-reports.
pub async fn walk_query(
    fetcher: &impl FetchPage,
    query: &Query,
    reference_date: &str,
) -> Result<Vec<LocatedJob>> {
    let mut todays_jobs = Vec::new();
    let mut page = 1;

    loop {
        info!(
            keyword = %query.keyword,
            location = %query.location,
            page,
            "Fetching results page"
        );
        let html = fetcher.fetch(query, page).await?;
        let jobs = parse_jobs(&html);

        if jobs.is_empty() {
            info!(location = %query.location, page, "No jobs on page, stopping");
            break;
        }

        for (i, job) in jobs.iter().enumerate() {
            debug!(
                "  {}. {} | {} | Posted: {}",
                i + 1,
                job.title,
                job.employer,
                job.date_posted
            );
        }

        let mut hit_old = false;
        for job in jobs {
            if job.date_posted == reference_date {
                todays_jobs.push(LocatedJob {
                    job,
                    search_location: query.location.clone(),
                });
            } else {
                hit_old = true;
                break;
            }
        }

        if hit_old {
            info!(location = %query.location, page, "Hit older job, stopping pagination");
            break;
        }

        if page >= MAX_PAGES {
            warn!(location = %query.location, "Page cap reached, stopping pagination");
            break;
        }

        page += 1;
        sleep(PAGE_DELAY).await;
    }

    Ok(todays_jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Serves canned HTML per page and records which pages were requested.
    struct MockFetcher {
        pages: Vec<String>,
        requested: Mutex<Vec<u32>>,
    }

    impl MockFetcher {
        fn new(pages: Vec<String>) -> Self {
            Self {
                pages,
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<u32> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FetchPage for MockFetcher {
        async fn fetch(&self, _query: &Query, page: u32) -> Result<String> {
            self.requested.lock().unwrap().push(page);
            Ok(self
                .pages
                .get((page - 1) as usize)
                .cloned()
                .unwrap_or_else(|| "<html><body></body></html>".to_string()))
        }
    }

    fn entry(title: &str, date: &str, link: &str) -> String {
        format!(
            r#"<li data-test="search-result">
                <a data-test="search-result-job-title" href="{link}">{title}</a>
                <div data-test="search-result-location"><h3>Some Trust</h3></div>
                <ul>
                    <li data-test="search-result-salary"><strong>£30,000</strong></li>
                    <li data-test="search-result-closingDate"><strong>9 March 2026</strong></li>
                    <li data-test="search-result-publicationDate"><strong>{date}</strong></li>
                </ul>
            </li>"#
        )
    }

    fn page(entries: &[String]) -> String {
        format!("<html><body><ul>{}</ul></body></html>", entries.join("\n"))
    }

    const TODAY: &str = "23 February 2026";
    const YESTERDAY: &str = "22 February 2026";

    fn query() -> Query {
        Query::new("assistant psychologist", "London")
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_on_empty_first_page() {
        let fetcher = MockFetcher::new(vec![]);
        let jobs = walk_query(&fetcher, &query(), TODAY).await.unwrap();
        assert!(jobs.is_empty());
        assert_eq!(fetcher.requested(), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_pages_then_empty_page() {
        let fetcher = MockFetcher::new(vec![
            page(&[entry("One", TODAY, "/a"), entry("Two", TODAY, "/b")]),
            page(&[entry("Three", TODAY, "/c")]),
            page(&[]),
        ]);
        let jobs = walk_query(&fetcher, &query(), TODAY).await.unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(fetcher.requested(), vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cutoff_excludes_older_record_and_rest_of_page() {
        let fetcher = MockFetcher::new(vec![page(&[
            entry("Fresh", TODAY, "/a"),
            entry("Stale", YESTERDAY, "/b"),
            entry("Also fresh but unreachable", TODAY, "/c"),
        ])]);
        let jobs = walk_query(&fetcher, &query(), TODAY).await.unwrap();

        let titles: Vec<&str> = jobs.iter().map(|j| j.job.title.as_str()).collect();
        assert_eq!(titles, vec!["Fresh"]);
        assert_eq!(fetcher.requested(), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cutoff_on_second_page_stops_pagination() {
        // 3 of today's jobs on page 1, one more on page 2 followed by an
        // older record: four results, no page 3 fetch.
        let fetcher = MockFetcher::new(vec![
            page(&[
                entry("One", TODAY, "/a"),
                entry("Two", TODAY, "/b"),
                entry("Three", TODAY, "/c"),
            ]),
            page(&[entry("Four", TODAY, "/d"), entry("Old", YESTERDAY, "/e")]),
            page(&[entry("Never reached", TODAY, "/f")]),
        ]);
        let jobs = walk_query(&fetcher, &query(), TODAY).await.unwrap();

        assert_eq!(jobs.len(), 4);
        assert_eq!(fetcher.requested(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_records_tagged_with_query_location() {
        let fetcher = MockFetcher::new(vec![page(&[entry("One", TODAY, "/a")])]);
        let jobs = walk_query(&fetcher, &query(), TODAY).await.unwrap();
        assert_eq!(jobs[0].search_location, "London");
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_failure_propagates() {
        struct FailingFetcher;

        #[async_trait]
        impl FetchPage for FailingFetcher {
            async fn fetch(&self, _query: &Query, _page: u32) -> Result<String> {
                anyhow::bail!("HTTP 503 for test")
            }
        }

        let result = walk_query(&FailingFetcher, &query(), TODAY).await;
        assert!(result.is_err());
    }
}
