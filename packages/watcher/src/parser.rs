//! Extracts structured job records from a search results document.
//!
//! Result entries are located by the site's `data-test` markers. The markers
//! are the external contract with the site; if they disappear in a redesign,
//! every page parses as empty rather than erroring.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::types::{JobRecord, SITE_ORIGIN};

/// Placeholder for sub-fields missing from a result entry
const UNKNOWN: &str = "Unknown";

/// Parse every result entry in `html`, in document order.
///
/// Entries without a title element are skipped silently. A document with no
/// entries yields an empty Vec, not an error.
pub fn parse_jobs(html: &str) -> Vec<JobRecord> {
    let document = Html::parse_document(html);

    let entry_selector = match Selector::parse(r#"li[data-test="search-result"]"#) {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    document
        .select(&entry_selector)
        .filter_map(parse_entry)
        .collect()
}

fn parse_entry(entry: ElementRef<'_>) -> Option<JobRecord> {
    let title_el = select_one(entry, r#"a[data-test="search-result-job-title"]"#)?;
    let title = joined_text(title_el);
    let link = resolve_link(title_el.value().attr("href").unwrap_or(""));

    let employer = select_one(entry, r#"div[data-test="search-result-location"] h3"#)
        .map(joined_text)
        .unwrap_or_else(|| UNKNOWN.to_string());

    let date_posted = strong_text(entry, "publicationDate");
    let closing = strong_text(entry, "closingDate");
    let salary = strong_text(entry, "salary");

    Some(JobRecord {
        title,
        employer,
        date_posted,
        closing,
        salary,
        link,
    })
}

fn select_one<'a>(entry: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    entry.select(&selector).next()
}

/// The `<strong>` value inside the entry's `search-result-<field>` list item.
fn strong_text(entry: ElementRef<'_>, field: &str) -> String {
    let selector = format!(r#"li[data-test="search-result-{}"] strong"#, field);
    select_one(entry, &selector)
        .map(joined_text)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Collect an element's text nodes, trimmed and joined with single spaces.
fn joined_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a possibly-relative href against the site origin.
fn resolve_link(href: &str) -> String {
    match Url::parse(SITE_ORIGIN).ok().and_then(|base| base.join(href).ok()) {
        Some(url) => url.to_string(),
        None => href.to_string(),
    }
}
