use serde::{Deserialize, Serialize};

/// Origin used to resolve relative job links.
pub const SITE_ORIGIN: &str = "https://beta.jobs.nhs.uk";

/// Fixed search-results endpoint.
const SEARCH_ENDPOINT: &str = "https://beta.jobs.nhs.uk/candidate/search/results";

/// One job posting as it appears in the search results. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub employer: String,
    /// Site-formatted publication date, e.g. "23 February 2026".
    pub date_posted: String,
    pub closing: String,
    pub salary: String,
    /// Absolute detail-page URL. May carry a tracking query string.
    pub link: String,
}

/// A job record tagged with the location of the search that surfaced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedJob {
    pub job: JobRecord,
    pub search_location: String,
}

/// One keyword/location combination driving a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub keyword: String,
    pub location: String,
}

impl Query {
    pub fn new(keyword: &str, location: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            location: location.to_string(),
        }
    }

    /// Search URL for this query, sorted newest-first.
    pub fn search_url(&self) -> String {
        format!(
            "{}?keyword={}&skipPhraseSuggester=true&searchFormType=sortBy&sort=publicationDateDesc&language=en&location={}",
            SEARCH_ENDPOINT,
            plus_encode(&self.keyword),
            plus_encode(&self.location),
        )
    }
}

/// Spaces become `+`, matching the site's own search form encoding.
fn plus_encode(value: &str) -> String {
    value.replace(' ', "+")
}

/// Identity of a job link with the query string stripped, so `_cb` and other
/// tracking parameters don't create duplicate alerts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkKey(String);

impl LinkKey {
    pub fn from_link(link: &str) -> Self {
        let base = link.split('?').next().unwrap_or(link);
        Self(base.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_spaces_as_plus() {
        let query = Query::new("assistant psychologist", "London");
        assert_eq!(
            query.search_url(),
            "https://beta.jobs.nhs.uk/candidate/search/results\
             ?keyword=assistant+psychologist\
             &skipPhraseSuggester=true\
             &searchFormType=sortBy\
             &sort=publicationDateDesc\
             &language=en\
             &location=London"
        );
    }

    #[test]
    fn test_link_key_strips_query_string() {
        let with_tracking = LinkKey::from_link("https://beta.jobs.nhs.uk/candidate/jobadvert/C9123?x=1");
        let bare = LinkKey::from_link("https://beta.jobs.nhs.uk/candidate/jobadvert/C9123");
        assert_eq!(with_tracking, bare);
        assert_eq!(bare.as_str(), "https://beta.jobs.nhs.uk/candidate/jobadvert/C9123");
    }

    #[test]
    fn test_link_key_is_idempotent() {
        let once = LinkKey::from_link("https://beta.jobs.nhs.uk/candidate/jobadvert/C9123?_cb=17");
        let twice = LinkKey::from_link(once.as_str());
        assert_eq!(once, twice);
    }
}
