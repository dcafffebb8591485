//! Alert criteria matching.

use crate::types::JobRecord;

/// Title/employer substrings that qualify a job for an alert.
#[derive(Debug, Clone)]
pub struct MatchCriteria {
    target_titles: Vec<String>,
    target_employers: Vec<String>,
}

impl MatchCriteria {
    /// Phrases are stored lowercased; callers can pass either case.
    pub fn new(target_titles: Vec<String>, target_employers: Vec<String>) -> Self {
        Self {
            target_titles: lowercase_all(target_titles),
            target_employers: lowercase_all(target_employers),
        }
    }

    /// True if the lowercased title contains any target title, or the
    /// lowercased employer contains any target employer.
    pub fn is_match(&self, job: &JobRecord) -> bool {
        let title = job.title.to_lowercase();
        let employer = job.employer.to_lowercase();

        self.target_titles.iter().any(|t| title.contains(t))
            || self.target_employers.iter().any(|t| employer.contains(t))
    }
}

fn lowercase_all(phrases: Vec<String>) -> Vec<String> {
    phrases.into_iter().map(|p| p.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria() -> MatchCriteria {
        MatchCriteria::new(
            vec![
                "assistant psychologist".to_string(),
                "research assistant".to_string(),
            ],
            vec![
                "south west london and st georges mental".to_string(),
                "sw17 0yf".to_string(),
            ],
        )
    }

    fn job(title: &str, employer: &str) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            employer: employer.to_string(),
            date_posted: "23 February 2026".to_string(),
            closing: "9 March 2026".to_string(),
            salary: "£30,000".to_string(),
            link: "https://beta.jobs.nhs.uk/candidate/jobadvert/C9123".to_string(),
        }
    }

    #[test]
    fn test_title_substring_matches() {
        assert!(criteria().is_match(&job("Band 5 Assistant Psychologist - CAMHS", "Some Trust")));
    }

    #[test]
    fn test_title_without_target_phrase_does_not_match() {
        assert!(!criteria().is_match(&job("Clinical Psychologist", "Some Trust")));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(criteria().is_match(&job("ASSISTANT PSYCHOLOGIST", "Some Trust")));
    }

    #[test]
    fn test_employer_substring_matches() {
        assert!(criteria().is_match(&job(
            "Peer Support Worker",
            "South West London and St Georges Mental Health NHS Trust"
        )));
    }

    #[test]
    fn test_employer_postcode_matches() {
        assert!(criteria().is_match(&job("Peer Support Worker", "Some Trust London SW17 0YF")));
    }

    #[test]
    fn test_different_postcode_does_not_match() {
        assert!(!criteria().is_match(&job("Peer Support Worker", "Some Trust London SW17 1AA")));
    }
}
