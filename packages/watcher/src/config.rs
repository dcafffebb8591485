use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Default watch list, used when the corresponding env vars are not set.
const DEFAULT_KEYWORDS: &[&str] = &["assistant psychologist", "research assistant"];
const DEFAULT_LOCATIONS: &[&str] = &["London", "Surrey", "Sheffield"];
const DEFAULT_TARGET_TITLES: &[&str] = &["assistant psychologist", "research assistant"];
const DEFAULT_TARGET_EMPLOYERS: &[&str] = &["south west london and st georges mental", "sw17 0yf"];

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    pub chat_id: String,
    pub admin_chat_id: String,
    pub search_keywords: Vec<String>,
    pub search_locations: Vec<String>,
    /// A job matches if its title contains any of these (case-insensitive).
    pub target_titles: Vec<String>,
    /// A job also matches if its employer field contains any of these.
    pub target_employers: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            telegram_token: env::var("TELEGRAM_TOKEN")
                .context("TELEGRAM_TOKEN must be set")?,
            chat_id: env::var("TELEGRAM_CHAT_ID")
                .context("TELEGRAM_CHAT_ID must be set")?,
            admin_chat_id: env::var("ADMIN_CHAT_ID")
                .context("ADMIN_CHAT_ID must be set")?,
            search_keywords: list_var("SEARCH_KEYWORDS", DEFAULT_KEYWORDS),
            search_locations: list_var("SEARCH_LOCATIONS", DEFAULT_LOCATIONS),
            target_titles: list_var("TARGET_TITLES", DEFAULT_TARGET_TITLES),
            target_employers: list_var("TARGET_EMPLOYERS", DEFAULT_TARGET_EMPLOYERS),
        })
    }
}

/// Comma-separated list from the environment, falling back to `default`.
fn list_var(name: &str, default: &[&str]) -> Vec<String> {
    match env::var(name) {
        Ok(raw) => split_list(&raw),
        Err(_) => default.iter().map(|s| s.to_string()).collect(),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
