//! Alert dedup gate and message relay.
//!
//! "Alerts" go to every recipient; "logs" go to the admin recipient only.
//! Delivery failures are absorbed — notification loss never aborts a run.

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::types::{LinkKey, LocatedJob};

/// Trait for sending a text message to one recipient (to allow mocking)
#[async_trait]
pub trait SendText: Send + Sync {
    async fn send_text(&self, chat_id: &str, text: &str) -> Result<()>;
}

#[async_trait]
impl SendText for telegram::TelegramService {
    async fn send_text(&self, chat_id: &str, text: &str) -> Result<()> {
        self.send_message(chat_id, text)
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!(e))
    }
}

/// Relays alerts for matched jobs and tracks which links were already sent.
///
/// The seen set lives for the process and survives pipeline passes, so a
/// posting alerts at most once per process lifetime. It is not persisted;
/// alerts can repeat after a restart.
pub struct Notifier<M> {
    messenger: M,
    chat_id: String,
    admin_chat_id: String,
    seen: HashSet<LinkKey>,
}

impl<M: SendText> Notifier<M> {
    pub fn new(messenger: M, chat_id: String, admin_chat_id: String) -> Self {
        Self {
            messenger,
            chat_id,
            admin_chat_id,
            seen: HashSet::new(),
        }
    }

    /// Alert every matched job whose link has not been alerted before.
    /// Returns the number of new alerts sent.
    pub async fn process_and_alert(&mut self, matched: &[LocatedJob]) -> usize {
        let new_matches: Vec<&LocatedJob> = matched
            .iter()
            .filter(|m| !self.seen.contains(&LinkKey::from_link(&m.job.link)))
            .collect();

        if new_matches.is_empty() {
            info!("No matching jobs today");
            self.log("✅ NHS checker ran - no matching jobs today.").await;
            return 0;
        }

        self.alert(&format!(
            "🔍 Found {} job alert(s) on NHS Jobs today!",
            new_matches.len()
        ))
        .await;

        for located in &new_matches {
            info!(
                title = %located.job.title,
                employer = %located.job.employer,
                search_location = %located.search_location,
                "Sending job alert"
            );
            self.alert(&format_alert(located)).await;
            self.seen.insert(LinkKey::from_link(&located.job.link));
        }

        new_matches.len()
    }

    /// Send `text` to every recipient. Failures are logged per recipient;
    /// the remaining recipients are still attempted.
    async fn alert(&self, text: &str) {
        for chat_id in [&self.chat_id, &self.admin_chat_id] {
            if let Err(e) = self.messenger.send_text(chat_id, text).await {
                warn!(chat_id = %chat_id, error = %e, "Failed to deliver alert");
            }
        }
    }

    /// Send `text` to the admin recipient only.
    async fn log(&self, text: &str) {
        if let Err(e) = self.messenger.send_text(&self.admin_chat_id, text).await {
            warn!(chat_id = %self.admin_chat_id, error = %e, "Failed to deliver log message");
        }
    }
}

/// Human-readable alert body for one job.
fn format_alert(located: &LocatedJob) -> String {
    format!(
        "🚨 NHS Job Alert!\n\n{}\n📍 Search area: {}\n🏥 {}\n💰 {}\n📅 Closes: {}\n🔗 {}",
        located.job.title,
        located.search_location,
        located.job.employer,
        located.job.salary,
        located.job.closing,
        located.job.link,
    )
}
