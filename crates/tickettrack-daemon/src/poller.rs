//! Periodic search against the tracker

use tickettrack_core::models::{Issue, PollSettings};
use tickettrack_jira::{extract_matches, JiraClient};
use tokio::sync::mpsc;

/// Searches on a fixed period and forwards new issues to the consumer.
///
/// Nothing is remembered between searches. An issue counts as new when it
/// was created less than one interval ago, so the search window and the
/// sleep between searches are the same duration.
pub struct Poller {
    client: JiraClient,
    settings: PollSettings,
}

impl Poller {
    pub fn new(client: JiraClient, settings: PollSettings) -> Self {
        Self { client, settings }
    }

    /// Run one search and return the matching issues, oldest first.
    /// A failed search yields no issues.
    pub async fn poll_once(&self) -> Vec<Issue> {
        let Some(body) = self
            .client
            .search(
                self.settings.field,
                &self.settings.user,
                self.settings.max_results,
            )
            .await
        else {
            return Vec::new();
        };

        extract_matches(&body, &self.settings.project, self.settings.interval)
    }

    /// Sleep, search, hand every match to `tx`, repeat.
    ///
    /// Each send waits for the consumer, so a slow handler delays the next
    /// search. Returns only once the receiving side has been dropped.
    pub async fn run(self, tx: mpsc::Sender<Issue>) {
        loop {
            tokio::time::sleep(self.settings.interval).await;

            let issues = self.poll_once().await;
            tracing::debug!(
                "Search for {} {} returned {} new issue(s)",
                self.settings.field,
                self.settings.user,
                issues.len()
            );

            for issue in issues {
                if tx.send(issue).await.is_err() {
                    tracing::warn!("Issue consumer stopped, ending poll loop");
                    return;
                }
            }
        }
    }
}
