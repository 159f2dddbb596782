//! Turning a search response into the issues worth reporting

use std::time::Duration;

use chrono::{DateTime, Utc};
use tickettrack_core::{models::Issue, IssueFilter};

use crate::types::SearchResponse;

/// Parse a raw `/search` body and keep the issues in `project` created less
/// than `max_age` ago. Bad input is logged and skipped, never returned as an
/// error.
pub fn extract_matches(raw: &[u8], project: &str, max_age: Duration) -> Vec<Issue> {
    extract_matches_at(raw, project, max_age, Utc::now())
}

pub fn extract_matches_at(
    raw: &[u8],
    project: &str,
    max_age: Duration,
    now: DateTime<Utc>,
) -> Vec<Issue> {
    let response: SearchResponse = match serde_json::from_slice(raw) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Error parsing json: {}", e);
            return Vec::new();
        }
    };

    let issues = response
        .issues
        .into_iter()
        .filter_map(|raw_issue| {
            let key = raw_issue.key.clone();
            match raw_issue.into_issue() {
                Ok(issue) => Some(issue),
                Err(e) => {
                    tracing::warn!(issue = %key, "Skipping issue: {}", e);
                    None
                }
            }
        })
        .collect();

    IssueFilter::new(project, max_age).apply_at(issues, now)
}
