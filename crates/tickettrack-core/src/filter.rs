//! Project and recency filter for search results

use crate::models::Issue;
use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// Keeps issues that belong to one project and were created less than
/// `max_age` ago.
#[derive(Debug, Clone)]
pub struct IssueFilter {
    project: String,
    max_age: TimeDelta,
}

impl IssueFilter {
    pub fn new(project: impl Into<String>, max_age: Duration) -> Self {
        Self {
            project: project.into(),
            max_age: TimeDelta::from_std(max_age).unwrap_or(TimeDelta::MAX),
        }
    }

    pub fn matches_at(&self, issue: &Issue, now: DateTime<Utc>) -> bool {
        issue.project == self.project && issue.age_at(now) < self.max_age
    }

    /// Keep the matching issues, in their original order
    pub fn apply_at(&self, issues: Vec<Issue>, now: DateTime<Utc>) -> Vec<Issue> {
        issues
            .into_iter()
            .filter(|issue| self.matches_at(issue, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn issue(key: &str, project: &str, age_secs: i64) -> Issue {
        Issue::new(
            key.to_string(),
            format!("Summary of {}", key),
            project.to_string(),
            now() - TimeDelta::seconds(age_secs),
        )
    }

    #[test]
    fn test_matches_recent_issue_in_project() {
        let filter = IssueFilter::new("AB", Duration::from_secs(4));
        assert!(filter.matches_at(&issue("AB-1", "AB", 2), now()));
    }

    #[test]
    fn test_rejects_old_issue() {
        let filter = IssueFilter::new("AB", Duration::from_secs(4));
        assert!(!filter.matches_at(&issue("AB-1", "AB", 4), now()));
        assert!(!filter.matches_at(&issue("AB-2", "AB", 10), now()));
    }

    #[test]
    fn test_rejects_other_project() {
        let filter = IssueFilter::new("CD", Duration::from_secs(4));
        assert!(!filter.matches_at(&issue("AB-1", "AB", 0), now()));
        assert!(!filter.matches_at(&issue("AB-2", "AB", 2), now()));
    }

    #[test]
    fn test_project_match_is_exact() {
        let filter = IssueFilter::new("AB", Duration::from_secs(4));
        assert!(!filter.matches_at(&issue("ab-1", "ab", 1), now()));
        assert!(!filter.matches_at(&issue("ABC-1", "ABC", 1), now()));
    }

    #[test]
    fn test_future_issue_matches() {
        let filter = IssueFilter::new("AB", Duration::from_secs(4));
        assert!(filter.matches_at(&issue("AB-1", "AB", -30), now()));
    }

    #[test]
    fn test_apply_preserves_order() {
        let filter = IssueFilter::new("AB", Duration::from_secs(4));
        let issues = vec![
            issue("AB-1", "AB", 3),
            issue("CD-1", "CD", 3),
            issue("AB-2", "AB", 9),
            issue("AB-3", "AB", 2),
            issue("AB-4", "AB", 1),
        ];

        let keys: Vec<String> = filter
            .apply_at(issues, now())
            .into_iter()
            .map(|i| i.key)
            .collect();
        assert_eq!(keys, vec!["AB-1", "AB-3", "AB-4"]);
    }
}
