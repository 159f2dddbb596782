//! JIRA API types

use serde::Deserialize;
use tickettrack_core::models::Issue;

/// Body of `GET /search`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraIssue {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub fields: JiraFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub project: JiraProject,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraProject {
    #[serde(default)]
    pub key: String,
}

impl JiraIssue {
    /// Convert to the domain model. Fails only if `created` cannot be parsed.
    pub fn into_issue(self) -> tickettrack_core::Result<Issue> {
        let created = Issue::parse_created(&self.fields.created)?;
        Ok(Issue::new(
            self.key,
            self.fields.summary,
            self.fields.project.key,
            created,
        ))
    }
}
