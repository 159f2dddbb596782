//! JIRA search client

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use tickettrack_core::models::{Credentials, TrackingField};

use crate::auth::JiraAuth;
use crate::error::{Error, Result};

pub struct JiraClient {
    http: reqwest::Client,
    credentials: Arc<Credentials>,
    auth: JiraAuth,
}

impl JiraClient {
    pub fn new(credentials: Arc<Credentials>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tickettrack/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let auth = JiraAuth::from_credentials(&credentials);

        Ok(Self {
            http,
            credentials,
            auth,
        })
    }

    /// Path and query for a search on `field = value`, oldest first
    pub fn search_uri(field: TrackingField, value: &str, max_results: u32) -> String {
        format!(
            "/search?jql={}={}+order+by+created&startAt=0&maxResults={}",
            field, value, max_results
        )
    }

    /// Run a search and return the raw response body.
    pub async fn try_search(
        &self,
        field: TrackingField,
        value: &str,
        max_results: u32,
    ) -> Result<Vec<u8>> {
        let url = format!(
            "{}{}",
            self.credentials.base_url(),
            Self::search_uri(field, value, max_results)
        );

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.auth.to_basic_auth())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { status, url });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    /// Like [`try_search`](Self::try_search), but a failed search is logged
    /// and reported as `None` so the caller can simply skip the cycle.
    pub async fn search(
        &self,
        field: TrackingField,
        value: &str,
        max_results: u32,
    ) -> Option<Vec<u8>> {
        match self.try_search(field, value, max_results).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!("Error searching jira: {}", e);
                None
            }
        }
    }
}
