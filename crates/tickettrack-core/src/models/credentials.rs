//! Tracker credentials

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;

/// Login details for the issue tracker, loaded once at startup.
#[derive(Clone, Deserialize, PartialEq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
    /// REST API root, e.g. `https://jira.example.com/rest/api/2`
    pub url: String,
}

impl Credentials {
    pub fn new(login: String, password: String, url: String) -> Self {
        Self {
            login,
            password,
            url,
        }
    }

    /// Validate the credentials
    pub fn validate(&self) -> Result<()> {
        if self.login.trim().is_empty() {
            return Err(Error::Validation("Login cannot be empty".to_string()));
        }

        if self.url.trim().is_empty() {
            return Err(Error::Validation("URL cannot be empty".to_string()));
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(Error::Validation(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }

    /// API root without a trailing slash, ready for path concatenation
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("url", &self.url)
            .finish()
    }
}
