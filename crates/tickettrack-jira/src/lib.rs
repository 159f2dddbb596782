//! tickettrack JIRA Integration
//!
//! Search client and response parsing for the issue poller.

pub mod auth;
pub mod client;
pub mod error;
pub mod search;
pub mod types;

pub use client::JiraClient;
pub use error::{Error, Result};
pub use search::{extract_matches, extract_matches_at};
pub use types::*;
