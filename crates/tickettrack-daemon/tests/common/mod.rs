#![allow(dead_code)]

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::json;
use tickettrack_core::models::{Credentials, PollSettings, CREATED_FORMAT};
use tickettrack_jira::JiraClient;
use tracing::subscriber::DefaultGuard;

pub fn jira_time(t: DateTime<Utc>) -> String {
    t.format(CREATED_FORMAT).to_string()
}

/// Search response with one issue per `(key, project, created)`
pub fn search_body(issues: &[(&str, &str, DateTime<Utc>)]) -> String {
    let issues: Vec<_> = issues
        .iter()
        .map(|(key, project, created)| {
            json!({
                "key": key,
                "fields": {
                    "summary": format!("Summary of {}", key),
                    "created": jira_time(*created),
                    "project": {"key": project}
                }
            })
        })
        .collect();
    json!({ "startAt": 0, "maxResults": 20, "total": issues.len(), "issues": issues }).to_string()
}

pub fn client_for(url: String) -> JiraClient {
    let credentials = Credentials::new("alice".to_string(), "hunter2".to_string(), url);
    JiraClient::new(Arc::new(credentials)).unwrap()
}

pub fn settings(project: &str, interval: Duration) -> PollSettings {
    let mut settings = PollSettings::new("alice".to_string(), project.to_string());
    settings.interval = interval;
    settings
}

#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .count()
    }
}

/// Route log output on this thread into a buffer until the guard drops
pub fn capture_logs() -> (LogCapture, DefaultGuard) {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
