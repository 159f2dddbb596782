//! Delivery of found issues

use async_trait::async_trait;
use tickettrack_core::models::Issue;
use tokio::sync::mpsc;

/// Action taken for every issue the poller finds.
///
/// Closures taking an [`Issue`] are handlers too.
#[async_trait]
pub trait IssueHandler: Send {
    async fn handle(&mut self, issue: Issue);
}

/// Default handler: log the key and summary
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHandler;

#[async_trait]
impl IssueHandler for LogHandler {
    async fn handle(&mut self, issue: Issue) {
        tracing::info!("Found: [{}] {}", issue.key, issue.summary);
    }
}

#[async_trait]
impl<F> IssueHandler for F
where
    F: FnMut(Issue) + Send,
{
    async fn handle(&mut self, issue: Issue) {
        self(issue)
    }
}

pub struct Consumer {
    handler: Box<dyn IssueHandler>,
}

impl Consumer {
    pub fn new(handler: impl IssueHandler + 'static) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }

    /// Receive issues one at a time, in send order, until the channel closes.
    pub async fn run(mut self, mut rx: mpsc::Receiver<Issue>) {
        while let Some(issue) = rx.recv().await {
            self.handler.handle(issue).await;
        }
        tracing::debug!("Issue channel closed, consumer exiting");
    }
}
