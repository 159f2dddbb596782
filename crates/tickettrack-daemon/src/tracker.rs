//! Wiring of the poller and the consumer

use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};

use crate::consumer::Consumer;
use crate::poller::Poller;

/// Capacity of the handoff channel. One slot keeps the poller at most one
/// issue ahead of the consumer.
pub const HANDOFF_CAPACITY: usize = 1;

/// Why [`TrackerHandles::run_until`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stopped {
    Shutdown,
    PollerExited,
    ConsumerExited,
}

pub struct TrackerHandles {
    pub poller: JoinHandle<()>,
    pub consumer: JoinHandle<()>,
}

impl TrackerHandles {
    pub fn abort(&self) {
        self.poller.abort();
        self.consumer.abort();
    }

    /// Wait for `shutdown` or for either task to end, whichever comes first,
    /// then abort whatever is still running.
    pub async fn run_until(mut self, shutdown: impl Future<Output = ()>) -> Stopped {
        let stopped = tokio::select! {
            _ = shutdown => {
                tracing::info!("Shutting down...");
                Stopped::Shutdown
            }
            result = &mut self.poller => {
                log_exit("Poller", result);
                Stopped::PollerExited
            }
            result = &mut self.consumer => {
                log_exit("Consumer", result);
                Stopped::ConsumerExited
            }
        };

        self.abort();
        stopped
    }
}

fn log_exit(task: &str, result: Result<(), JoinError>) {
    match result {
        Ok(()) => tracing::warn!("{} task exited", task),
        Err(e) => tracing::error!("{} task failed: {}", task, e),
    }
}

/// Spawn the poll loop and the consumer as two tasks joined by one channel
pub fn start(poller: Poller, consumer: Consumer) -> TrackerHandles {
    let (tx, rx) = mpsc::channel(HANDOFF_CAPACITY);

    let poller = tokio::spawn(poller.run(tx));
    let consumer = tokio::spawn(consumer.run(rx));

    TrackerHandles { poller, consumer }
}
