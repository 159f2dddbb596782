//! tickettrack Daemon Library
//!
//! Poller, consumer and the wiring between them, exposed as a library for testing.

pub mod consumer;
pub mod poller;
pub mod tracker;

pub use consumer::{Consumer, IssueHandler, LogHandler};
pub use poller::Poller;
pub use tracker::{start, Stopped, TrackerHandles, HANDOFF_CAPACITY};
