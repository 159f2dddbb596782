pub mod error;
pub mod filter;
pub mod models;
pub mod storage;

pub use error::{Error, Result};
pub use filter::IssueFilter;
