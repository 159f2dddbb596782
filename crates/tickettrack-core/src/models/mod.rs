pub mod credentials;
pub mod issue;
pub mod settings;

pub use credentials::Credentials;
pub use issue::{Issue, CREATED_FORMAT};
pub use settings::{PollSettings, TrackingField};
