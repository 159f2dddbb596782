pub mod credentials;

pub use credentials::{CredentialsStorage, DEFAULT_CONFIG_PATH};
