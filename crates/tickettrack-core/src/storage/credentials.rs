//! Credentials file loading

use crate::{models::Credentials, Error, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "./config.yaml";

/// YAML file holding `login`, `password` and `url`
pub struct CredentialsStorage {
    path: PathBuf,
}

impl CredentialsStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Credentials> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| Error::Read {
            path: self.path.clone(),
            source,
        })?;

        let credentials: Credentials = serde_yaml::from_str(&content)?;
        credentials.validate()?;
        Ok(credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_credentials() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "login: myuser\npassword: mypassword\nurl: https://jira.whatever.com/rest/api/2\n",
        );

        let creds = CredentialsStorage::new(path).load().unwrap();
        assert_eq!(creds.login, "myuser");
        assert_eq!(creds.password, "mypassword");
        assert_eq!(creds.url, "https://jira.whatever.com/rest/api/2");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = CredentialsStorage::new(dir.path().join("nope.yaml")).load();
        assert!(matches!(result, Err(Error::Read { .. })));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "login: [unterminated\n");
        let result = CredentialsStorage::new(path).load();
        assert!(matches!(result, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_load_missing_key() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "login: myuser\nurl: https://jira.whatever.com\n");
        let result = CredentialsStorage::new(path).load();
        assert!(matches!(result, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_load_invalid_url() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "login: myuser\npassword: pw\nurl: jira.whatever.com\n");
        let result = CredentialsStorage::new(path).load();
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
