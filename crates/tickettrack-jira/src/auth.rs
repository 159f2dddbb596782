//! JIRA authentication

use tickettrack_core::models::Credentials;

pub struct JiraAuth {
    login: String,
    password: String,
}

impl JiraAuth {
    pub fn new(login: String, password: String) -> Self {
        Self { login, password }
    }

    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new(credentials.login.clone(), credentials.password.clone())
    }

    pub fn to_basic_auth(&self) -> String {
        use base64::Engine;
        let credentials = format!("{}:{}", self.login, self.password);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials)
        )
    }
}
