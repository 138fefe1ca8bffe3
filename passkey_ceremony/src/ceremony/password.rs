use serde_json::Value;

use crate::relying_party::RelyingPartyClient;

use super::errors::CeremonyError;
use super::types::{CeremonyResult, CeremonyStatus};

/// Single-round-trip email/password sign-in.
///
/// Shares the passkey ceremonies' status model so UI code consumes one
/// result shape regardless of the sign-in method. No authenticator is
/// involved.
pub struct PasswordCeremony {
    relying_party: RelyingPartyClient,
    status: CeremonyStatus,
    message: String,
}

impl PasswordCeremony {
    pub fn new(relying_party: RelyingPartyClient) -> Self {
        Self {
            relying_party,
            status: CeremonyStatus::Idle,
            message: String::new(),
        }
    }

    pub fn status(&self) -> CeremonyStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Current `{status, message}` snapshot.
    pub fn result(&self) -> CeremonyResult {
        CeremonyResult {
            status: self.status,
            message: self.message.clone(),
        }
    }

    /// Sign in with an email/password pair.
    ///
    /// Never returns an error; failures land in the returned result as a
    /// Failed status. Each call resets the previous invocation's terminal
    /// state.
    pub async fn login_with_password(&mut self, email: &str, password: &str) -> CeremonyResult {
        tracing::debug!("Starting password login for {}", email);
        self.status = CeremonyStatus::InProgress;
        self.message.clear();

        match self.run(email, password).await {
            Ok(message) => {
                self.status = CeremonyStatus::Succeeded;
                self.message = message;
            }
            Err(err) => {
                tracing::debug!("Password login failed: {}", err);
                self.status = CeremonyStatus::Failed;
                self.message = err.to_string();
            }
        }

        self.result()
    }

    async fn run(&self, email: &str, password: &str) -> Result<String, CeremonyError> {
        let response = self.relying_party.password_login(email, password).await?;

        let body: Value = response
            .json()
            .map_err(|_| CeremonyError::malformed(response.text()))?;

        if response.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Login successful");
            Ok(message.to_string())
        } else {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Invalid credentials");
            Err(CeremonyError::Verification(message.to_string()))
        }
    }
}
