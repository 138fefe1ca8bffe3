use serde_json::Value;

use crate::authenticator::AuthenticatorBridge;
use crate::relying_party::{OptionsEnvelope, RelyingPartyClient};

use super::errors::CeremonyError;
use super::types::{CeremonyResult, CeremonyStatus};

/// Drives the enrollment ceremony: begin → create-credential → finish.
///
/// One instance owns one status/message pair. Invocations are not
/// deduplicated; callers keep an instance to a single invocation at a time
/// (e.g. disable the triggering control while InProgress).
pub struct RegistrationCeremony {
    relying_party: RelyingPartyClient,
    authenticator: AuthenticatorBridge,
    status: CeremonyStatus,
    message: String,
}

impl RegistrationCeremony {
    pub fn new(relying_party: RelyingPartyClient, authenticator: AuthenticatorBridge) -> Self {
        Self {
            relying_party,
            authenticator,
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

    /// Enroll a new passkey for `username`.
    ///
    /// Runs to completion once started and never returns an error: every
    /// failure mode lands in the returned result as a Failed status with a
    /// human-readable message. Each call resets the previous invocation's
    /// terminal state.
    pub async fn register(&mut self, username: &str) -> CeremonyResult {
        tracing::debug!("Starting passkey registration for {}", username);
        self.status = CeremonyStatus::InProgress;
        self.message.clear();

        match self.run(username).await {
            Ok(message) => {
                self.status = CeremonyStatus::Succeeded;
                self.message = message;
            }
            Err(err) => {
                tracing::debug!("Registration ceremony failed: {}", err);
                self.status = CeremonyStatus::Failed;
                self.message = err.to_string();
            }
        }

        self.result()
    }

    async fn run(&self, username: &str) -> Result<String, CeremonyError> {
        let begin = self.relying_party.begin_registration(username).await?;
        if !begin.is_success() {
            // The server body is not surfaced on this step.
            return Err(CeremonyError::Transport(
                "Failed to start registration".to_string(),
            ));
        }

        let envelope = begin
            .json()
            .map(OptionsEnvelope::from_value)
            .map_err(|e| CeremonyError::Transport(e.to_string()))?;

        let credential = self
            .authenticator
            .create_credential(envelope.into_options())
            .await?;

        let finish = self
            .relying_party
            .finish_registration(username, &credential)
            .await?;
        if finish.is_success() {
            return Ok("Registration successful! You can now log in.".to_string());
        }

        let body: Value = finish
            .json()
            .map_err(|e| CeremonyError::Verification(e.to_string()))?;
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("Registration failed");

        Err(CeremonyError::Verification(message.to_string()))
    }
}
