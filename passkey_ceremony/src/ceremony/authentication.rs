use serde_json::Value;

use crate::authenticator::AuthenticatorBridge;
use crate::relying_party::{OptionsEnvelope, RelyingPartyClient};

use super::errors::CeremonyError;
use super::types::{CeremonyResult, CeremonyStatus};

/// Drives the sign-in ceremony: begin → get-credential → finish.
///
/// Discoverable-credential flow - no username is supplied; the authenticator
/// picks the credential. Same ownership rules as the registration ceremony:
/// one instance, one invocation at a time.
pub struct AuthenticationCeremony {
    relying_party: RelyingPartyClient,
    authenticator: AuthenticatorBridge,
    status: CeremonyStatus,
    message: String,
}

impl AuthenticationCeremony {
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

    /// Sign in with an existing passkey.
    ///
    /// Runs to completion once started and never returns an error; every
    /// failure mode lands in the returned result as a Failed status with a
    /// human-readable message. Each call resets the previous invocation's
    /// terminal state.
    pub async fn login_with_passkey(&mut self) -> CeremonyResult {
        tracing::debug!("Starting passkey login");
        self.status = CeremonyStatus::InProgress;
        self.message.clear();

        match self.run().await {
            Ok(message) => {
                self.status = CeremonyStatus::Succeeded;
                self.message = message;
            }
            Err(err) => {
                tracing::debug!("Login ceremony failed: {}", err);
                self.status = CeremonyStatus::Failed;
                self.message = err.to_string();
            }
        }

        self.result()
    }

    async fn run(&self) -> Result<String, CeremonyError> {
        let begin = self.relying_party.begin_login().await?;
        if !begin.is_success() {
            // Unlike registration, the begin-step body IS surfaced here.
            let text = begin.text();
            let message = if text.is_empty() {
                "Failed to start login"
            } else {
                text
            };
            return Err(CeremonyError::Transport(message.to_string()));
        }

        let envelope = begin
            .json()
            .map(OptionsEnvelope::from_value)
            .map_err(|e| CeremonyError::Transport(e.to_string()))?;

        let assertion = self
            .authenticator
            .get_assertion(envelope.into_options())
            .await?;

        let finish = self.relying_party.finish_login(&assertion).await?;

        // Text first, then parse: the body must be inspectable even when the
        // server answers with something other than JSON.
        let body: Value = finish
            .json()
            .map_err(|_| CeremonyError::malformed(finish.text()))?;

        if finish.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Passkey login successful!");
            Ok(message.to_string())
        } else {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Passkey verification failed");
            Err(CeremonyError::Verification(message.to_string()))
        }
    }
}
