mod errors;
mod types;

pub use errors::AuthenticatorError;
pub use types::CredentialCeremonyRequest;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

/// Platform credential operations a ceremony delegates to.
///
/// Implemented by whatever holds private keys and performs the user-presence
/// ceremony on the target platform - a browser binding, an OS credential
/// API, or a security key stack. Implementations own key material and user
/// interaction; this crate never sees either.
#[async_trait]
pub trait PlatformAuthenticator: Send + Sync {
    /// Run the platform registration ceremony and return the attestation
    /// credential to send to the relying party.
    async fn create_credential(
        &self,
        request: CredentialCeremonyRequest,
    ) -> Result<Value, AuthenticatorError>;

    /// Run the platform authentication ceremony and return the signed
    /// assertion to send to the relying party.
    async fn get_assertion(
        &self,
        request: CredentialCeremonyRequest,
    ) -> Result<Value, AuthenticatorError>;
}

/// Wraps a [`PlatformAuthenticator`] for the ceremonies.
///
/// Builds the request envelope around the server-issued options and passes
/// the platform's answer through untouched - the credential goes into the
/// finish request body as-is, and a rejection keeps the platform's own
/// message.
#[derive(Clone)]
pub struct AuthenticatorBridge {
    platform: Arc<dyn PlatformAuthenticator>,
}

impl AuthenticatorBridge {
    pub fn new(platform: Arc<dyn PlatformAuthenticator>) -> Self {
        Self { platform }
    }

    /// Delegate credential creation for the registration ceremony.
    pub async fn create_credential(&self, options: Value) -> Result<Value, AuthenticatorError> {
        tracing::debug!("Delegating credential creation to the platform authenticator");
        self.platform
            .create_credential(CredentialCeremonyRequest::new(options))
            .await
    }

    /// Delegate assertion generation for the authentication ceremony.
    pub async fn get_assertion(&self, options: Value) -> Result<Value, AuthenticatorError> {
        tracing::debug!("Delegating assertion generation to the platform authenticator");
        self.platform
            .get_assertion(CredentialCeremonyRequest::new(options))
            .await
    }
}
