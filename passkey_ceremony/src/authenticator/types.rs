use serde::Serialize;
use serde_json::Value;

/// Request envelope handed to the platform authenticator.
///
/// Mirrors the `{ optionsJSON }` shape browser WebAuthn helpers accept, so a
/// platform implementation can forward it to its ceremony call without
/// reshaping.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CredentialCeremonyRequest {
    #[serde(rename = "optionsJSON")]
    pub options_json: Value,
}

impl CredentialCeremonyRequest {
    pub fn new(options: Value) -> Self {
        Self {
            options_json: options,
        }
    }
}
