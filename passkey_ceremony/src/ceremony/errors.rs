use thiserror::Error;

use crate::authenticator::AuthenticatorError;
use crate::relying_party::RelyingPartyError;

/// Failure taxonomy for one ceremony run.
///
/// Display strings double as the user-facing diagnostic, so every variant
/// except `MalformedResponse` carries its message through unprefixed. No
/// value of this type escapes a ceremony entry point; the public contract
/// converts it into a Failed status at the boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum CeremonyError {
    /// Begin-step HTTP failure, or a request that never reached the server.
    #[error("{0}")]
    Transport(String),

    /// The platform authenticator rejected the ceremony; the payload is its
    /// message, surfaced verbatim.
    #[error("{0}")]
    Authenticator(String),

    /// Finish-step rejection by the relying party.
    #[error("{0}")]
    Verification(String),

    /// Finish-step body that was not valid JSON; the payload is the leading
    /// fragment of the raw body.
    #[error("Server returned invalid response: {0}")]
    MalformedResponse(String),
}

impl CeremonyError {
    /// Diagnostic for an unparsable server body, embedding at most the first
    /// 100 characters of the raw text.
    pub(crate) fn malformed(body: &str) -> Self {
        Self::MalformedResponse(body.chars().take(100).collect())
    }
}

impl From<RelyingPartyError> for CeremonyError {
    fn from(err: RelyingPartyError) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<AuthenticatorError> for CeremonyError {
    fn from(err: AuthenticatorError) -> Self {
        Self::Authenticator(err.to_string())
    }
}
