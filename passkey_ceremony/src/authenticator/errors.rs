use thiserror::Error;

/// Rejection raised by the platform authenticator.
///
/// The display string is exactly the platform's own message - ceremonies
/// surface it to the user verbatim, so no variant adds a prefix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthenticatorError {
    /// The user dismissed the prompt, the prompt timed out, or the platform
    /// refused the operation.
    #[error("{0}")]
    Rejected(String),

    /// No platform authenticator is available for this ceremony.
    #[error("{0}")]
    Unavailable(String),
}
