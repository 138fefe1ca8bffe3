use thiserror::Error;

/// Errors raised while talking to the relying party.
///
/// Transport-level failures carry their diagnostic through unprefixed
/// because ceremonies surface the text to the user as-is.
#[derive(Debug, Error)]
pub enum RelyingPartyError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("{0}")]
    Network(String),

    /// The response arrived but its body could not be read.
    #[error("{0}")]
    Body(String),

    /// The configured base URL is not a valid absolute URL.
    #[error("Invalid base URL: {0}")]
    BaseUrl(String),
}
