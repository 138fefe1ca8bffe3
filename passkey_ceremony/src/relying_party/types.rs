use http::StatusCode;
use serde_json::Value;

/// Normalized outcome of one relying-party request.
///
/// Every endpoint call resolves to this shape: the HTTP status plus the body
/// read as text up front. Callers pick the accessor each protocol step
/// requires - `text` where the raw body is surfaced, `json` where a
/// structured payload is expected.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, body: String) -> Self {
        Self { status, body }
    }

    /// Whether the relying party answered 2xx.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The raw body text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// The body parsed as JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Begin-response payload shapes observed from relying parties: the WebAuthn
/// options either wrapped in a `publicKey` field or sent as the payload
/// itself.
///
/// Classification happens once, at ingestion, so the ambiguity never leaks
/// into the ceremony steps.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsEnvelope {
    Wrapped(Value),
    Bare(Value),
}

impl OptionsEnvelope {
    /// Classify a begin-response payload.
    ///
    /// A non-null `publicKey` field wins; anything else is treated as the
    /// options object itself. A null `publicKey` counts as absent.
    pub fn from_value(payload: Value) -> Self {
        let wrapped = payload
            .get("publicKey")
            .filter(|inner| !inner.is_null())
            .cloned();

        match wrapped {
            Some(inner) => Self::Wrapped(inner),
            None => Self::Bare(payload),
        }
    }

    /// The inner credential options, however they arrived.
    pub fn into_options(self) -> Value {
        match self {
            Self::Wrapped(options) | Self::Bare(options) => options,
        }
    }
}
