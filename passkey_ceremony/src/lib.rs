//! passkey-ceremony - Client-side WebAuthn ceremony orchestration
//!
//! This crate drives the two challenge-response ceremonies a relying party
//! exposes for passkeys: registration (enrolling a new credential) and login
//! (asserting possession of an existing one), plus password sign-in as a
//! fallback. Each ceremony coordinates the relying-party server and the
//! platform authenticator across its begin/finish round-trips and folds every
//! failure mode into a single `{status, message}` result the caller can show
//! to a user.
//!
//! The platform authenticator is a seam: implement [`PlatformAuthenticator`]
//! for whatever holds the credentials on your platform and hand it to an
//! [`AuthenticatorBridge`]. This crate never touches key material.

mod authenticator;
mod ceremony;
mod config;
mod relying_party;

// Re-export the ceremony state machines and their result model
pub use ceremony::{
    AuthenticationCeremony, CeremonyResult, CeremonyStatus, PasswordCeremony,
    RegistrationCeremony,
};

pub use authenticator::{
    AuthenticatorBridge, AuthenticatorError, CredentialCeremonyRequest, PlatformAuthenticator,
};

pub use relying_party::{ApiResponse, OptionsEnvelope, RelyingPartyClient, RelyingPartyError};

pub use config::API_BASE_URL;
