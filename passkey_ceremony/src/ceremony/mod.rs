mod authentication;
mod errors;
mod password;
mod registration;
mod types;

pub use authentication::AuthenticationCeremony;
pub use password::PasswordCeremony;
pub use registration::RegistrationCeremony;
pub use types::{CeremonyResult, CeremonyStatus};
