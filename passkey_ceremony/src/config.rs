//! Central configuration for the passkey-ceremony crate

use std::sync::LazyLock;

/// Base URL of the relying-party server.
///
/// Resolved once, in order: the `API_BASE_URL` environment variable, then the
/// `PASSKEY_API_BASE_URL` value baked in at compile time, then
/// "http://localhost:8080". A trailing slash is trimmed so endpoint paths
/// concatenate cleanly.
pub static API_BASE_URL: LazyLock<String> = LazyLock::new(resolve_base_url);

fn resolve_base_url() -> String {
    std::env::var("API_BASE_URL")
        .ok()
        .or_else(|| option_env!("PASSKEY_API_BASE_URL").map(str::to_string))
        .unwrap_or_else(|| "http://localhost:8080".to_string())
        .trim_end_matches('/')
        .to_string()
}
