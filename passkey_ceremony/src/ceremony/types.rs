use serde::{Deserialize, Serialize};

/// Lifecycle of one ceremony invocation.
///
/// Transitions are monotonic within an invocation: Idle → InProgress →
/// {Succeeded | Failed}. The terminal states persist until the next
/// invocation resets to InProgress; nothing moves back to Idle mid-flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CeremonyStatus {
    Idle,
    InProgress,
    Succeeded,
    Failed,
}

impl CeremonyStatus {
    /// Whether this invocation has run to completion.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// What a ceremony resolves to - the sole contract UI code may depend on.
///
/// `message` is empty only while Idle/InProgress. On Succeeded it is a fixed
/// or server-supplied success string; on Failed it is the most specific
/// diagnostic available (authenticator text, server text, or a generic
/// fallback).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CeremonyResult {
    pub status: CeremonyStatus,
    pub message: String,
}
