//! Adapter error types.

use roomward_core::UnknownMembership;

/// Errors surfaced to the host instead of a verdict.
///
/// The host is expected to reject the change on any of these: malformed or
/// ambiguous input never turns into an allow (fail-closed). None of them
/// occur when the host delivers well-formed snapshots.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// Power-level content failed structural validation (missing `users`
    /// map, non-integer level, ...).
    #[error("malformed power levels content: {0}")]
    MalformedPowerLevels(#[from] serde_json::Error),

    /// Member event content has no `membership` key.
    #[error("member event content missing \"membership\"")]
    MissingMembership,

    /// Membership string outside the known alphabet.
    #[error(transparent)]
    UnknownMembership(#[from] UnknownMembership),
}
