//! Engine configuration.

use serde::Deserialize;

/// Policy configuration for the last-admin engine.
///
/// Loaded once by the host and passed into every guard call; the engine
/// holds no global state, which keeps the guards pure and independently
/// testable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// When the last admin departs or is demoted, promote the best
    /// remaining joined user to admin instead of vetoing the change.
    /// Defaults to `false`: the engine vetoes rather than promotes.
    pub promote_moderators: bool,
}

impl PolicyConfig {
    /// Config with `promote_moderators` set explicitly.
    pub const fn new(promote_moderators: bool) -> Self {
        Self { promote_moderators }
    }
}
