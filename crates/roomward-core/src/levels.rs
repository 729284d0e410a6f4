//! Power-level mapping for a room.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// A user's power level. Higher is more privileged.
pub type PowerLevel = i64;

/// Effective level at or above which a joined user is an administrator.
pub const ADMIN_LEVEL: PowerLevel = 100;

/// Power-level assignment for a room.
///
/// Users listed in `users` have an explicit level; everyone else falls back
/// to `users_default`. Deserializes directly from the host's power-level
/// state content: `users` is required (its absence makes the content
/// unusable for admin decisions, so parsing fails rather than allowing the
/// change through), `users_default` defaults to 0, and unrelated keys in
/// the content are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerLevels {
    /// Explicit per-user levels.
    users: BTreeMap<UserId, PowerLevel>,
    /// Fallback level for users without an explicit entry.
    #[serde(default)]
    users_default: PowerLevel,
}

impl PowerLevels {
    /// Creates an empty mapping with the given default level.
    pub fn new(users_default: PowerLevel) -> Self {
        Self { users: BTreeMap::new(), users_default }
    }

    /// Builder-style insertion of an explicit level.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<UserId>, level: PowerLevel) -> Self {
        self.users.insert(user.into(), level);
        self
    }

    /// Sets (or overwrites) a user's explicit level.
    pub fn set(&mut self, user: UserId, level: PowerLevel) {
        self.users.insert(user, level);
    }

    /// The effective level of a user: explicit entry, else the default.
    pub fn effective(&self, user: &UserId) -> PowerLevel {
        self.users.get(user).copied().unwrap_or(self.users_default)
    }

    /// Whether a user's effective level qualifies them as an administrator.
    pub fn is_admin(&self, user: &UserId) -> bool {
        self.effective(user) >= ADMIN_LEVEL
    }

    /// The explicit per-user entries.
    pub fn users(&self) -> &BTreeMap<UserId, PowerLevel> {
        &self.users
    }

    /// The fallback level for unlisted users.
    pub fn users_default(&self) -> PowerLevel {
        self.users_default
    }
}
