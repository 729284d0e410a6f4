//! Membership states and joined-member snapshots.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Membership state of a user in a room.
///
/// Wire names are the lowercase variant names (`join`, `leave`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    /// The user is joined to the room.
    Join,
    /// The user has a pending invite.
    Invite,
    /// The user has left, or was kicked by another user.
    Leave,
    /// The user is banned from the room.
    Ban,
    /// The user has requested to join.
    Knock,
}

impl Membership {
    /// The lowercase wire name of this state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::Invite => "invite",
            Self::Leave => "leave",
            Self::Ban => "ban",
            Self::Knock => "knock",
        }
    }
}

impl std::fmt::Display for Membership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for membership strings outside the known alphabet.
///
/// Surfaced instead of guessing: an unrecognized state must never be
/// treated as harmless (fail-closed).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown membership state: {0:?}")]
pub struct UnknownMembership(pub String);

impl FromStr for Membership {
    type Err = UnknownMembership;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "join" => Ok(Self::Join),
            "invite" => Ok(Self::Invite),
            "leave" => Ok(Self::Leave),
            "ban" => Ok(Self::Ban),
            "knock" => Ok(Self::Knock),
            other => Err(UnknownMembership(other.to_owned())),
        }
    }
}

/// Snapshot of the users currently joined to a room.
///
/// Only joined users count toward admin presence; invited, left, and banned
/// users are excluded by construction. The host resolves the snapshot
/// before calling the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoinedMembers(BTreeSet<UserId>);

impl JoinedMembers {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a joined user. Returns `false` if already present.
    pub fn insert(&mut self, user: UserId) -> bool {
        self.0.insert(user)
    }

    /// Removes a user. Returns `false` if not present.
    pub fn remove(&mut self, user: &UserId) -> bool {
        self.0.remove(user)
    }

    /// Whether the user is joined.
    pub fn contains(&self, user: &UserId) -> bool {
        self.0.contains(user)
    }

    /// Iterates joined users in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.0.iter()
    }

    /// Number of joined users.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the room has no joined users.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<UserId> for JoinedMembers {
    fn from_iter<T: IntoIterator<Item = UserId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a JoinedMembers {
    type Item = &'a UserId;
    type IntoIter = std::collections::btree_set::Iter<'a, UserId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
