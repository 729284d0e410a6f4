//! Pure computations over room power-level and membership snapshots.
//!
//! Everything here is deterministic in its inputs. The guards in
//! [`crate::guard`] compose these operations into verdicts; nothing in this
//! module knows about configuration or verdict shapes.

use std::collections::BTreeSet;

use crate::ids::UserId;
use crate::levels::{ADMIN_LEVEL, PowerLevel, PowerLevels};
use crate::membership::JoinedMembers;

/// A hypothetical change to evaluate against a room snapshot.
#[derive(Debug, Clone, Copy)]
pub enum ProposedChange<'a> {
    /// A user transitions out of the joined set (leave, kick, or ban).
    Departure(&'a UserId),
    /// The room's power-level mapping is replaced wholesale.
    Levels(&'a PowerLevels),
}

/// Joined users whose effective level qualifies them as administrators.
///
/// Empty membership yields an empty set. Users listed in the mapping but
/// not joined do not count.
pub fn admins(levels: &PowerLevels, members: &JoinedMembers) -> BTreeSet<UserId> {
    members.iter().filter(|user| levels.is_admin(user)).cloned().collect()
}

/// Best joined user to promote to admin, if any.
///
/// Considers joined members for which `excluded` returns `false` and whose
/// effective level is strictly below [`ADMIN_LEVEL`], and picks the one
/// with the maximum effective level. Ties go to the lexicographically
/// smallest `UserId`, so the outcome never depends on snapshot ordering.
///
/// Returns `None` when no eligible member remains.
pub fn promotion_candidate(
    levels: &PowerLevels,
    members: &JoinedMembers,
    excluded: impl Fn(&UserId) -> bool,
) -> Option<UserId> {
    let mut best: Option<(PowerLevel, &UserId)> = None;

    // Members iterate in ascending lexicographic order, so replacing only
    // on a strictly higher level leaves the smallest id holding each tie.
    for user in members {
        if excluded(user) {
            continue;
        }
        let level = levels.effective(user);
        if level >= ADMIN_LEVEL {
            continue;
        }
        match best {
            Some((max, _)) if level <= max => {},
            _ => best = Some((level, user)),
        }
    }

    best.map(|(_, user)| user.clone())
}

/// Whether applying `change` to the snapshot would leave the room with no
/// administrator among its joined users.
pub fn would_leave_adminless(
    levels: &PowerLevels,
    members: &JoinedMembers,
    change: ProposedChange<'_>,
) -> bool {
    match change {
        ProposedChange::Departure(departing) => {
            !members.iter().any(|user| user != departing && levels.is_admin(user))
        },
        ProposedChange::Levels(proposed) => !members.iter().any(|user| proposed.is_admin(user)),
    }
}
