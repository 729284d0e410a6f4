//! Guard entry points: classify a pending change and produce a verdict.
//!
//! Both guards are pure functions of the supplied snapshots and the config.
//! They never touch storage or the network; the host executes (or refuses)
//! whatever the verdict instructs. Calling a guard twice with identical
//! inputs yields an identical verdict.

use serde::{Deserialize, Serialize};

use crate::config::PolicyConfig;
use crate::ids::UserId;
use crate::inspector::{self, ProposedChange};
use crate::levels::{ADMIN_LEVEL, PowerLevel, PowerLevels};
use crate::membership::{JoinedMembers, Membership};

/// Why a change was vetoed.
///
/// Distinct reasons let the host surface "promotion disabled" and "no one
/// to promote" as different user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The change would remove the last admin and `promote_moderators` is
    /// off.
    PromotionDisabled,
    /// Promotion is enabled but no joined user is available to promote.
    NoCandidate,
}

impl DenyReason {
    /// The snake_case wire name (`promotion_disabled` / `no_candidate`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PromotionDisabled => "promotion_disabled",
            Self::NoCandidate => "no_candidate",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra power-level assignment the host must apply atomically with (or
/// immediately after) an allowed membership change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    /// User to promote.
    pub user: UserId,
    /// Level to assign. Always [`ADMIN_LEVEL`] for now.
    pub level: PowerLevel,
}

/// Verdict for a guarded membership change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipVerdict {
    /// Commit the change as-is.
    Allow,
    /// Reject the change; the host surfaces the reason to the actor.
    Deny(DenyReason),
    /// Commit the change and apply the promotion with it.
    AllowAndPromote(Promotion),
}

/// Verdict for a guarded power-level change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelsVerdict {
    /// Commit the proposed mapping unchanged.
    Allow,
    /// Reject the proposed mapping.
    Deny(DenyReason),
    /// Commit this mapping instead of the proposed one.
    AllowWithRewrite(PowerLevels),
}

/// Whether the transition takes the target out of the joined set.
///
/// Leave, kick, and ban all present as `join -> leave` or `join -> ban`
/// from the target's point of view; the guard does not care who sent the
/// event.
fn leaves_joined(old: Membership, new: Membership) -> bool {
    old == Membership::Join && matches!(new, Membership::Leave | Membership::Ban)
}

/// Guards a membership change before it commits.
///
/// Passes through anything that does not remove a user from the joined set
/// (invites, joins, knocks, profile-only updates). For departures, vetoes
/// or promotes when the departing user is the room's sole admin.
///
/// A room that already has zero admins is not retroactively fixed here:
/// only the transition from exactly one admin to zero matters.
pub fn guard_membership_change(
    config: PolicyConfig,
    target: &UserId,
    old: Membership,
    new: Membership,
    levels: &PowerLevels,
    members: &JoinedMembers,
) -> MembershipVerdict {
    if !leaves_joined(old, new) {
        return MembershipVerdict::Allow;
    }

    let admins = inspector::admins(levels, members);
    if !(admins.len() == 1 && admins.contains(target)) {
        // Zero admins (pre-existing), several admins, or a non-admin
        // departing: the departure cannot create a new adminless room.
        return MembershipVerdict::Allow;
    }

    if !config.promote_moderators {
        tracing::debug!(target = %target, "sole admin departing, promotion disabled");
        return MembershipVerdict::Deny(DenyReason::PromotionDisabled);
    }

    match inspector::promotion_candidate(levels, members, |user| user == target) {
        Some(user) => {
            tracing::debug!(target = %target, promoted = %user, "promoting replacement admin");
            MembershipVerdict::AllowAndPromote(Promotion { user, level: ADMIN_LEVEL })
        },
        None => {
            tracing::debug!(target = %target, "sole admin departing, nobody to promote");
            MembershipVerdict::Deny(DenyReason::NoCandidate)
        },
    }
}

/// Guards a power-level change before it commits.
///
/// Unlike the membership guard, this always validates the *resulting*
/// state of the proposed mapping, regardless of whether the room already
/// had admins: its job is to validate the new mapping itself.
pub fn guard_power_level_change(
    config: PolicyConfig,
    current: &PowerLevels,
    proposed: &PowerLevels,
    members: &JoinedMembers,
) -> LevelsVerdict {
    if !inspector::would_leave_adminless(current, members, ProposedChange::Levels(proposed)) {
        return LevelsVerdict::Allow;
    }

    if !config.promote_moderators {
        tracing::debug!("proposed levels leave no admin, promotion disabled");
        return LevelsVerdict::Deny(DenyReason::PromotionDisabled);
    }

    // Users the proposal demotes out of admin are not eligible to be
    // promoted straight back; everyone else competes under the proposed
    // levels.
    let candidate =
        inspector::promotion_candidate(proposed, members, |user| current.is_admin(user));

    match candidate {
        Some(user) => {
            tracing::debug!(promoted = %user, "rewriting proposed levels with replacement admin");
            let mut rewrite = proposed.clone();
            rewrite.set(user.clone(), ADMIN_LEVEL);
            LevelsVerdict::AllowWithRewrite(rewrite)
        },
        None => {
            tracing::debug!("proposed levels leave no admin, nobody to promote");
            LevelsVerdict::Deny(DenyReason::NoCandidate)
        },
    }
}
