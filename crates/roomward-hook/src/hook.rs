//! The hook the host invokes before committing a state change.

use roomward_core::{
    DenyReason, JoinedMembers, LevelsVerdict, Membership, MembershipVerdict, PolicyConfig,
    PowerLevels, Promotion, RoomId, UserId, guard_membership_change, guard_power_level_change,
};
use serde::Deserialize;

use crate::error::HookError;
use crate::event::{MEMBER_EVENT, POWER_LEVELS_EVENT, RoomState, StateEvent};

/// Unified decision for [`LastAdminHook::check_state_event`].
///
/// Collapses the two guard verdict types into the shape a single
/// check-event callback needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookDecision {
    /// Let the event commit unchanged.
    Allow,
    /// Reject the event; surface the reason to the actor.
    Deny(DenyReason),
    /// Commit the event and apply this extra power-level assignment with it.
    AllowAndPromote(Promotion),
    /// Commit the event with its power-level content replaced by this
    /// mapping.
    AllowWithRewrite(PowerLevels),
}

impl From<MembershipVerdict> for HookDecision {
    fn from(verdict: MembershipVerdict) -> Self {
        match verdict {
            MembershipVerdict::Allow => Self::Allow,
            MembershipVerdict::Deny(reason) => Self::Deny(reason),
            MembershipVerdict::AllowAndPromote(promotion) => Self::AllowAndPromote(promotion),
        }
    }
}

impl From<LevelsVerdict> for HookDecision {
    fn from(verdict: LevelsVerdict) -> Self {
        match verdict {
            LevelsVerdict::Allow => Self::Allow,
            LevelsVerdict::Deny(reason) => Self::Deny(reason),
            LevelsVerdict::AllowWithRewrite(levels) => Self::AllowWithRewrite(levels),
        }
    }
}

/// Policy hook keeping every room with at least one administrator.
///
/// Construct once at startup with the loaded [`PolicyConfig`]; the hook is
/// immutable afterwards and safe to share across rooms. The host must call
/// one of the entry points before committing the corresponding state
/// change, and must honor the verdict (including treating an `Err` as a
/// rejection).
#[derive(Debug, Clone, Copy)]
pub struct LastAdminHook {
    config: PolicyConfig,
}

impl LastAdminHook {
    /// Creates the hook with the given policy.
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// The policy this hook was constructed with.
    pub fn config(&self) -> PolicyConfig {
        self.config
    }

    /// Guards a membership change (leave/kick/ban and everything else).
    ///
    /// `power_levels` is the room's current power-level content as raw
    /// JSON; `members` is the current joined set.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::MalformedPowerLevels`] if the content cannot be
    /// validated. The change must then be rejected by the host.
    pub fn on_membership_change(
        &self,
        room: &RoomId,
        target: &UserId,
        old: Membership,
        new: Membership,
        power_levels: &serde_json::Value,
        members: &JoinedMembers,
    ) -> Result<MembershipVerdict, HookError> {
        let levels = parse_power_levels(power_levels)?;
        let verdict = guard_membership_change(self.config, target, old, new, &levels, members);

        match &verdict {
            MembershipVerdict::Allow => {},
            MembershipVerdict::Deny(reason) => {
                tracing::warn!(room = %room, target = %target, %reason, "vetoing membership change");
            },
            MembershipVerdict::AllowAndPromote(promotion) => {
                tracing::info!(
                    room = %room,
                    departing = %target,
                    promoted = %promotion.user,
                    "promoting replacement admin"
                );
            },
        }

        Ok(verdict)
    }

    /// Guards a power-level change.
    ///
    /// `current` is the room's committed power-level content, `proposed`
    /// the content of the event being evaluated, both raw JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::MalformedPowerLevels`] if either content fails
    /// validation. The change must then be rejected by the host.
    pub fn on_power_level_change(
        &self,
        room: &RoomId,
        current: &serde_json::Value,
        proposed: &serde_json::Value,
        members: &JoinedMembers,
    ) -> Result<LevelsVerdict, HookError> {
        let current = parse_power_levels(current)?;
        let proposed = parse_power_levels(proposed)?;
        let verdict = guard_power_level_change(self.config, &current, &proposed, members);

        match &verdict {
            LevelsVerdict::Allow => {},
            LevelsVerdict::Deny(reason) => {
                tracing::warn!(room = %room, %reason, "vetoing power-level change");
            },
            LevelsVerdict::AllowWithRewrite(_) => {
                tracing::info!(room = %room, "rewriting power-level change to keep an admin");
            },
        }

        Ok(verdict)
    }

    /// Single check-event entry point for hosts with one callback slot.
    ///
    /// Classifies the event by kind and dispatches to the matching guard.
    /// Events that cannot remove an admin (messages, unrelated state, a
    /// member event for a user who is not joined) are allowed untouched.
    ///
    /// # Errors
    ///
    /// Propagates parsing failures from the dispatched guard; a member
    /// event without a valid `membership` string is an error too.
    pub fn check_state_event(
        &self,
        event: &StateEvent,
        state: &RoomState,
    ) -> Result<HookDecision, HookError> {
        match event.kind.as_str() {
            MEMBER_EVENT => {
                let new: Membership = event
                    .content
                    .get("membership")
                    .and_then(serde_json::Value::as_str)
                    .ok_or(HookError::MissingMembership)?
                    .parse()?;

                let target = event.target();
                // The snapshot predates the event: joined now means the
                // event is a transition out of (or within) join.
                let old = if state.members.contains(&target) {
                    Membership::Join
                } else {
                    Membership::Leave
                };

                self.on_membership_change(
                    &event.room_id,
                    &target,
                    old,
                    new,
                    &state.power_levels,
                    &state.members,
                )
                .map(HookDecision::from)
            },
            POWER_LEVELS_EVENT => self
                .on_power_level_change(
                    &event.room_id,
                    &state.power_levels,
                    &event.content,
                    &state.members,
                )
                .map(HookDecision::from),
            other => {
                tracing::debug!(room = %event.room_id, kind = other, "event kind not guarded");
                Ok(HookDecision::Allow)
            },
        }
    }
}

/// Validates and parses power-level content.
///
/// The `users` map is required; `users_default` falls back to 0; unrelated
/// keys are ignored. Failure here means the content cannot answer "who is
/// an admin", so the caller propagates it instead of allowing the change.
fn parse_power_levels(content: &serde_json::Value) -> Result<PowerLevels, HookError> {
    PowerLevels::deserialize(content).map_err(HookError::MalformedPowerLevels)
}
