//! Reference room model.
//!
//! Holds the state a host would hold (power levels + joined set), asks the
//! guards before every change, and commits exactly what the verdict
//! instructs: denied changes are dropped, promotions and rewrites are
//! applied. This is the oracle the property tests check the invariant
//! against.

use roomward_core::{
    JoinedMembers, LevelsVerdict, Membership, MembershipVerdict, PolicyConfig, PowerLevels,
    UserId, guard_membership_change, guard_power_level_change, inspector,
};

/// A simulated room driven through the guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomModel {
    levels: PowerLevels,
    members: JoinedMembers,
}

impl RoomModel {
    /// Creates a room with the given committed state.
    pub fn new(levels: PowerLevels, members: JoinedMembers) -> Self {
        Self { levels, members }
    }

    /// Current power levels.
    pub fn levels(&self) -> &PowerLevels {
        &self.levels
    }

    /// Current joined set.
    pub fn members(&self) -> &JoinedMembers {
        &self.members
    }

    /// Whether at least one joined user is an admin.
    pub fn has_admin(&self) -> bool {
        !inspector::admins(&self.levels, &self.members).is_empty()
    }

    /// A user attempts to leave (or be kicked/banned out of) the room.
    ///
    /// Consults the guard and commits the departure only when allowed,
    /// applying any promotion the verdict carries first.
    pub fn depart(&mut self, config: PolicyConfig, user: &UserId) -> MembershipVerdict {
        let verdict = guard_membership_change(
            config,
            user,
            Membership::Join,
            Membership::Leave,
            &self.levels,
            &self.members,
        );

        match &verdict {
            MembershipVerdict::Allow => {
                self.members.remove(user);
            },
            MembershipVerdict::AllowAndPromote(promotion) => {
                self.levels.set(promotion.user.clone(), promotion.level);
                self.members.remove(user);
            },
            MembershipVerdict::Deny(_) => {},
        }

        verdict
    }

    /// A user proposes a new power-level mapping.
    ///
    /// Consults the guard; commits the proposal, the rewritten mapping, or
    /// nothing, per the verdict.
    pub fn propose_levels(&mut self, config: PolicyConfig, proposed: &PowerLevels) -> LevelsVerdict {
        let verdict = guard_power_level_change(config, &self.levels, proposed, &self.members);

        match &verdict {
            LevelsVerdict::Allow => self.levels = proposed.clone(),
            LevelsVerdict::AllowWithRewrite(rewrite) => self.levels = rewrite.clone(),
            LevelsVerdict::Deny(_) => {},
        }

        verdict
    }

    /// A user joins the room. Joins are never guarded.
    pub fn join(&mut self, user: UserId) {
        self.members.insert(user);
    }
}
