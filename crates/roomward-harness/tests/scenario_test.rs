//! Multi-step room scenarios
//!
//! Drives the reference model through realistic successions of departures
//! and power-level changes, the way a host would over a room's lifetime.

use roomward_core::{
    DenyReason, JoinedMembers, LevelsVerdict, MembershipVerdict, PolicyConfig, PowerLevels,
    UserId,
};
use roomward_harness::RoomModel;

const PROMOTE: PolicyConfig = PolicyConfig::new(true);
const VETO_ONLY: PolicyConfig = PolicyConfig::new(false);

fn members(users: &[&str]) -> JoinedMembers {
    users.iter().map(|u| UserId::from(*u)).collect()
}

#[test]
fn admin_succession_chain_until_last_member_is_pinned() {
    // founder > mod > helper; everyone drains out one by one.
    let levels = PowerLevels::new(0)
        .with_user("@founder:x", 100)
        .with_user("@mod:x", 50)
        .with_user("@helper:x", 25);
    let mut room =
        RoomModel::new(levels, members(&["@founder:x", "@mod:x", "@helper:x"]));

    // Founder leaves: the mod inherits the room.
    let verdict = room.depart(PROMOTE, &UserId::from("@founder:x"));
    assert!(matches!(verdict, MembershipVerdict::AllowAndPromote(_)));
    assert!(room.has_admin());
    assert_eq!(room.members().len(), 2);
    assert_eq!(room.levels().effective(&UserId::from("@mod:x")), 100);

    // The mod leaves too: the helper inherits.
    let verdict = room.depart(PROMOTE, &UserId::from("@mod:x"));
    assert!(matches!(verdict, MembershipVerdict::AllowAndPromote(_)));
    assert_eq!(room.levels().effective(&UserId::from("@helper:x")), 100);

    // The helper is alone now; their departure is pinned.
    let verdict = room.depart(PROMOTE, &UserId::from("@helper:x"));
    assert_eq!(verdict, MembershipVerdict::Deny(DenyReason::NoCandidate));
    assert_eq!(room.members().len(), 1);
    assert!(room.has_admin());
}

#[test]
fn veto_only_room_keeps_its_admin_in_place() {
    let levels = PowerLevels::new(0).with_user("@admin:x", 100).with_user("@bob:x", 50);
    let mut room = RoomModel::new(levels.clone(), members(&["@admin:x", "@bob:x"]));

    let verdict = room.depart(VETO_ONLY, &UserId::from("@admin:x"));
    assert_eq!(verdict, MembershipVerdict::Deny(DenyReason::PromotionDisabled));

    // Denied: nothing about the room changed.
    assert_eq!(room.levels(), &levels);
    assert_eq!(room.members().len(), 2);
}

#[test]
fn self_demotion_hands_the_room_to_the_next_in_line() {
    let levels = PowerLevels::new(0)
        .with_user("@admin:x", 100)
        .with_user("@mod:x", 50)
        .with_user("@newbie:x", 0);
    let mut room =
        RoomModel::new(levels, members(&["@admin:x", "@mod:x", "@newbie:x"]));

    // Admin demotes themselves to moderator.
    let proposed = PowerLevels::new(0)
        .with_user("@admin:x", 50)
        .with_user("@mod:x", 50)
        .with_user("@newbie:x", 0);
    let verdict = room.propose_levels(PROMOTE, &proposed);
    assert!(matches!(verdict, LevelsVerdict::AllowWithRewrite(_)));

    // The old admin is not promoted straight back; the mod takes over.
    assert_eq!(room.levels().effective(&UserId::from("@mod:x")), 100);
    assert_eq!(room.levels().effective(&UserId::from("@admin:x")), 50);
    assert!(room.has_admin());

    // Later the new admin leaves; the demoted founder is eligible again.
    let verdict = room.depart(PROMOTE, &UserId::from("@mod:x"));
    match verdict {
        MembershipVerdict::AllowAndPromote(promotion) => {
            assert_eq!(promotion.user, UserId::from("@admin:x"));
        },
        other => panic!("expected promotion, got {other:?}"),
    }
}

#[test]
fn churn_with_rejoins_never_drops_the_admin() {
    let levels = PowerLevels::new(0).with_user("@admin:x", 100);
    let mut room = RoomModel::new(levels, members(&["@admin:x"]));

    room.join(UserId::from("@bob:x"));
    room.join(UserId::from("@carol:x"));

    // Admin hands off and leaves; bob wins the tie at the default level.
    let verdict = room.depart(PROMOTE, &UserId::from("@admin:x"));
    match verdict {
        MembershipVerdict::AllowAndPromote(promotion) => {
            assert_eq!(promotion.user, UserId::from("@bob:x"));
        },
        other => panic!("expected promotion, got {other:?}"),
    }

    // The old admin rejoins (their stored level still applies), so carol
    // can leave freely with two admins present.
    room.join(UserId::from("@admin:x"));
    let verdict = room.depart(PROMOTE, &UserId::from("@carol:x"));
    assert_eq!(verdict, MembershipVerdict::Allow);
    assert!(room.has_admin());
}
