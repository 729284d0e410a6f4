//! Power-Level Inspector tests

use roomward_core::inspector::{admins, promotion_candidate, would_leave_adminless};
use roomward_core::{JoinedMembers, PowerLevels, ProposedChange, UserId};

fn members(users: &[&str]) -> JoinedMembers {
    users.iter().map(|u| UserId::from(*u)).collect()
}

#[test]
fn admins_uses_effective_levels() {
    let levels = PowerLevels::new(0).with_user("@alice:x", 100).with_user("@bob:x", 50);
    let joined = members(&["@alice:x", "@bob:x", "@carol:x"]);

    let admin_set = admins(&levels, &joined);
    assert_eq!(admin_set.len(), 1);
    assert!(admin_set.contains(&UserId::from("@alice:x")));
}

#[test]
fn admins_honors_users_default() {
    // A misconfigured room where everyone defaults to admin.
    let levels = PowerLevels::new(100);
    let joined = members(&["@alice:x", "@bob:x"]);

    assert_eq!(admins(&levels, &joined).len(), 2);
}

#[test]
fn admins_ignores_listed_but_not_joined_users() {
    let levels = PowerLevels::new(0).with_user("@ghost:x", 100).with_user("@alice:x", 100);
    let joined = members(&["@alice:x"]);

    let admin_set = admins(&levels, &joined);
    assert_eq!(admin_set.len(), 1);
    assert!(!admin_set.contains(&UserId::from("@ghost:x")));
}

#[test]
fn admins_of_empty_room_is_empty() {
    let levels = PowerLevels::new(100);
    assert!(admins(&levels, &JoinedMembers::new()).is_empty());
}

#[test]
fn candidate_is_highest_below_admin() {
    let levels = PowerLevels::new(0)
        .with_user("@admin:x", 100)
        .with_user("@mod:x", 50)
        .with_user("@helper:x", 25);
    let joined = members(&["@admin:x", "@mod:x", "@helper:x"]);

    let departing = UserId::from("@admin:x");
    let candidate = promotion_candidate(&levels, &joined, |u| *u == departing);
    assert_eq!(candidate, Some(UserId::from("@mod:x")));
}

#[test]
fn candidate_tie_breaks_to_smallest_user_id() {
    let levels =
        PowerLevels::new(0).with_user("@a:x", 100).with_user("@c:x", 50).with_user("@b:x", 50);
    let joined = members(&["@a:x", "@b:x", "@c:x"]);

    let departing = UserId::from("@a:x");
    let candidate = promotion_candidate(&levels, &joined, |u| *u == departing);
    assert_eq!(candidate, Some(UserId::from("@b:x")));
}

#[test]
fn candidate_may_sit_at_the_default_level() {
    // Unlisted users compete at users_default; a room of one admin and one
    // plain member still has someone to promote.
    let levels = PowerLevels::new(0).with_user("@admin:x", 100);
    let joined = members(&["@admin:x", "@bob:x"]);

    let departing = UserId::from("@admin:x");
    let candidate = promotion_candidate(&levels, &joined, |u| *u == departing);
    assert_eq!(candidate, Some(UserId::from("@bob:x")));
}

#[test]
fn candidate_skips_existing_admins() {
    let levels = PowerLevels::new(0).with_user("@a:x", 100).with_user("@b:x", 100);
    let joined = members(&["@a:x", "@b:x"]);

    // Nobody below admin level and nobody excluded: no candidate.
    let candidate = promotion_candidate(&levels, &joined, |_| false);
    assert_eq!(candidate, None);
}

#[test]
fn candidate_none_when_everyone_is_excluded() {
    let levels = PowerLevels::new(0).with_user("@admin:x", 100);
    let joined = members(&["@admin:x"]);

    let departing = UserId::from("@admin:x");
    assert_eq!(promotion_candidate(&levels, &joined, |u| *u == departing), None);
}

#[test]
fn departure_of_sole_admin_leaves_room_adminless() {
    let levels = PowerLevels::new(0).with_user("@admin:x", 100).with_user("@bob:x", 50);
    let joined = members(&["@admin:x", "@bob:x"]);

    let admin = UserId::from("@admin:x");
    let bob = UserId::from("@bob:x");
    assert!(would_leave_adminless(&levels, &joined, ProposedChange::Departure(&admin)));
    assert!(!would_leave_adminless(&levels, &joined, ProposedChange::Departure(&bob)));
}

#[test]
fn departure_with_second_admin_is_safe() {
    let levels = PowerLevels::new(0).with_user("@a:x", 100).with_user("@b:x", 100);
    let joined = members(&["@a:x", "@b:x"]);

    let a = UserId::from("@a:x");
    assert!(!would_leave_adminless(&levels, &joined, ProposedChange::Departure(&a)));
}

#[test]
fn proposed_levels_checked_against_joined_users_only() {
    let current = PowerLevels::new(0).with_user("@a:x", 100);
    // The proposal keeps an admin entry, but that user is not joined.
    let proposed = PowerLevels::new(0).with_user("@ghost:x", 100);
    let joined = members(&["@a:x", "@b:x"]);

    assert!(would_leave_adminless(&current, &joined, ProposedChange::Levels(&proposed)));
}
