//! Roomward decision engine.
//!
//! Policy logic that prevents a chat room from being left with no
//! administrator. The host calls a guard before committing a membership or
//! power-level state change; the guard returns a verdict (allow, deny, or
//! allow-with-modification) computed purely from the snapshots the host
//! passed in.
//!
//! ## Architecture
//!
//! ```text
//! roomward-core
//!   ├─ ids         (RoomId / UserId newtypes)
//!   ├─ levels      (power-level mapping, ADMIN_LEVEL)
//!   ├─ membership  (membership states, joined-member snapshots)
//!   ├─ config      (promote_moderators policy)
//!   ├─ inspector   (admin sets, promotion candidates, hypotheticals)
//!   └─ guard       (membership + power-level verdicts)
//! ```
//!
//! No I/O, no async, no interior mutability: invocations for different
//! rooms may run concurrently without synchronization, and identical
//! inputs always produce identical verdicts.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod guard;
pub mod ids;
pub mod inspector;
pub mod levels;
pub mod membership;

pub use config::PolicyConfig;
pub use guard::{
    DenyReason, LevelsVerdict, MembershipVerdict, Promotion, guard_membership_change,
    guard_power_level_change,
};
pub use ids::{RoomId, UserId};
pub use inspector::ProposedChange;
pub use levels::{ADMIN_LEVEL, PowerLevel, PowerLevels};
pub use membership::{JoinedMembers, Membership, UnknownMembership};
