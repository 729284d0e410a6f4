//! Host adapter for the roomward last-admin engine.
//!
//! Maps host-shaped state events (JSON content, string membership states)
//! into the typed snapshots `roomward-core` works on, applies fail-closed
//! validation, and logs every non-trivial decision.
//!
//! ## Architecture
//!
//! ```text
//! host pipeline ──▶ LastAdminHook ──▶ roomward-core guards
//!      ▲                  │
//!      └── verdict ◀──────┘   (allow / deny / promote / rewrite)
//! ```
//!
//! The hook owns no state beyond the immutable [`PolicyConfig`] and
//! performs no I/O; everything it needs arrives as resolved snapshots.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod event;
mod hook;

pub use error::HookError;
pub use event::{MEMBER_EVENT, POWER_LEVELS_EVENT, RoomState, StateEvent};
pub use hook::{HookDecision, LastAdminHook};
// Re-export the core surface a host needs to call the hook.
pub use roomward_core::{
    ADMIN_LEVEL, DenyReason, JoinedMembers, LevelsVerdict, Membership, MembershipVerdict,
    PolicyConfig, PowerLevel, PowerLevels, Promotion, RoomId, UserId,
};
