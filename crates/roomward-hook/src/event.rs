//! Host-shaped state events and room snapshots.
//!
//! The host pipeline delivers room state changes as events whose `content`
//! is raw JSON. Only the keys the engine cares about are interpreted here;
//! everything else passes through untouched.

use roomward_core::{JoinedMembers, RoomId, UserId};
use serde::{Deserialize, Serialize};

/// Event kind for membership changes.
pub const MEMBER_EVENT: &str = "m.room.member";

/// Event kind for power-level changes.
pub const POWER_LEVELS_EVENT: &str = "m.room.power_levels";

/// A room state event as delivered by the host pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateEvent {
    /// Room the event applies to.
    pub room_id: RoomId,
    /// Event kind (`m.room.member`, `m.room.power_levels`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// State key. For member events this is the target user's id.
    pub state_key: String,
    /// User who sent the event.
    pub sender: UserId,
    /// Raw event content.
    pub content: serde_json::Value,
}

impl StateEvent {
    /// The target user for member events (the state key).
    pub fn target(&self) -> UserId {
        UserId::new(self.state_key.clone())
    }
}

/// Snapshot of the room state the event is being evaluated against.
///
/// Resolved by the host before the hook is invoked; the engine never
/// fetches state lazily, so snapshot freshness is the host's problem.
#[derive(Debug, Clone)]
pub struct RoomState {
    /// Users currently joined to the room.
    pub members: JoinedMembers,
    /// Current power-level content, raw as stored by the host.
    pub power_levels: serde_json::Value,
}
