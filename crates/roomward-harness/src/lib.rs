//! Test harness for the roomward engine.
//!
//! Provides [`model::RoomModel`], a reference room that applies guard
//! verdicts the way a compliant host would. The property suites under
//! `tests/` drive random event sequences through it and check the engine's
//! one invariant: a room with an admin never loses its last admin through
//! an allowed change.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;

pub use model::RoomModel;
