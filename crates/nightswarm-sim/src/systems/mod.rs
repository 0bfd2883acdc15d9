//! Systems run by the engine each frame, in a fixed order.
//!
//! Systems are free functions over `&mut World` (or `&World` for the
//! read-only snapshot). Removals are collected into a buffer and applied
//! at pass boundaries so no pass observes a half-mutated registry.

pub mod contact;
pub mod damage;
pub mod movement;
pub mod orbit;
pub mod pickups;
pub mod projectiles;
pub mod seeker;
pub mod snapshot;
pub mod spawner;
