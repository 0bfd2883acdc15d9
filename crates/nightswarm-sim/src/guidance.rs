//! Seeker round guidance.
//!
//! A round in flight holds a handle to the enemy it was launched at. The
//! handle is resolved against the world every frame; when the lookup fails
//! (target killed or consumed) the round keeps its last heading and flies
//! straight instead of faulting.

use glam::DVec2;

use nightswarm_core::types::Position;

/// Guidance state carried by every seeker round.
#[derive(Debug, Clone, Copy)]
pub struct Guidance {
    /// Handle to the hunted enemy. Never dereferenced directly — resolved
    /// via a world lookup that returns `Err` once the target is gone.
    pub target: hecs::Entity,
    /// Unit heading from the last frame the target still resolved.
    pub heading: DVec2,
    /// Flight speed in units per nominal tick.
    pub speed: f64,
    /// Damage dealt on impact.
    pub damage: f64,
}

/// Unit vector from `from` toward `to`, or `fallback` when the points
/// coincide.
pub fn aim(from: &Position, to: &Position, fallback: DVec2) -> DVec2 {
    let dir = from.direction_to(to);
    if dir == DVec2::ZERO {
        fallback
    } else {
        dir
    }
}
