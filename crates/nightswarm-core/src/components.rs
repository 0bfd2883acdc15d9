//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Hit points. Systems keep `hp` within `[0, max_hp]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: f64,
    pub max_hp: f64,
}

/// Collision circle radius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub radius: f64,
}

/// Movement rate in units per nominal tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveSpeed {
    pub per_tick: f64,
}

/// Experience granted when a pickup is collected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExpValue {
    pub value: u32,
}

/// Orbit weapon state, attached to the player via `WeaponLoadout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitWeapon {
    pub level: u32,
    /// Number of orbs, evenly spaced around the ring.
    pub count: u32,
    /// Ring radius around the player.
    pub ring_radius: f64,
    /// Current ring rotation (radians). Grows without wrapping.
    pub angle: f64,
    /// Rotation rate in radians per tick.
    pub angular_speed: f64,
    /// Damage applied every frame an enemy overlaps an orb.
    pub damage: f64,
}

/// Seeker weapon state, attached to the player via `WeaponLoadout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeekerWeapon {
    pub level: u32,
    /// Time between launches in milliseconds.
    pub cooldown_ms: f64,
    /// Time accrued since the last launch. Keeps growing past the
    /// cooldown while no target exists; resets only on an actual fire.
    pub since_fired_ms: f64,
    /// Damage dealt by one round.
    pub damage: f64,
}

/// The player's weapons. Persists for the whole run; mutated by upgrades.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponLoadout {
    pub orbit: OrbitWeapon,
    pub seeker: SeekerWeapon,
}

/// Marks the player entity. One per run, never despawned (the run ends
/// instead).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks a seeker round in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Marks an experience pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup;
