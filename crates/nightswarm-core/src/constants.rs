//! Simulation constants and tuning parameters.

/// Nominal frame duration in milliseconds (60 Hz reference tick).
/// Per-tick rates are scaled by `dt_ms / NOMINAL_FRAME_MS` each frame.
pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0;

// --- Arena ---

/// Arena width in units.
pub const ARENA_WIDTH: f64 = 2000.0;

/// Arena height in units.
pub const ARENA_HEIGHT: f64 = 2000.0;

// --- Run ---

/// Total run duration in milliseconds. Surviving this long wins.
pub const RUN_DURATION_MS: f64 = 60_000.0;

// --- Player ---

/// Player collision radius.
pub const PLAYER_RADIUS: f64 = 15.0;

/// Player movement speed (units per tick).
pub const PLAYER_SPEED: f64 = 3.0;

/// Starting and maximum player hit points.
pub const PLAYER_MAX_HP: f64 = 100.0;

// --- Enemies ---

/// Enemy collision radius.
pub const ENEMY_RADIUS: f64 = 10.0;

/// Enemy hit points at spawn.
pub const ENEMY_HP: f64 = 30.0;

/// Lower bound of the uniform enemy speed draw (units per tick).
pub const ENEMY_SPEED_MIN: f64 = 1.0;

/// Upper bound (exclusive) of the uniform enemy speed draw.
pub const ENEMY_SPEED_MAX: f64 = 1.5;

/// Distance outside the arena edge at which enemies appear.
pub const ENEMY_SPAWN_OFFSET: f64 = 20.0;

/// Damage dealt by an enemy's single melee hit. The enemy is consumed
/// on contact.
pub const ENEMY_CONTACT_DAMAGE: f64 = 10.0;

/// Per-frame probability of spawning one enemy.
pub const DEFAULT_SPAWN_PROBABILITY: f64 = 0.02;

// --- Orbit weapon ---

/// Number of orbs at the start of a run.
pub const ORBIT_START_COUNT: u32 = 2;

/// Radius of the ring the orbs travel on, centered on the player.
pub const ORBIT_RING_RADIUS: f64 = 50.0;

/// Ring rotation rate (radians per tick).
pub const ORBIT_ANGULAR_SPEED: f64 = 0.05;

/// Damage applied every frame an enemy overlaps an orb.
pub const ORBIT_DAMAGE: f64 = 10.0;

/// Collision radius of a single orb.
pub const ORBIT_ORB_RADIUS: f64 = 10.0;

// --- Seeker weapon ---

/// Time between seeker launches in milliseconds.
pub const SEEKER_COOLDOWN_MS: f64 = 2000.0;

/// Damage dealt by one seeker round.
pub const SEEKER_DAMAGE: f64 = 20.0;

/// Seeker round flight speed (units per tick).
pub const SEEKER_SPEED: f64 = 5.0;

/// Seeker round collision radius.
pub const SEEKER_ROUND_RADIUS: f64 = 5.0;

// --- Pickups / progression ---

/// Experience granted by one pickup.
pub const PICKUP_VALUE: u32 = 10;

/// Collection distance from the player's center. Deliberately far wider
/// than the player's hit radius.
pub const PICKUP_MAGNET_RADIUS: f64 = 100.0;

/// Score awarded per enemy killed by a weapon.
pub const SCORE_PER_KILL: u32 = 100;

/// Experience required for the next level is `level * EXP_PER_LEVEL`.
pub const EXP_PER_LEVEL: u32 = 50;

// --- Upgrades ---

/// Multiplier applied to the seeker cooldown by the cooldown upgrade.
pub const UPGRADE_COOLDOWN_FACTOR: f64 = 0.9;

/// Hit points restored by the heal upgrade (clamped to max hp).
pub const UPGRADE_HEAL_AMOUNT: f64 = 30.0;
