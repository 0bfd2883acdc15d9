//! Entity spawn factories for setting up the run world.
//!
//! Creates the player, edge-spawned enemies, pickups, and seeker rounds
//! with appropriate component bundles.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nightswarm_core::components::*;
use nightswarm_core::constants::*;
use nightswarm_core::enums::Tint;
use nightswarm_core::types::{Position, Velocity};

use crate::guidance::Guidance;

/// Spawn the player at the arena center with the starting loadout.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        Player,
        Position::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
        Body {
            radius: PLAYER_RADIUS,
        },
        MoveSpeed {
            per_tick: PLAYER_SPEED,
        },
        Health {
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
        },
        default_loadout(),
        Tint::Blue,
    ))
}

/// The weapons every run starts with.
fn default_loadout() -> WeaponLoadout {
    WeaponLoadout {
        orbit: OrbitWeapon {
            level: 1,
            count: ORBIT_START_COUNT,
            ring_radius: ORBIT_RING_RADIUS,
            angle: 0.0,
            angular_speed: ORBIT_ANGULAR_SPEED,
            damage: ORBIT_DAMAGE,
        },
        seeker: SeekerWeapon {
            level: 1,
            cooldown_ms: SEEKER_COOLDOWN_MS,
            since_fired_ms: 0.0,
            damage: SEEKER_DAMAGE,
        },
    }
}

/// Spawn one enemy at a uniformly random point on one of the four arena
/// edges, offset outside the boundary, with a uniformly drawn speed.
pub fn spawn_edge_enemy(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let side: u32 = rng.gen_range(0..4);
    let position = match side {
        // top
        0 => Position::new(rng.gen_range(0.0..ARENA_WIDTH), -ENEMY_SPAWN_OFFSET),
        // right
        1 => Position::new(
            ARENA_WIDTH + ENEMY_SPAWN_OFFSET,
            rng.gen_range(0.0..ARENA_HEIGHT),
        ),
        // bottom
        2 => Position::new(
            rng.gen_range(0.0..ARENA_WIDTH),
            ARENA_HEIGHT + ENEMY_SPAWN_OFFSET,
        ),
        // left
        _ => Position::new(-ENEMY_SPAWN_OFFSET, rng.gen_range(0.0..ARENA_HEIGHT)),
    };
    let speed: f64 = rng.gen_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX);
    spawn_enemy_at(world, position, speed)
}

/// Spawn an enemy at an explicit position and speed.
pub fn spawn_enemy_at(world: &mut World, position: Position, speed: f64) -> hecs::Entity {
    world.spawn((
        Enemy,
        position,
        Velocity::default(),
        Body {
            radius: ENEMY_RADIUS,
        },
        MoveSpeed { per_tick: speed },
        Health {
            hp: ENEMY_HP,
            max_hp: ENEMY_HP,
        },
        Tint::Red,
    ))
}

/// Spawn an experience pickup where an enemy died.
pub fn spawn_pickup(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((
        Pickup,
        position,
        ExpValue {
            value: PICKUP_VALUE,
        },
        Tint::Yellow,
    ))
}

/// Spawn a seeker round homing on `target`.
pub fn spawn_seeker_round(
    world: &mut World,
    from: Position,
    target: hecs::Entity,
    heading: DVec2,
    damage: f64,
) -> hecs::Entity {
    world.spawn((
        Projectile,
        from,
        Body {
            radius: SEEKER_ROUND_RADIUS,
        },
        Guidance {
            target,
            heading,
            speed: SEEKER_SPEED,
            damage,
        },
        Tint::Cyan,
    ))
}
