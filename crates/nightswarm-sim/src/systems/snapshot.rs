//! Snapshot system: queries the ECS world and builds a complete RunSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use nightswarm_core::components::*;
use nightswarm_core::constants::ORBIT_ORB_RADIUS;
use nightswarm_core::enums::{RunPhase, Tint};
use nightswarm_core::events::GameEvent;
use nightswarm_core::state::*;
use nightswarm_core::types::{Position, RunClock};

use crate::progression::ProgressState;
use crate::systems::orbit;

/// Build a complete RunSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    clock: &RunClock,
    phase: RunPhase,
    progress: &ProgressState,
    upgrade_choices: &[UpgradeOption],
    events: Vec<GameEvent>,
) -> RunSnapshot {
    RunSnapshot {
        frame: clock.frame,
        elapsed_ms: clock.elapsed_ms,
        phase,
        level: progress.level,
        exp: progress.exp,
        exp_to_next: progress.required_exp(),
        score: progress.score,
        player: build_player(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        pickups: build_pickups(world),
        orbs: build_orbs(world),
        upgrade_choices: upgrade_choices.to_vec(),
        events,
    }
}

/// Build the PlayerView, or a default one before a run starts.
fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position, &Body, &Health, &Tint)>()
        .iter()
        .next()
        .map(|(_, (_, pos, body, health, tint))| PlayerView {
            position: *pos,
            radius: body.radius,
            hp: health.hp,
            max_hp: health.max_hp,
            tint: *tint,
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Position, &Body, &Health, &Tint)>()
        .iter()
        .map(|(_, (_, pos, body, health, tint))| EnemyView {
            position: *pos,
            radius: body.radius,
            hp: health.hp,
            max_hp: health.max_hp,
            tint: *tint,
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Body, &Tint)>()
        .iter()
        .map(|(_, (_, pos, body, tint))| ProjectileView {
            position: *pos,
            radius: body.radius,
            tint: *tint,
        })
        .collect()
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    world
        .query::<(&Pickup, &Position, &ExpValue, &Tint)>()
        .iter()
        .map(|(_, (_, pos, exp, tint))| PickupView {
            position: *pos,
            value: exp.value,
            tint: *tint,
        })
        .collect()
}

/// Current orb positions of the orbit weapon, for rendering.
fn build_orbs(world: &World) -> Vec<OrbView> {
    world
        .query::<(&Player, &Position, &WeaponLoadout)>()
        .iter()
        .next()
        .map(|(_, (_, pos, loadout))| {
            orbit::orb_positions(pos, &loadout.orbit)
                .into_iter()
                .map(|position| OrbView {
                    position,
                    radius: ORBIT_ORB_RADIUS,
                    tint: Tint::Orange,
                })
                .collect()
        })
        .unwrap_or_default()
}
