//! Orbit weapon — a continuous damage field revolving around the player.
//!
//! No cooldown: an enemy inside an orb's contact radius takes damage every
//! frame it stays there, once per overlapping orb.

use std::f64::consts::TAU;

use glam::DVec2;
use hecs::{Entity, World};

use nightswarm_core::components::{Body, Enemy, Health, OrbitWeapon, Player, WeaponLoadout};
use nightswarm_core::constants::ORBIT_ORB_RADIUS;
use nightswarm_core::events::GameEvent;
use nightswarm_core::types::Position;

use crate::progression::ProgressState;
use crate::systems::damage;

/// Position of each orb for the current ring angle, evenly spaced.
pub fn orb_positions(player_pos: &Position, orbit: &OrbitWeapon) -> Vec<Position> {
    (0..orbit.count)
        .map(|i| {
            let angle = orbit.angle + i as f64 * (TAU / orbit.count as f64);
            Position(player_pos.0 + DVec2::new(angle.cos(), angle.sin()) * orbit.ring_radius)
        })
        .collect()
}

/// Advance the ring and apply field damage. Kills pay out at the end of
/// the pass.
pub fn run(
    world: &mut World,
    scale: f64,
    progress: &mut ProgressState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let (player_pos, orbit) = {
        let mut found = None;
        for (_entity, (_player, pos, loadout)) in
            world.query_mut::<(&Player, &Position, &mut WeaponLoadout)>()
        {
            loadout.orbit.angle += loadout.orbit.angular_speed * scale;
            found = Some((*pos, loadout.orbit.clone()));
        }
        match found {
            Some(v) => v,
            None => return,
        }
    };

    let orbs = orb_positions(&player_pos, &orbit);
    let mut kills: Vec<(Entity, Position)> = Vec::new();
    for (entity, (_enemy, pos, body, health)) in
        world.query_mut::<(&Enemy, &Position, &Body, &mut Health)>()
    {
        for orb in &orbs {
            if orb.distance_to(pos) >= ORBIT_ORB_RADIUS + body.radius {
                continue;
            }
            if damage::apply(health, orbit.damage) {
                kills.push((entity, *pos));
                break;
            }
        }
    }

    damage::settle_kills(world, &kills, progress, events, despawn_buffer);
}
