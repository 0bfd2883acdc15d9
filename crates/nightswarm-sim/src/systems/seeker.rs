//! Seeker launcher — cooldown-gated, fires one round at the nearest enemy.
//!
//! With no target alive, firing is skipped silently and the timer keeps
//! accruing past the cooldown; the round goes out on the first frame a
//! target exists. The timer resets only on an actual fire.

use glam::DVec2;
use hecs::{Entity, World};

use nightswarm_core::components::{Enemy, Health, Player, WeaponLoadout};
use nightswarm_core::events::GameEvent;
use nightswarm_core::types::Position;

use crate::guidance;
use crate::world_setup;

/// Accrue the cooldown timer and fire when elapsed and a target exists.
pub fn run(world: &mut World, dt_ms: f64, events: &mut Vec<GameEvent>) {
    let (player_pos, ready, damage) = {
        let mut found = None;
        for (_entity, (_player, pos, loadout)) in
            world.query_mut::<(&Player, &Position, &mut WeaponLoadout)>()
        {
            let seeker = &mut loadout.seeker;
            seeker.since_fired_ms += dt_ms;
            found = Some((*pos, seeker.since_fired_ms > seeker.cooldown_ms, seeker.damage));
        }
        match found {
            Some(v) => v,
            None => return,
        }
    };
    if !ready {
        return;
    }

    let (target, target_pos) = match nearest_enemy(world, &player_pos) {
        Some(t) => t,
        None => return,
    };

    let heading = guidance::aim(&player_pos, &target_pos, DVec2::NEG_Y);
    world_setup::spawn_seeker_round(world, player_pos, target, heading, damage);
    events.push(GameEvent::SeekerFired {
        target_position: target_pos,
    });

    for (_entity, (_player, loadout)) in world.query_mut::<(&Player, &mut WeaponLoadout)>() {
        loadout.seeker.since_fired_ms = 0.0;
    }
}

/// Nearest living enemy by Euclidean distance. Ties resolve to the first
/// one seen in registry order.
pub fn nearest_enemy(world: &World, from: &Position) -> Option<(Entity, Position)> {
    let mut best: Option<(Entity, Position, f64)> = None;
    for (entity, (_enemy, pos, health)) in world.query::<(&Enemy, &Position, &Health)>().iter() {
        if health.hp <= 0.0 {
            continue;
        }
        let dist = from.distance_to(pos);
        if best.as_ref().map_or(true, |(_, _, b)| dist < *b) {
            best = Some((entity, *pos, dist));
        }
    }
    best.map(|(entity, pos, _)| (entity, pos))
}
