//! Seeker round flight and impact resolution.
//!
//! Rounds re-aim at their target handle each frame (straight-line fallback
//! once the handle stops resolving), fly, despawn when they leave the
//! arena, and are consumed on any hit — killing or not.

use glam::DVec2;
use hecs::{Entity, World};

use nightswarm_core::components::{Body, Enemy, Health, Projectile};
use nightswarm_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use nightswarm_core::events::GameEvent;
use nightswarm_core::types::Position;

use crate::guidance::{self, Guidance};
use crate::progression::ProgressState;
use crate::systems::damage;

/// One full projectile pass: guidance, integration, bounds, impacts.
pub fn run(
    world: &mut World,
    scale: f64,
    progress: &mut ProgressState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    // 1. Re-aim. Collected first, applied after: target lookups cannot run
    // while the rounds' components are borrowed by the query.
    let mut headings: Vec<(Entity, DVec2)> = Vec::new();
    {
        let mut query = world.query::<(&Projectile, &Position, &Guidance)>();
        for (entity, (_round, pos, guidance)) in query.iter() {
            let heading = match world.get::<&Position>(guidance.target) {
                Ok(target_pos) => guidance::aim(pos, &target_pos, guidance.heading),
                // Target gone: keep the last heading, fly straight.
                Err(_) => guidance.heading,
            };
            headings.push((entity, heading));
        }
    }
    for (entity, heading) in headings {
        if let Ok((pos, guidance)) = world.query_one_mut::<(&mut Position, &mut Guidance)>(entity) {
            guidance.heading = heading;
            pos.0 += heading * guidance.speed * scale;
        }
    }

    // 2. Remove rounds that left the arena.
    despawn_buffer.clear();
    for (entity, (_round, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        if pos.0.x < 0.0 || pos.0.x > ARENA_WIDTH || pos.0.y < 0.0 || pos.0.y > ARENA_HEIGHT {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    // 3. Impacts. Each round resolves against the nearest overlapping enemy.
    let mut impacts: Vec<(Entity, Entity, f64)> = Vec::new();
    {
        let mut rounds = world.query::<(&Projectile, &Position, &Body, &Guidance)>();
        for (round, (_marker, pos, body, guidance)) in rounds.iter() {
            let mut best: Option<(Entity, f64)> = None;
            for (enemy, (_enemy, enemy_pos, enemy_body, health)) in
                world.query::<(&Enemy, &Position, &Body, &Health)>().iter()
            {
                if health.hp <= 0.0 {
                    continue;
                }
                let dist = pos.distance_to(enemy_pos);
                if dist < body.radius + enemy_body.radius
                    && best.map_or(true, |(_, b)| dist < b)
                {
                    best = Some((enemy, dist));
                }
            }
            if let Some((enemy, _)) = best {
                impacts.push((round, enemy, guidance.damage));
            }
        }
    }

    let mut kills: Vec<(Entity, Position)> = Vec::new();
    for (round, enemy, dmg) in impacts {
        let _ = world.despawn(round);
        if let Ok((pos, health)) = world.query_one_mut::<(&Position, &mut Health)>(enemy) {
            let pos = *pos;
            if damage::apply(health, dmg) {
                kills.push((enemy, pos));
            }
        }
    }
    damage::settle_kills(world, &kills, progress, events, despawn_buffer);
}
