//! Damage application and the one-shot kill payout.

use hecs::{Entity, World};

use nightswarm_core::components::Health;
use nightswarm_core::constants::SCORE_PER_KILL;
use nightswarm_core::events::GameEvent;
use nightswarm_core::types::Position;

use crate::progression::ProgressState;
use crate::world_setup;

/// Apply damage, clamping hp at zero. Returns true only on the transition
/// to dead — an already-dead entity never reports dying again.
pub fn apply(health: &mut Health, amount: f64) -> bool {
    if health.hp <= 0.0 {
        return false;
    }
    health.hp = (health.hp - amount).max(0.0);
    health.hp <= 0.0
}

/// Pay out weapon kills collected during a pass: emit a pickup at each
/// enemy's last position, add score, and despawn. Runs after the pass's
/// queries end so the registry is never mutated mid-iteration.
pub fn settle_kills(
    world: &mut World,
    kills: &[(Entity, Position)],
    progress: &mut ProgressState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    for &(entity, position) in kills {
        world_setup::spawn_pickup(world, position);
        progress.score += SCORE_PER_KILL;
        events.push(GameEvent::EnemySlain {
            position,
            score: SCORE_PER_KILL,
        });
        despawn_buffer.push(entity);
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
