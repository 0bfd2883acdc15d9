//! Experience pickup collection.

use hecs::{Entity, World};

use nightswarm_core::components::{ExpValue, Pickup};
use nightswarm_core::constants::PICKUP_MAGNET_RADIUS;
use nightswarm_core::events::GameEvent;
use nightswarm_core::types::Position;

use crate::progression::ProgressState;
use crate::systems::movement;

/// Collect every pickup within the magnet radius of the player's center
/// and bank its value. The magnet radius is far wider than the player's
/// hit circle.
pub fn run(
    world: &mut World,
    progress: &mut ProgressState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let player_pos = match movement::player_position(world) {
        Some(p) => p,
        None => return,
    };

    despawn_buffer.clear();
    let mut collected: Vec<u32> = Vec::new();
    for (entity, (_pickup, pos, exp)) in world.query_mut::<(&Pickup, &Position, &ExpValue)>() {
        if pos.distance_to(&player_pos) < PICKUP_MAGNET_RADIUS {
            despawn_buffer.push(entity);
            collected.push(exp.value);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for value in collected {
        progress.exp += value;
        events.push(GameEvent::PickupCollected {
            value,
            exp: progress.exp,
        });
    }
}
