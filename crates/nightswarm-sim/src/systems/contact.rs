//! Enemy–player contact resolution.
//!
//! Contact is asymmetric: the enemy lands a single melee hit and is
//! consumed, whether or not the player survives it.

use hecs::{Entity, World};

use nightswarm_core::components::{Body, Enemy, Health, Player};
use nightswarm_core::constants::ENEMY_CONTACT_DAMAGE;
use nightswarm_core::events::GameEvent;
use nightswarm_core::types::Position;

/// Resolve every enemy overlapping the player. Returns true when the
/// player's hit points reached zero this frame.
pub fn run(
    world: &mut World,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> bool {
    let (player_pos, player_radius) = {
        let mut query = world.query::<(&Player, &Position, &Body)>();
        match query.iter().next() {
            Some((_, (_, pos, body))) => (*pos, body.radius),
            None => return false,
        }
    };

    despawn_buffer.clear();
    {
        let mut query = world.query::<(&Enemy, &Position, &Body)>();
        for (entity, (_, pos, body)) in query.iter() {
            if pos.distance_to(&player_pos) < player_radius + body.radius {
                despawn_buffer.push(entity);
            }
        }
    }

    let hits = despawn_buffer.len() as u32;
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    if hits == 0 {
        return false;
    }

    let mut player_down = false;
    for (_entity, (_player, health)) in world.query_mut::<(&Player, &mut Health)>() {
        for _ in 0..hits {
            health.hp = (health.hp - ENEMY_CONTACT_DAMAGE).max(0.0);
            events.push(GameEvent::PlayerHit {
                damage: ENEMY_CONTACT_DAMAGE,
                hp_remaining: health.hp,
            });
        }
        player_down = health.hp <= 0.0;
    }
    player_down
}
