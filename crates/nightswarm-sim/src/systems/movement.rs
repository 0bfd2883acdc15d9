//! Player intent application and enemy pursuit.

use glam::DVec2;
use hecs::World;

use nightswarm_core::components::{Body, Enemy, MoveSpeed, Player};
use nightswarm_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use nightswarm_core::types::{Position, Velocity};

/// Move the player along the supplied intent direction and clamp to the
/// arena. `scale` converts per-tick speed to this frame's dt.
pub fn apply_intent(world: &mut World, intent: Option<DVec2>, scale: f64) {
    for (_entity, (_player, pos, speed, body)) in
        world.query_mut::<(&Player, &mut Position, &MoveSpeed, &Body)>()
    {
        if let Some(dir) = intent {
            let dir = dir.normalize_or_zero();
            pos.0 += dir * speed.per_tick * scale;
        }
        pos.0.x = pos.0.x.clamp(body.radius, ARENA_WIDTH - body.radius);
        pos.0.y = pos.0.y.clamp(body.radius, ARENA_HEIGHT - body.radius);
    }
}

/// Steer every enemy toward the player and integrate its position.
pub fn seek_player(world: &mut World, scale: f64) {
    let player_pos = match player_position(world) {
        Some(p) => p,
        None => return,
    };

    for (_entity, (_enemy, pos, vel, speed)) in
        world.query_mut::<(&Enemy, &mut Position, &mut Velocity, &MoveSpeed)>()
    {
        vel.0 = pos.direction_to(&player_pos) * speed.per_tick;
        pos.0 += vel.0 * scale;
    }
}

/// Current player position, if a run is set up.
pub fn player_position(world: &World) -> Option<Position> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}
