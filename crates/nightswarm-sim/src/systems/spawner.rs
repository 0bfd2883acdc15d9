//! Probabilistic edge spawner.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::world_setup;

/// Roll the per-frame spawn chance; at most one enemy appears per frame.
/// No cap on the total enemy count.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, probability: f64) {
    if probability > 0.0 && rng.gen_bool(probability.min(1.0)) {
        world_setup::spawn_edge_enemy(world, rng);
    }
}
