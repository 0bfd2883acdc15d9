//! Simulation engine for NIGHTSWARM.
//!
//! Owns the hecs ECS world, advances one frame per external driver call,
//! and produces `RunSnapshot`s for the renderer. Completely headless.

pub mod engine;
pub mod guidance;
pub mod progression;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimEngine};
pub use nightswarm_core as core;

#[cfg(test)]
mod tests;
