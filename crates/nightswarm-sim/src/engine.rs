//! Simulation engine — the core of the game.
//!
//! `SimEngine` owns the hecs ECS world, processes player commands, runs the
//! frame pipeline in a fixed order, and produces `RunSnapshot`s. Completely
//! headless (no renderer dependency), enabling deterministic testing.
//!
//! The external driver owns timing: it measures the real delta between
//! display-synchronized callbacks, clamps it to sane bounds, and calls
//! `advance` once per frame. All waiting (cooldowns, the level-up pause) is
//! state checked at the top of the next frame — nothing here blocks.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nightswarm_core::commands::PlayerCommand;
use nightswarm_core::constants::{DEFAULT_SPAWN_PROBABILITY, NOMINAL_FRAME_MS, RUN_DURATION_MS};
use nightswarm_core::enums::{RunPhase, UpgradeId};
use nightswarm_core::events::GameEvent;
use nightswarm_core::state::{RunSnapshot, UpgradeOption};
use nightswarm_core::types::RunClock;

use crate::progression::{self, ProgressState};
use crate::systems;
use crate::world_setup;

/// Configuration for a new engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same run.
    pub seed: u64,
    /// Per-frame enemy spawn probability. Zero disables spawning
    /// (useful for tests).
    pub spawn_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawn_probability: DEFAULT_SPAWN_PROBABILITY,
        }
    }
}

/// The simulation engine. Owns the ECS world and all run state.
pub struct SimEngine {
    world: World,
    clock: RunClock,
    phase: RunPhase,
    spawn_probability: f64,
    rng: ChaCha8Rng,
    progress: ProgressState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    upgrade_choices: Vec<UpgradeOption>,
}

impl SimEngine {
    /// Create a new engine with the given config. No run is started yet.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            clock: RunClock::default(),
            phase: RunPhase::default(),
            spawn_probability: config.spawn_probability,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            progress: ProgressState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            upgrade_choices: Vec::new(),
        }
    }

    /// Start a run immediately and return the initial snapshot.
    pub fn init_run(&mut self) -> RunSnapshot {
        self.start_run();
        self.snapshot()
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting
    /// snapshot. `dt_ms` is the externally measured delta (the driver
    /// clamps it); `intent` is the normalized movement direction, or
    /// `None` when idle. A zero delta changes nothing.
    pub fn advance(&mut self, dt_ms: f64, intent: Option<DVec2>) -> RunSnapshot {
        self.process_commands();

        if self.phase == RunPhase::Playing && dt_ms > 0.0 {
            self.clock.advance(dt_ms);
            self.run_frame(dt_ms, intent);
        }

        self.snapshot()
    }

    /// Apply a level-up choice and resume play. Ignored outside the
    /// level-up pause.
    pub fn apply_upgrade(&mut self, upgrade: UpgradeId) {
        if self.phase != RunPhase::LevelUp {
            return;
        }
        progression::apply_upgrade(&mut self.world, upgrade);
        self.upgrade_choices.clear();
        self.phase = RunPhase::Playing;
    }

    /// Get the current run phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Get the current run clock.
    pub fn clock(&self) -> RunClock {
        self.clock
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for test setups).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a read-only reference to the progression state.
    #[cfg(test)]
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    /// Get a mutable reference to the progression state (for test setups).
    #[cfg(test)]
    pub fn progress_mut(&mut self) -> &mut ProgressState {
        &mut self.progress
    }

    /// Spawn an enemy at an explicit position and speed (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(
        &mut self,
        position: nightswarm_core::types::Position,
        speed: f64,
    ) -> hecs::Entity {
        world_setup::spawn_enemy_at(&mut self.world, position, speed)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if self.phase == RunPhase::Start {
                    self.start_run();
                }
            }
            PlayerCommand::Restart => {
                if self.phase.is_over() {
                    self.start_run();
                }
            }
            PlayerCommand::ChooseUpgrade { upgrade } => {
                self.apply_upgrade(upgrade);
            }
        }
    }

    /// Reset everything and enter Playing. The RNG is not reseeded, so
    /// successive runs on one engine differ.
    fn start_run(&mut self) {
        self.world = World::new();
        world_setup::spawn_player(&mut self.world);
        self.clock = RunClock::default();
        self.progress = ProgressState::default();
        self.upgrade_choices.clear();
        self.phase = RunPhase::Playing;
        self.events.push(GameEvent::RunStarted);
    }

    /// Run one frame of simulation in the fixed order.
    fn run_frame(&mut self, dt_ms: f64, intent: Option<DVec2>) {
        let scale = dt_ms / NOMINAL_FRAME_MS;

        // 1. Movement intent, clamped to the arena.
        systems::movement::apply_intent(&mut self.world, intent, scale);
        // 2. Spawn roll.
        systems::spawner::run(&mut self.world, &mut self.rng, self.spawn_probability);
        // 3. Enemy pursuit, then melee contact.
        systems::movement::seek_player(&mut self.world, scale);
        let player_down =
            systems::contact::run(&mut self.world, &mut self.events, &mut self.despawn_buffer);
        // 4. Weapons. Kills here drop pickups before the pickup pass runs.
        systems::orbit::run(
            &mut self.world,
            scale,
            &mut self.progress,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        systems::seeker::run(&mut self.world, dt_ms, &mut self.events);
        // 5. Seeker rounds: homing, bounds, impacts.
        systems::projectiles::run(
            &mut self.world,
            scale,
            &mut self.progress,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 6. Pickup collection.
        systems::pickups::run(
            &mut self.world,
            &mut self.progress,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 7. Level-up check: pause on the upgrade choice.
        if self.progress.try_level_up() {
            self.upgrade_choices = progression::upgrade_catalog();
            self.phase = RunPhase::LevelUp;
            self.events.push(GameEvent::LevelUp {
                level: self.progress.level,
            });
        }
        // 8. Loss, then win. The win check runs last: reaching the run
        // duration wins even on a frame that also emptied the hp bar.
        if player_down {
            self.phase = RunPhase::Lost;
            self.events.push(GameEvent::RunLost {
                survived_ms: self.clock.elapsed_ms,
                score: self.progress.score,
            });
        }
        if self.clock.elapsed_ms >= RUN_DURATION_MS {
            self.phase = RunPhase::Won;
            self.events.push(GameEvent::RunWon {
                score: self.progress.score,
            });
        }
    }

    /// Build the frame's snapshot, draining pending events into it.
    fn snapshot(&mut self) -> RunSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.clock,
            self.phase,
            &self.progress,
            &self.upgrade_choices,
            events,
        )
    }
}
