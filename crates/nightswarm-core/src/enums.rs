//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level run state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Engine created, no run started yet.
    #[default]
    Start,
    /// Simulation advancing every frame.
    Playing,
    /// Paused on the level-up choice. `advance` is a no-op until an
    /// upgrade is chosen.
    LevelUp,
    /// Run duration survived.
    Won,
    /// Player hit points reached zero.
    Lost,
}

impl RunPhase {
    /// Whether the run has reached a terminal state.
    pub fn is_over(&self) -> bool {
        matches!(self, RunPhase::Won | RunPhase::Lost)
    }
}

/// Level-up upgrade identifiers. The catalog is fixed: every level-up
/// offers all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    /// Add one orb to the orbit weapon's ring.
    AddOrb,
    /// Multiply the seeker cooldown by `UPGRADE_COOLDOWN_FACTOR`.
    FasterSeeker,
    /// Restore `UPGRADE_HEAL_AMOUNT` hit points, clamped to max hp.
    Heal,
}

/// Color tag carried on every view so the renderer needs no knowledge of
/// entity kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    #[default]
    Blue,
    Red,
    Cyan,
    Yellow,
    Orange,
}
