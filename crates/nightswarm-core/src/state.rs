//! Run snapshot — the complete visible state handed to the renderer each
//! frame.

use serde::{Deserialize, Serialize};

use crate::enums::{RunPhase, Tint, UpgradeId};
use crate::events::GameEvent;
use crate::types::Position;

/// Complete render-ready world state produced by each `advance` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSnapshot {
    /// Frames simulated so far.
    pub frame: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
    pub phase: RunPhase,
    pub level: u32,
    /// Experience banked toward the next level.
    pub exp: u32,
    /// Experience required to reach the next level.
    pub exp_to_next: u32,
    pub score: u32,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
    /// Current orb positions of the orbit weapon.
    pub orbs: Vec<OrbView>,
    /// Offered upgrades; non-empty only while paused on a level-up.
    pub upgrade_choices: Vec<UpgradeOption>,
    /// Events since the previous snapshot.
    pub events: Vec<GameEvent>,
}

impl RunSnapshot {
    /// Elapsed time formatted mm:ss for the HUD.
    pub fn clock_display(&self) -> String {
        let total_secs = (self.elapsed_ms / 1000.0) as u64;
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

/// Player state for rendering and the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub radius: f64,
    pub hp: f64,
    pub max_hp: f64,
    pub tint: Tint,
}

/// One enemy on screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub radius: f64,
    pub hp: f64,
    pub max_hp: f64,
    pub tint: Tint,
}

/// One seeker round in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub radius: f64,
    pub tint: Tint,
}

/// One experience pickup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickupView {
    pub position: Position,
    pub value: u32,
    pub tint: Tint,
}

/// One orb of the orbit weapon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrbView {
    pub position: Position,
    pub radius: f64,
    pub tint: Tint,
}

/// One entry of the level-up choice modal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeOption {
    pub id: UpgradeId,
    /// Human-readable description for the choice button.
    pub description: String,
}
