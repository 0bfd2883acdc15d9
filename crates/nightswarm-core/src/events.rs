//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Per-frame events for the external UI/audio layer. Drained into each
/// snapshot; a given event is delivered exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A fresh run began.
    RunStarted,
    /// An enemy was killed by a weapon.
    EnemySlain { position: Position, score: u32 },
    /// The player took a melee hit.
    PlayerHit { damage: f64, hp_remaining: f64 },
    /// A seeker round launched at a target.
    SeekerFired { target_position: Position },
    /// An experience pickup was collected.
    PickupCollected { value: u32, exp: u32 },
    /// The player leveled up; the run is paused on the upgrade choice.
    LevelUp { level: u32 },
    /// The run timer expired with the player alive.
    RunWon { score: u32 },
    /// Player hit points reached zero.
    RunLost { survived_ms: f64, score: u32 },
}
