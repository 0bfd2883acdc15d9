//! Player commands sent from the external driver to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::enums::UpgradeId;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new run from the start screen.
    StartRun,
    /// Choose one of the offered level-up upgrades. Only valid while the
    /// run is paused on a level-up; resumes play when applied.
    ChooseUpgrade { upgrade: UpgradeId },
    /// Restart into a fresh run after a win or loss.
    Restart,
}
