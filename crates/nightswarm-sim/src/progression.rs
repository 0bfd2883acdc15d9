//! Run progression — level, experience, score, and the upgrade catalog.
//!
//! Stored in `SimEngine`, NOT as ECS entities.

use hecs::World;

use nightswarm_core::components::{Health, Player, WeaponLoadout};
use nightswarm_core::constants::{EXP_PER_LEVEL, UPGRADE_COOLDOWN_FACTOR, UPGRADE_HEAL_AMOUNT};
use nightswarm_core::enums::UpgradeId;
use nightswarm_core::state::UpgradeOption;

/// Level, banked experience, and score for the current run.
#[derive(Debug, Clone)]
pub struct ProgressState {
    pub level: u32,
    pub exp: u32,
    pub score: u32,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            level: 1,
            exp: 0,
            score: 0,
        }
    }
}

impl ProgressState {
    /// Experience required to reach the next level.
    pub fn required_exp(&self) -> u32 {
        self.level * EXP_PER_LEVEL
    }

    /// Check the level-up threshold. Fires at most once per call: banked
    /// experience past a double threshold carries over and triggers again
    /// on a later frame.
    pub fn try_level_up(&mut self) -> bool {
        let required = self.required_exp();
        if self.exp >= required {
            self.exp -= required;
            self.level += 1;
            true
        } else {
            false
        }
    }
}

/// The fixed three-entry catalog offered on every level-up.
pub fn upgrade_catalog() -> Vec<UpgradeOption> {
    vec![
        UpgradeOption {
            id: UpgradeId::AddOrb,
            description: "Add an orbiting orb".to_string(),
        },
        UpgradeOption {
            id: UpgradeId::FasterSeeker,
            description: "Reduce seeker cooldown by 10%".to_string(),
        },
        UpgradeOption {
            id: UpgradeId::Heal,
            description: "Restore 30 HP".to_string(),
        },
    ]
}

/// Apply a chosen upgrade to the player's loadout and health.
pub fn apply_upgrade(world: &mut World, upgrade: UpgradeId) {
    for (_entity, (_player, loadout, health)) in
        world.query_mut::<(&Player, &mut WeaponLoadout, &mut Health)>()
    {
        match upgrade {
            UpgradeId::AddOrb => {
                loadout.orbit.count += 1;
                loadout.orbit.level += 1;
            }
            UpgradeId::FasterSeeker => {
                loadout.seeker.cooldown_ms *= UPGRADE_COOLDOWN_FACTOR;
                loadout.seeker.level += 1;
            }
            UpgradeId::Heal => {
                health.hp = (health.hp + UPGRADE_HEAL_AMOUNT).min(health.max_hp);
            }
        }
    }
}
