//! Events emitted by the simulation for audio and UI feedback.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    GameStarted { character: CharacterId },
    WaveStarted { wave: u32 },
    EnemySpawned { id: EntityId, archetype: EnemyArchetype, position: DVec2 },
    ProjectileFired { owner: EntityId, critical: bool },
    EnemyKilled { id: EntityId, archetype: EnemyArchetype, reward: u32 },
    PlayerDamaged { amount: f64, remaining: f64 },
    LevelUp { level: u32 },
    UpgradeApplied { upgrade: UpgradeId },
    GameOver { survival_secs: f64, score: u64 },
}
