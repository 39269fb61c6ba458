//! Game state snapshot: the read-only view handed to the render shell each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{EntityId, SimTime};

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Entities sorted by id.
    pub entities: Vec<EntityView>,
    pub hud: HudView,
    /// Upgrades on offer (non-empty only in `LevelUp`).
    pub upgrade_offer: Vec<UpgradeView>,
    pub events: Vec<GameEvent>,
}

/// Drawing data for one entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: DVec2,
    pub facing: f64,
    pub scale: f64,
    pub radius: f64,
    pub health: Option<HealthView>,
    pub archetype: Option<EnemyArchetype>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthView {
    pub current: f64,
    pub max: f64,
}

/// Heads-up display values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub character: Option<CharacterId>,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
    pub health: HealthView,
    pub score: u64,
    pub kills: u32,
    pub survival_secs: f64,
    pub wave: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeView {
    pub id: UpgradeId,
    pub name: String,
    pub description: String,
}
