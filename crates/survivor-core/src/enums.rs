//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game state machine.
///
/// `Menu -> Playing -> (Paused <-> Playing) -> LevelUp -> Playing -> GameOver -> Menu`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    /// Waiting for the player to pick an upgrade. The world is frozen.
    LevelUp,
    GameOver,
}

/// Tags used for targeting and store lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Player,
    Enemy,
    Projectile,
    /// Attacks by spawning projectiles instead of dealing melee damage.
    Ranged,
}

/// Enemy steering behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiMode {
    /// Head straight for the player at full speed.
    #[default]
    Chase,
    /// Keep the player inside a band of the attack range.
    Ranged,
    /// Wander, occasionally picking a new random heading.
    Patrol,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyArchetype {
    #[default]
    Basic,
    Fast,
    Tank,
    Elite,
    Boss,
}

impl EnemyArchetype {
    pub const ALL: [EnemyArchetype; 5] = [
        EnemyArchetype::Basic,
        EnemyArchetype::Fast,
        EnemyArchetype::Tank,
        EnemyArchetype::Elite,
        EnemyArchetype::Boss,
    ];
}

/// Playable character archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterId {
    #[default]
    Warrior,
    Mage,
    Archer,
    Rogue,
}

/// Why an entity was flagged destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DestroyCause {
    /// Health reached zero.
    Killed,
    /// Drifted beyond the despawn radius.
    Despawned,
    /// Projectile lifetime ran out.
    Expired,
    /// Projectile penetration exhausted.
    Spent,
}

/// Identifier of an entry in the upgrade pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeId {
    DamageBoost,
    CriticalChance,
    MovementSpeed,
    AttackSpeed,
    HealthBoost,
    HealthRegen,
    AttackRange,
    DoubleShot,
    PiercingShot,
}

/// The single player stat an upgrade mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeStat {
    Damage,
    CriticalChance,
    MoveSpeed,
    AttackSpeed,
    MaxHealth,
    HealthRegen,
    AttackRange,
    Multishot,
    Pierce,
}

/// How an upgrade's amount is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// `stat += amount`
    Flat,
    /// `stat *= 1 + amount`
    Percent,
}

/// Coarse entity kind for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Projectile,
}
