//! ECS components for hecs entities.
//!
//! Components are plain data. Behaviour is driven by which components an
//! entity carries; game logic lives in systems, not here.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

/// World-space placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec2,
    /// Facing angle in radians (`atan2(vy, vx)` of the last non-zero velocity).
    pub facing: f64,
    pub scale: f64,
}

impl Transform {
    pub fn at(position: DVec2) -> Self {
        Self {
            position,
            facing: 0.0,
            scale: 1.0,
        }
    }
}

/// Hit points. `current` stays within `[0, max]`; `max` never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

impl Health {
    pub fn full(max: f64) -> Self {
        Self { current: max, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub velocity: DVec2,
    /// Scalar speed in world units per second.
    pub speed: f64,
    /// Steering target. Velocity is recomputed towards it every tick and the
    /// target is dropped once inside the dead-zone.
    pub target: Option<DVec2>,
}

impl Movement {
    pub fn with_speed(speed: f64) -> Self {
        Self {
            velocity: DVec2::ZERO,
            speed,
            target: None,
        }
    }
}

/// Auto-attack capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combat {
    pub damage: f64,
    /// Attacks per second.
    pub attack_speed: f64,
    pub range: f64,
    /// Milliseconds since the last attack. Grows every tick, reset to 0 on attack.
    pub since_last_attack_ms: f64,
    /// Tags this attacker may damage.
    pub targets: Vec<Tag>,
}

/// Projectile launcher carried by ranged attackers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub damage_multiplier: f64,
    pub projectile_speed: f64,
    pub projectile_lifetime_ms: f64,
    /// Targets each projectile may hit (at least 1).
    pub pierce: u32,
    /// Probability in `[0, 1]` that a shot is critical.
    pub critical_chance: f64,
    pub critical_multiplier: f64,
    /// Extra projectiles fanned around the aim direction.
    pub multishot: u32,
}

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyInfo {
    pub archetype: EnemyArchetype,
    /// Experience (and score) awarded on kill.
    pub reward: u32,
    pub ai: AiMode,
}

/// Marks an entity as a projectile in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: f64,
    pub lifetime_ms: f64,
    /// Remaining hits before the projectile is spent.
    pub penetration: u32,
    /// Weak reference to the shooter; hostility is derived from it.
    pub owner: EntityId,
    /// Entities already hit, so a piercing shot never hits the same one twice.
    pub hits: Vec<EntityId>,
}

/// Marks the player entity and holds its progression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub character: CharacterId,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
}

/// Passive healing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Regeneration {
    pub per_second: f64,
}

/// Tag set of an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tags(pub Vec<Tag>);

impl Tags {
    pub fn has(&self, tag: Tag) -> bool {
        self.0.contains(&tag)
    }

    pub fn any_of(&self, tags: &[Tag]) -> bool {
        self.0.iter().any(|t| tags.contains(t))
    }
}

/// Destroyed flag. Entities are removed only by the cleanup sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifecycle {
    pub destroyed: Option<DestroyCause>,
}

impl Lifecycle {
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.is_some()
    }
}

/// Render-relevant size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub radius: f64,
}
