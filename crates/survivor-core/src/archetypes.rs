//! Character and enemy archetype tables.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{AiMode, CharacterId, EnemyArchetype};

/// Base stats for a playable character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub id: CharacterId,
    pub name: String,
    pub health: f64,
    pub damage: f64,
    pub speed: f64,
    pub attack_speed: f64,
    pub range: f64,
    pub projectile_speed: f64,
    pub critical_chance: f64,
    pub critical_multiplier: f64,
    pub pierce: u32,
}

/// Base stats for an enemy archetype, before wave scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub archetype: EnemyArchetype,
    pub health: f64,
    pub damage: f64,
    pub speed: f64,
    pub reward: u32,
    pub attack_speed: f64,
    pub range: f64,
    pub ai: AiMode,
    /// Fires projectiles instead of striking in melee.
    pub ranged: bool,
    pub projectile_speed: f64,
    pub radius: f64,
    /// Relative weight in the spawn roll once unlocked.
    pub spawn_weight: f64,
    /// First wave in which this archetype may spawn.
    pub unlock_wave: u32,
    /// Only rolled on boss waves.
    pub boss_wave_only: bool,
}

pub fn default_characters() -> Vec<CharacterProfile> {
    vec![
        character(CharacterId::Warrior, "Warrior", 120.0, 12.0, 140.0, 1.2, 100.0, PROJECTILE_SPEED, CRITICAL_CHANCE_BASE, 1),
        character(CharacterId::Mage, "Mage", 80.0, 18.0, 130.0, 0.8, 150.0, 250.0, CRITICAL_CHANCE_BASE, 1),
        character(CharacterId::Archer, "Archer", 100.0, 15.0, 160.0, 1.5, 200.0, 350.0, CRITICAL_CHANCE_BASE, 2),
        character(CharacterId::Rogue, "Rogue", 90.0, 14.0, 180.0, 2.0, 110.0, 400.0, 0.15, 1),
    ]
}

#[allow(clippy::too_many_arguments)]
fn character(
    id: CharacterId,
    name: &str,
    health: f64,
    damage: f64,
    speed: f64,
    attack_speed: f64,
    range: f64,
    projectile_speed: f64,
    critical_chance: f64,
    pierce: u32,
) -> CharacterProfile {
    CharacterProfile {
        id,
        name: name.to_string(),
        health,
        damage,
        speed,
        attack_speed,
        range,
        projectile_speed,
        critical_chance,
        critical_multiplier: CRITICAL_MULTIPLIER,
        pierce,
    }
}

pub fn default_enemies() -> Vec<EnemyProfile> {
    EnemyArchetype::ALL.iter().map(|&a| enemy_profile(a)).collect()
}

/// Default profile for an archetype.
pub fn enemy_profile(archetype: EnemyArchetype) -> EnemyProfile {
    let melee = |health, damage, speed, reward, radius, weight, unlock| EnemyProfile {
        archetype,
        health,
        damage,
        speed,
        reward,
        attack_speed: 1.0,
        range: MELEE_RANGE,
        ai: AiMode::Chase,
        ranged: false,
        projectile_speed: 0.0,
        radius,
        spawn_weight: weight,
        unlock_wave: unlock,
        boss_wave_only: false,
    };

    match archetype {
        EnemyArchetype::Basic => melee(20.0, 5.0, 80.0, 10, 12.0, 60.0, 1),
        EnemyArchetype::Fast => melee(15.0, 4.0, 120.0, 12, 12.0, 20.0, 1),
        EnemyArchetype::Tank => melee(50.0, 8.0, 60.0, 25, 16.0, 10.0, 2),
        EnemyArchetype::Elite => EnemyProfile {
            attack_speed: 0.8,
            range: 180.0,
            ai: AiMode::Ranged,
            ranged: true,
            projectile_speed: 220.0,
            ..melee(40.0, 12.0, 100.0, 30, 16.0, 8.0, 3)
        },
        EnemyArchetype::Boss => EnemyProfile {
            attack_speed: 0.5,
            range: 220.0,
            ai: AiMode::Ranged,
            ranged: true,
            projectile_speed: 200.0,
            boss_wave_only: true,
            ..melee(200.0, 20.0, 70.0, 100, 32.0, 4.0, BOSS_WAVE_INTERVAL)
        },
    }
}
