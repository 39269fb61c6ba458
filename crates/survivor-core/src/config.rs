//! Tunable game configuration.
//!
//! Every numeric constant of the simulation lives here so a shell can load a
//! balance file instead of recompiling. Defaults come from `constants`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::archetypes::{self, CharacterProfile, EnemyProfile};
use crate::constants::*;
use crate::enums::{CharacterId, EnemyArchetype, UpgradeId};
use crate::errors::ConfigError;
use crate::upgrades::{self, UpgradeDef};

/// Playable rectangle (centred on the origin) and viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub half_width: f64,
    pub half_height: f64,
    pub hud_top: f64,
    pub hud_bottom: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            half_width: ARENA_HALF_WIDTH,
            half_height: ARENA_HALF_HEIGHT,
            hud_top: HUD_TOP_MARGIN,
            hud_bottom: HUD_BOTTOM_MARGIN,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
        }
    }
}

impl ArenaConfig {
    pub fn min(&self) -> DVec2 {
        DVec2::new(-self.half_width, -self.half_height + self.hud_top)
    }

    pub fn max(&self) -> DVec2 {
        DVec2::new(self.half_width, self.half_height - self.hud_bottom)
    }

    /// Clamp a point into the playable rectangle.
    pub fn clamp(&self, p: DVec2) -> DVec2 {
        p.clamp(self.min(), self.max())
    }

    pub fn viewport(&self) -> DVec2 {
        DVec2::new(self.viewport_width, self.viewport_height)
    }
}

/// Spawn director parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub wave_duration_ms: f64,
    pub enemies_per_wave_base: u32,
    pub wave_cap_growth: f64,
    pub spawn_interval_ms: f64,
    pub spawn_interval_decay: f64,
    pub spawn_interval_min_ms: f64,
    pub population_ceiling: u32,
    pub boss_wave_interval: u32,
    pub health_growth: f64,
    pub damage_growth: f64,
    pub reward_growth: f64,
    pub speed_growth: f64,
    pub speed_growth_cap: f64,
    pub spawn_radius: f64,
    pub despawn_radius: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            wave_duration_ms: WAVE_DURATION_MS,
            enemies_per_wave_base: ENEMIES_PER_WAVE_BASE,
            wave_cap_growth: WAVE_CAP_GROWTH,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_interval_decay: SPAWN_INTERVAL_DECAY,
            spawn_interval_min_ms: SPAWN_INTERVAL_MIN_MS,
            population_ceiling: POPULATION_CEILING,
            boss_wave_interval: BOSS_WAVE_INTERVAL,
            health_growth: HEALTH_GROWTH,
            damage_growth: DAMAGE_GROWTH,
            reward_growth: REWARD_GROWTH,
            speed_growth: SPEED_GROWTH,
            speed_growth_cap: SPEED_GROWTH_CAP,
            spawn_radius: SPAWN_RADIUS,
            despawn_radius: DESPAWN_RADIUS,
        }
    }
}

impl WaveConfig {
    pub fn health_scale(&self, wave: u32) -> f64 {
        self.health_growth.powi(wave.saturating_sub(1) as i32)
    }

    pub fn damage_scale(&self, wave: u32) -> f64 {
        self.damage_growth.powi(wave.saturating_sub(1) as i32)
    }

    pub fn reward_scale(&self, wave: u32) -> f64 {
        1.0 + self.reward_growth * wave.saturating_sub(1) as f64
    }

    pub fn speed_scale(&self, wave: u32) -> f64 {
        (1.0 + self.speed_growth * wave.saturating_sub(1) as f64).min(self.speed_growth_cap)
    }

    /// Maximum spawns during `wave`.
    pub fn wave_cap(&self, wave: u32) -> u32 {
        let cap = self.enemies_per_wave_base as f64
            * self.wave_cap_growth.powi(wave.saturating_sub(1) as i32);
        (cap + 1e-9).floor() as u32
    }

    pub fn is_boss_wave(&self, wave: u32) -> bool {
        self.boss_wave_interval > 0 && wave % self.boss_wave_interval == 0
    }
}

/// Enemy steering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub ranged_approach_ratio: f64,
    pub ranged_retreat_ratio: f64,
    pub ranged_approach_speed: f64,
    pub ranged_retreat_speed: f64,
    pub patrol_turn_chance: f64,
    pub patrol_speed: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            ranged_approach_ratio: RANGED_APPROACH_RATIO,
            ranged_retreat_ratio: RANGED_RETREAT_RATIO,
            ranged_approach_speed: RANGED_APPROACH_SPEED,
            ranged_retreat_speed: RANGED_RETREAT_SPEED,
            patrol_turn_chance: PATROL_TURN_CHANCE,
            patrol_speed: PATROL_SPEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub hit_radius: f64,
    pub projectile_lifetime_ms: f64,
    /// Used by ranged attackers that carry no `Weapon`.
    pub projectile_speed: f64,
    pub projectile_radius: f64,
    pub multishot_spread: f64,
    pub player_radius: f64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            hit_radius: PROJECTILE_HIT_RADIUS,
            projectile_lifetime_ms: PROJECTILE_LIFETIME_MS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,
            multishot_spread: MULTISHOT_SPREAD,
            player_radius: PLAYER_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    pub base_requirement: u32,
    pub scaling: f64,
    pub choices: usize,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            base_requirement: BASE_XP_REQUIREMENT,
            scaling: XP_SCALING,
            choices: UPGRADE_CHOICES,
        }
    }
}

impl ProgressionConfig {
    /// Experience needed to leave `level`: `floor(base * scaling^(level-1))`.
    pub fn requirement_for(&self, level: u32) -> u32 {
        let req = self.base_requirement as f64 * self.scaling.powi(level.saturating_sub(1) as i32);
        // Nudge so products like 100 * 1.2^2 don't floor to 143.
        (req + 1e-9).floor() as u32
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub dead_zone: f64,
    pub max_dt: f64,
    pub waves: WaveConfig,
    pub ai: AiConfig,
    pub combat: CombatConfig,
    pub progression: ProgressionConfig,
    pub characters: Vec<CharacterProfile>,
    pub enemies: Vec<EnemyProfile>,
    pub upgrades: Vec<UpgradeDef>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            dead_zone: DEAD_ZONE,
            max_dt: MAX_DT,
            waves: WaveConfig::default(),
            ai: AiConfig::default(),
            combat: CombatConfig::default(),
            progression: ProgressionConfig::default(),
            characters: archetypes::default_characters(),
            enemies: archetypes::default_enemies(),
            upgrades: upgrades::default_pool(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON balance file. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("dead_zone", self.dead_zone)?;
        positive("max_dt", self.max_dt)?;
        positive("arena.half_width", self.arena.half_width)?;
        positive("arena.half_height", self.arena.half_height)?;
        if self.arena.hud_top + self.arena.hud_bottom >= 2.0 * self.arena.half_height {
            return Err(ConfigError::Invalid {
                field: "arena.hud_top",
                reason: "HUD margins leave no playable area".into(),
            });
        }
        positive("waves.wave_duration_ms", self.waves.wave_duration_ms)?;
        positive("waves.spawn_interval_min_ms", self.waves.spawn_interval_min_ms)?;
        positive("waves.spawn_radius", self.waves.spawn_radius)?;
        if self.waves.despawn_radius <= self.waves.spawn_radius {
            return Err(ConfigError::Invalid {
                field: "waves.despawn_radius",
                reason: "must exceed spawn_radius".into(),
            });
        }
        for (field, growth) in [
            ("waves.health_growth", self.waves.health_growth),
            ("waves.damage_growth", self.waves.damage_growth),
            ("waves.wave_cap_growth", self.waves.wave_cap_growth),
        ] {
            if growth.is_nan() || growth < 1.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{growth} must be >= 1 so difficulty never drops"),
                });
            }
        }
        positive("combat.hit_radius", self.combat.hit_radius)?;
        positive("combat.projectile_lifetime_ms", self.combat.projectile_lifetime_ms)?;
        positive("progression.scaling", self.progression.scaling)?;
        if self.progression.base_requirement == 0 {
            return Err(ConfigError::Invalid {
                field: "progression.base_requirement",
                reason: "must be at least 1".into(),
            });
        }

        if self.characters.is_empty() {
            return Err(ConfigError::NoCharacters);
        }
        for c in &self.characters {
            positive("characters.speed", c.speed)?;
            positive("characters.attack_speed", c.attack_speed)?;
            positive("characters.health", c.health)?;
        }
        for e in &self.enemies {
            positive("enemies.attack_speed", e.attack_speed)?;
            positive("enemies.health", e.health)?;
        }
        let starter = self
            .enemies
            .iter()
            .any(|e| e.unlock_wave <= 1 && !e.boss_wave_only && e.spawn_weight > 0.0);
        if !starter {
            return Err(ConfigError::NoStarterEnemy);
        }
        Ok(())
    }

    pub fn character(&self, id: CharacterId) -> Option<&CharacterProfile> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn enemy(&self, archetype: EnemyArchetype) -> Option<&EnemyProfile> {
        self.enemies.iter().find(|e| e.archetype == archetype)
    }

    pub fn upgrade(&self, id: UpgradeId) -> Option<&UpgradeDef> {
        self.upgrades.iter().find(|u| u.id == id)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must be a positive number"),
        })
    }
}
