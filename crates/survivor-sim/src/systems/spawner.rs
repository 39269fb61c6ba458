//! Spawn director: paces enemy spawns and escalates waves over time.

use std::f64::consts::TAU;

use glam::DVec2;
use hecs::World;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use survivor_core::archetypes::EnemyProfile;
use survivor_core::components::{EnemyInfo, Lifecycle};
use survivor_core::config::{GameConfig, WaveConfig};
use survivor_core::events::GameEvent;

use crate::store::entity_id;
use crate::world_setup;

use super::find_player;

/// Wave progress carried across ticks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveDirector {
    pub wave: u32,
    pub wave_timer_ms: f64,
    pub spawn_timer_ms: f64,
    pub spawn_interval_ms: f64,
    pub spawned_this_wave: u32,
    pub wave_cap: u32,
}

impl WaveDirector {
    pub fn new(config: &WaveConfig) -> Self {
        Self {
            wave: 1,
            wave_timer_ms: 0.0,
            spawn_timer_ms: 0.0,
            spawn_interval_ms: config.spawn_interval_ms.max(config.spawn_interval_min_ms),
            spawned_this_wave: 0,
            wave_cap: config.wave_cap(1),
        }
    }

    /// Move to the next wave: reset the per-wave counters, raise the cap and
    /// shorten the spawn interval down to its floor.
    pub fn advance_wave(&mut self, config: &WaveConfig) {
        self.wave += 1;
        self.wave_timer_ms = 0.0;
        self.spawned_this_wave = 0;
        self.wave_cap = config.wave_cap(self.wave).max(self.wave_cap);
        self.spawn_interval_ms =
            (self.spawn_interval_ms * config.spawn_interval_decay).max(config.spawn_interval_min_ms);
    }

    fn cap_reached(&self) -> bool {
        self.spawned_this_wave >= self.wave_cap
    }
}

/// Live (not destroyed) enemies in the world.
pub fn population(world: &World) -> u32 {
    let mut query = world.query::<(&EnemyInfo, &Lifecycle)>();
    let count = query
        .iter()
        .filter(|(_, (_, lifecycle))| !lifecycle.is_destroyed())
        .count();
    count as u32
}

/// Advance wave timers and spawn at most one enemy.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut WaveDirector,
    config: &GameConfig,
    dt: f64,
    events: &mut Vec<GameEvent>,
) {
    let dt_ms = dt * 1000.0;
    director.wave_timer_ms += dt_ms;
    director.spawn_timer_ms += dt_ms;

    if director.wave_timer_ms >= config.waves.wave_duration_ms {
        director.advance_wave(&config.waves);
        log::debug!(
            "wave {} started (cap {}, interval {:.0} ms)",
            director.wave,
            director.wave_cap,
            director.spawn_interval_ms
        );
        events.push(GameEvent::WaveStarted {
            wave: director.wave,
        });
    }

    if director.spawn_timer_ms < director.spawn_interval_ms
        || director.cap_reached()
        || population(world) >= config.waves.population_ceiling
    {
        return;
    }

    let Some((_, player_pos)) = find_player(world) else {
        log::warn!("no player in the world, spawn skipped");
        return;
    };
    let Some(profile) = choose_archetype(rng, director.wave, config) else {
        log::warn!("no enemy archetype available for wave {}", director.wave);
        return;
    };

    let position = spawn_position(rng, player_pos, config.waves.spawn_radius);
    let entity = world_setup::spawn_enemy(
        world,
        profile,
        director.wave,
        position,
        &config.waves,
        &config.combat,
    );
    director.spawned_this_wave += 1;
    director.spawn_timer_ms = 0.0;

    log::debug!("spawned {:?} {entity:?} at {position}", profile.archetype);
    events.push(GameEvent::EnemySpawned {
        id: entity_id(entity),
        archetype: profile.archetype,
        position,
    });
}

/// Weighted pick among the archetypes unlocked by `wave`. Boss-only
/// archetypes are eligible on boss waves only.
pub fn choose_archetype<'a>(
    rng: &mut ChaCha8Rng,
    wave: u32,
    config: &'a GameConfig,
) -> Option<&'a EnemyProfile> {
    let boss_wave = config.waves.is_boss_wave(wave);
    let candidates: Vec<&EnemyProfile> = config
        .enemies
        .iter()
        .filter(|e| e.unlock_wave <= wave && (boss_wave || !e.boss_wave_only))
        .filter(|e| e.spawn_weight.is_finite() && e.spawn_weight > 0.0)
        .collect();

    let weights = WeightedIndex::new(candidates.iter().map(|e| e.spawn_weight)).ok()?;
    Some(candidates[weights.sample(rng)])
}

/// Uniformly random point on the circle of `radius` around `center`.
pub fn spawn_position(rng: &mut ChaCha8Rng, center: DVec2, radius: f64) -> DVec2 {
    let angle = rng.gen_range(0.0..TAU);
    center + DVec2::from_angle(angle) * radius
}
