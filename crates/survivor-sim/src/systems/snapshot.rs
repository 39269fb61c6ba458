//! Snapshot system: queries the ECS world and builds a `GameSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use survivor_core::components::*;
use survivor_core::config::GameConfig;
use survivor_core::enums::{EntityKind, GamePhase, UpgradeId};
use survivor_core::events::GameEvent;
use survivor_core::state::*;
use survivor_core::types::SimTime;

use crate::progression::Progression;
use crate::store::entity_id;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: u32,
    progression: &Progression,
    config: &GameConfig,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        entities: build_entities(world),
        hud: build_hud(world, time, wave, progression),
        upgrade_offer: build_offer(&progression.offer, config),
        events,
    }
}

/// Drawable entities, destroyed ones excluded, sorted by id.
fn build_entities(world: &World) -> Vec<EntityView> {
    let mut query = world.query::<(
        &Transform,
        Option<&Health>,
        Option<&Appearance>,
        Option<&Lifecycle>,
        Option<&PlayerInfo>,
        Option<&EnemyInfo>,
        Option<&Projectile>,
    )>();

    let mut views: Vec<EntityView> = query
        .iter()
        .filter(|(_, (_, _, _, lifecycle, ..))| !lifecycle.is_some_and(Lifecycle::is_destroyed))
        .filter_map(|(entity, (transform, health, appearance, _, player, enemy, projectile))| {
            let kind = if player.is_some() {
                EntityKind::Player
            } else if enemy.is_some() {
                EntityKind::Enemy
            } else if projectile.is_some() {
                EntityKind::Projectile
            } else {
                return None;
            };
            Some(EntityView {
                id: entity_id(entity),
                kind,
                position: transform.position,
                facing: transform.facing,
                scale: transform.scale,
                radius: appearance.map_or(0.0, |a| a.radius),
                health: health.map(|h| HealthView {
                    current: h.current,
                    max: h.max,
                }),
                archetype: enemy.map(|e| e.archetype),
            })
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}

fn build_hud(world: &World, time: &SimTime, wave: u32, progression: &Progression) -> HudView {
    let mut query = world.query::<(&PlayerInfo, &Health)>();
    let player = query.iter().next().map(|(_, (info, health))| (*info, *health));

    let mut hud = HudView {
        score: progression.score,
        kills: progression.kills,
        survival_secs: time.elapsed_secs,
        wave,
        ..Default::default()
    };
    if let Some((info, health)) = player {
        hud.character = Some(info.character);
        hud.level = info.level;
        hud.experience = info.experience;
        hud.experience_to_next = info.experience_to_next;
        hud.health = HealthView {
            current: health.current,
            max: health.max,
        };
    }
    hud
}

fn build_offer(offer: &[UpgradeId], config: &GameConfig) -> Vec<UpgradeView> {
    offer
        .iter()
        .filter_map(|id| config.upgrade(*id))
        .map(|def| UpgradeView {
            id: def.id,
            name: def.name.clone(),
            description: def.description.clone(),
        })
        .collect()
}
