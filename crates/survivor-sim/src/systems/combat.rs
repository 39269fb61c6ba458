//! Combat resolver.
//!
//! Three steps per tick:
//! 1. Attack pass: cooldowns advance, ready attackers pick the nearest
//!    hostile in range and strike in melee or request projectiles.
//! 2. Projectile pass: projectiles age, then hit the nearest hostile within
//!    the hit radius.
//! 3. Commit: requested projectiles are spawned.
//!
//! Damage only ever flags entities destroyed; removal happens in cleanup.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use survivor_core::components::*;
use survivor_core::config::{CombatConfig, GameConfig};
use survivor_core::enums::{DestroyCause, Tag};
use survivor_core::events::GameEvent;
use survivor_core::types::{direction, probability, rotate, EntityId};

use crate::store::{entity_id, entity_of};
use crate::world_setup::{self, ProjectileRequest};

/// Snapshot of an attacker whose cooldown has elapsed.
struct ReadyAttacker {
    entity: Entity,
    position: DVec2,
    damage: f64,
    range: f64,
    targets: Vec<Tag>,
    ranged: bool,
    weapon: Option<Weapon>,
}

/// Run all combat steps for one tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    dt: f64,
    pending: &mut Vec<ProjectileRequest>,
    events: &mut Vec<GameEvent>,
) {
    let dt_ms = dt * 1000.0;
    attack_pass(world, rng, &config.combat, dt_ms, pending, events);
    projectile_pass(world, &config.combat, dt_ms, events);
    commit_projectiles(world, pending, &config.combat, events);
}

/// Advance cooldowns and resolve attacks for every ready attacker.
pub fn attack_pass(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    combat_config: &CombatConfig,
    dt_ms: f64,
    pending: &mut Vec<ProjectileRequest>,
    events: &mut Vec<GameEvent>,
) {
    let mut ready = Vec::new();
    for (entity, (transform, combat, tags, weapon, lifecycle)) in world.query_mut::<(
        Option<&Transform>,
        &mut Combat,
        Option<&Tags>,
        Option<&Weapon>,
        Option<&Lifecycle>,
    )>() {
        combat.since_last_attack_ms += dt_ms;

        let Some(transform) = transform else {
            log::warn!("entity {entity:?} has Combat but no Transform, skipped");
            continue;
        };
        if lifecycle.is_some_and(Lifecycle::is_destroyed) || combat.attack_speed <= 0.0 {
            continue;
        }
        if combat.since_last_attack_ms < 1000.0 / combat.attack_speed {
            continue;
        }
        ready.push(ReadyAttacker {
            entity,
            position: transform.position,
            damage: combat.damage,
            range: combat.range,
            targets: combat.targets.clone(),
            ranged: tags.is_some_and(|t| t.has(Tag::Player) || t.has(Tag::Ranged)),
            weapon: weapon.copied(),
        });
    }

    for attacker in ready {
        // An earlier attacker this pass may have killed this one.
        if is_destroyed(world, attacker.entity) {
            continue;
        }
        let Some((target, target_pos)) =
            nearest_target(world, attacker.position, &attacker.targets, attacker.range, &[])
        else {
            continue;
        };

        if let Ok(mut combat) = world.get::<&mut Combat>(attacker.entity) {
            combat.since_last_attack_ms = 0.0;
        }

        if attacker.ranged {
            request_volley(&attacker, target_pos, rng, combat_config, pending);
        } else {
            apply_damage(world, target, attacker.damage, events);
        }
    }
}

/// Queue one projectile per barrel, fanned around the aim direction.
fn request_volley(
    attacker: &ReadyAttacker,
    target_pos: DVec2,
    rng: &mut ChaCha8Rng,
    combat_config: &CombatConfig,
    pending: &mut Vec<ProjectileRequest>,
) {
    let weapon = attacker.weapon.unwrap_or(Weapon {
        damage_multiplier: 1.0,
        projectile_speed: combat_config.projectile_speed,
        projectile_lifetime_ms: combat_config.projectile_lifetime_ms,
        pierce: 1,
        critical_chance: 0.0,
        critical_multiplier: 1.0,
        multishot: 0,
    });

    let critical = weapon.critical_chance > 0.0 && rng.gen_bool(probability(weapon.critical_chance));
    let mut damage = attacker.damage * weapon.damage_multiplier;
    if critical {
        damage *= weapon.critical_multiplier;
    }

    let aim = direction(attacker.position, target_pos);
    let count = weapon.multishot.saturating_add(1);
    let middle = f64::from(count - 1) / 2.0;
    for i in 0..count {
        let offset = (f64::from(i) - middle) * combat_config.multishot_spread;
        pending.push(ProjectileRequest {
            owner: attacker.entity,
            origin: attacker.position,
            velocity: rotate(aim, offset) * weapon.projectile_speed,
            damage,
            lifetime_ms: weapon.projectile_lifetime_ms,
            penetration: weapon.pierce.max(1),
            critical,
        });
    }
}

/// Age projectiles and resolve their hits.
pub fn projectile_pass(
    world: &mut World,
    combat_config: &CombatConfig,
    dt_ms: f64,
    events: &mut Vec<GameEvent>,
) {
    let mut in_flight: Vec<(Entity, DVec2, EntityId, Vec<EntityId>)> = Vec::new();
    for (entity, (transform, projectile, lifecycle)) in
        world.query_mut::<(Option<&Transform>, &mut Projectile, &mut Lifecycle)>()
    {
        if lifecycle.is_destroyed() {
            continue;
        }
        projectile.lifetime_ms -= dt_ms;
        if projectile.lifetime_ms <= 0.0 {
            lifecycle.destroyed = Some(DestroyCause::Expired);
            continue;
        }
        let Some(transform) = transform else {
            log::warn!("projectile {entity:?} has no Transform, skipped");
            continue;
        };
        in_flight.push((entity, transform.position, projectile.owner, projectile.hits.clone()));
    }

    for (entity, position, owner, already_hit) in in_flight {
        let Some(hostile) = hostile_tags(world, owner) else {
            log::trace!("projectile {entity:?} lost its owner, inert");
            continue;
        };
        let Some((target, _)) =
            nearest_target(world, position, &hostile, combat_config.hit_radius, &already_hit)
        else {
            continue;
        };
        let damage = match world.get::<&Projectile>(entity) {
            Ok(projectile) => projectile.damage,
            Err(_) => continue,
        };

        apply_damage(world, target, damage, events);

        if let Ok((projectile, lifecycle)) =
            world.query_one_mut::<(&mut Projectile, &mut Lifecycle)>(entity)
        {
            projectile.hits.push(entity_id(target));
            projectile.penetration = projectile.penetration.saturating_sub(1);
            if projectile.penetration == 0 {
                lifecycle.destroyed = Some(DestroyCause::Spent);
            }
        }
    }
}

/// Spawn all projectiles requested this tick.
pub fn commit_projectiles(
    world: &mut World,
    pending: &mut Vec<ProjectileRequest>,
    combat_config: &CombatConfig,
    events: &mut Vec<GameEvent>,
) {
    for request in pending.drain(..) {
        world_setup::spawn_projectile(world, &request, combat_config);
        events.push(GameEvent::ProjectileFired {
            owner: entity_id(request.owner),
            critical: request.critical,
        });
    }
}

/// Tags a projectile of `owner` may damage, or `None` if the owner is gone.
fn hostile_tags(world: &World, owner: EntityId) -> Option<Vec<Tag>> {
    let owner = entity_of(owner)?;
    let combat = world.get::<&Combat>(owner).ok()?;
    Some(combat.targets.clone())
}

/// Nearest live, damageable entity carrying one of `tags` within
/// `max_distance` of `from`. Ties go to the first encountered.
pub fn nearest_target(
    world: &World,
    from: DVec2,
    tags: &[Tag],
    max_distance: f64,
    exclude: &[EntityId],
) -> Option<(Entity, DVec2)> {
    let mut best: Option<(Entity, DVec2, f64)> = None;
    let mut query = world.query::<(&Transform, &Tags, &Health, Option<&Lifecycle>)>();
    for (entity, (transform, entity_tags, _health, lifecycle)) in query.iter() {
        if lifecycle.is_some_and(Lifecycle::is_destroyed) || !entity_tags.any_of(tags) {
            continue;
        }
        if exclude.contains(&entity_id(entity)) {
            continue;
        }
        let distance = transform.position.distance(from);
        if distance > max_distance {
            continue;
        }
        if best.map_or(true, |(_, _, d)| distance < d) {
            best = Some((entity, transform.position, distance));
        }
    }
    best.map(|(entity, position, _)| (entity, position))
}

/// Subtract `amount` from the target's health, flagging it `Killed` at zero.
///
/// No-op on entities already destroyed, so a death is recorded once.
/// Returns true if this call killed the target.
pub fn apply_damage(world: &mut World, target: Entity, amount: f64, events: &mut Vec<GameEvent>) -> bool {
    let Ok((health, lifecycle, player)) =
        world.query_one_mut::<(&mut Health, &mut Lifecycle, Option<&PlayerInfo>)>(target)
    else {
        log::warn!("damage target {target:?} has no Health/Lifecycle, skipped");
        return false;
    };
    if lifecycle.is_destroyed() {
        return false;
    }

    let amount = amount.max(0.0);
    health.current = (health.current - amount).max(0.0).min(health.max);
    if player.is_some() {
        events.push(GameEvent::PlayerDamaged {
            amount,
            remaining: health.current,
        });
    }

    if health.current <= 0.0 {
        lifecycle.destroyed = Some(DestroyCause::Killed);
        return true;
    }
    false
}

fn is_destroyed(world: &World, entity: Entity) -> bool {
    world
        .get::<&Lifecycle>(entity)
        .map_or(false, |lifecycle| lifecycle.is_destroyed())
}
