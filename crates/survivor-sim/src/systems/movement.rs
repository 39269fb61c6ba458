//! Movement resolver.
//!
//! Steers entities with a target, integrates `position += velocity * dt`,
//! keeps the player inside the arena, derives facing, and flags enemies that
//! drifted beyond the despawn radius.

use glam::DVec2;
use hecs::World;

use survivor_core::components::{EnemyInfo, Lifecycle, Movement, PlayerInfo, Transform};
use survivor_core::config::GameConfig;
use survivor_core::enums::DestroyCause;
use survivor_core::types::heading;

use super::find_player;

/// Run one movement pass over every entity with Transform + Movement.
pub fn run(world: &mut World, dt: f64, config: &GameConfig) {
    for (entity, (transform, movement, player)) in
        world.query_mut::<(Option<&mut Transform>, &mut Movement, Option<&PlayerInfo>)>()
    {
        let Some(transform) = transform else {
            log::warn!("entity {entity:?} has Movement but no Transform, skipped");
            continue;
        };
        step(transform, movement, dt, config.dead_zone);
        if player.is_some() {
            transform.position = config.arena.clamp(transform.position);
        }
    }

    despawn_distant(world, config.waves.despawn_radius);
}

/// Advance a single entity by `dt` seconds.
///
/// With a target set, velocity is re-aimed at it each step. Inside the
/// dead-zone the entity stops and drops the target; if it would reach the
/// target this step it lands exactly on it instead of overshooting.
pub fn step(transform: &mut Transform, movement: &mut Movement, dt: f64, dead_zone: f64) {
    if let Some(target) = movement.target {
        let to_target = target - transform.position;
        let distance = to_target.length();
        if distance <= dead_zone {
            movement.velocity = DVec2::ZERO;
            movement.target = None;
        } else if movement.speed * dt >= distance {
            transform.facing = heading(to_target).unwrap_or(transform.facing);
            transform.position = target;
            movement.velocity = DVec2::ZERO;
            movement.target = None;
            return;
        } else {
            movement.velocity = to_target / distance * movement.speed;
        }
    }

    transform.position += movement.velocity * dt;
    if let Some(angle) = heading(movement.velocity) {
        transform.facing = angle;
    }
}

/// Flag live enemies farther than `radius` from the player.
pub fn despawn_distant(world: &mut World, radius: f64) {
    let Some((_, player_pos)) = find_player(world) else {
        return;
    };

    for (entity, (transform, lifecycle, _enemy)) in
        world.query_mut::<(&Transform, &mut Lifecycle, &EnemyInfo)>()
    {
        if lifecycle.is_destroyed() {
            continue;
        }
        if transform.position.distance(player_pos) > radius {
            log::debug!("despawning {entity:?}, too far from the player");
            lifecycle.destroyed = Some(DestroyCause::Despawned);
        }
    }
}
