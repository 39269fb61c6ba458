//! Enemy AI system: sets each enemy's velocity from its behaviour mode.
//!
//! Runs before movement, so the movement pass integrates the velocities
//! chosen here.

use std::f64::consts::TAU;

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use survivor_core::components::{Combat, EnemyInfo, Lifecycle, Movement, Transform};
use survivor_core::config::AiConfig;
use survivor_core::enums::AiMode;
use survivor_core::types::{direction, probability};

use super::find_player;

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, ai: &AiConfig) {
    let Some((_, player_pos)) = find_player(world) else {
        return;
    };

    for (_entity, (transform, movement, combat, enemy, lifecycle)) in world.query_mut::<(
        &Transform,
        &mut Movement,
        Option<&Combat>,
        &EnemyInfo,
        &Lifecycle,
    )>() {
        if lifecycle.is_destroyed() {
            continue;
        }
        match enemy.ai {
            AiMode::Chase => {
                movement.velocity = chase_velocity(transform.position, player_pos, movement.speed);
            }
            AiMode::Ranged => {
                let range = combat.map_or(0.0, |c| c.range);
                movement.velocity =
                    kite_velocity(transform.position, player_pos, movement.speed, range, ai);
            }
            AiMode::Patrol => {
                if let Some(velocity) = patrol_turn(rng, movement.speed, ai) {
                    movement.velocity = velocity;
                }
            }
        }
    }
}

/// Straight at the player at full speed.
pub fn chase_velocity(position: DVec2, player: DVec2, speed: f64) -> DVec2 {
    direction(position, player) * speed
}

/// Close in while outside the approach band, back off when too close, hold
/// position in between.
pub fn kite_velocity(position: DVec2, player: DVec2, speed: f64, range: f64, ai: &AiConfig) -> DVec2 {
    let distance = position.distance(player);
    if distance > range * ai.ranged_approach_ratio {
        direction(position, player) * speed * ai.ranged_approach_speed
    } else if distance < range * ai.ranged_retreat_ratio {
        direction(player, position) * speed * ai.ranged_retreat_speed
    } else {
        DVec2::ZERO
    }
}

/// Occasionally pick a new random heading at reduced speed.
fn patrol_turn(rng: &mut ChaCha8Rng, speed: f64, ai: &AiConfig) -> Option<DVec2> {
    if !rng.gen_bool(probability(ai.patrol_turn_chance)) {
        return None;
    }
    let angle = rng.gen_range(0.0..TAU);
    Some(DVec2::from_angle(angle) * speed * ai.patrol_speed)
}
