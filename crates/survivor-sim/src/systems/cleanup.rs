//! Cleanup system: removes entities flagged destroyed.

use hecs::{Entity, World};

use survivor_core::components::{EnemyInfo, Lifecycle, PlayerInfo};

use crate::store::{entity_id, Casualty};

/// Despawn every destroyed entity except the player and report what was
/// removed. Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> Vec<Casualty> {
    despawn_buffer.clear();
    let mut casualties = Vec::new();

    for (entity, (lifecycle, enemy, player)) in
        world.query_mut::<(&Lifecycle, Option<&EnemyInfo>, Option<&PlayerInfo>)>()
    {
        let Some(cause) = lifecycle.destroyed else {
            continue;
        };
        // The player stays until reset so the HUD keeps its final stats.
        if player.is_some() {
            continue;
        }
        casualties.push(Casualty {
            id: entity_id(entity),
            cause,
            enemy: enemy.map(|info| (info.archetype, info.reward)),
        });
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    casualties
}
