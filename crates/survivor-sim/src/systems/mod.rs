//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only
//! passes). Cross-tick state such as the wave director is owned by the engine
//! and passed in explicitly.

use glam::DVec2;
use hecs::{Entity, World};

use survivor_core::components::{PlayerInfo, Transform};

pub mod cleanup;
pub mod combat;
pub mod enemy_ai;
pub mod movement;
pub mod regen;
pub mod snapshot;
pub mod spawner;

/// The player entity and its position, if one exists.
pub fn find_player(world: &World) -> Option<(Entity, DVec2)> {
    let mut query = world.query::<(&PlayerInfo, &Transform)>();
    let found = query
        .iter()
        .next()
        .map(|(entity, (_, transform))| (entity, transform.position));
    found
}
