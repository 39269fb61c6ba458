//! Entity store: the sole owner of entity lifetimes.
//!
//! A thin layer over `hecs::World`. Resolvers flag entities through
//! `Lifecycle` and never despawn directly; membership only shrinks in
//! `sweep_destroyed`, which the engine calls once per tick.

use hecs::{DynamicBundle, Entity, EntityRef, World};
use serde::Serialize;

use survivor_core::components::Tags;
use survivor_core::enums::{DestroyCause, EnemyArchetype, Tag};
use survivor_core::types::EntityId;

use crate::systems;

/// External id of an ECS entity.
pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

/// ECS entity for an external id. `None` for malformed ids; the entity may
/// still be gone from the world.
pub fn entity_of(id: EntityId) -> Option<Entity> {
    Entity::from_bits(id.0)
}

/// An entity removed by the cleanup sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Casualty {
    pub id: EntityId,
    pub cause: DestroyCause,
    /// Archetype and reward, for enemies.
    pub enemy: Option<(EnemyArchetype, u32)>,
}

impl Casualty {
    /// Whether this casualty is an enemy killed in combat.
    pub fn is_kill(&self) -> bool {
        self.cause == DestroyCause::Killed && self.enemy.is_some()
    }
}

pub struct EntityStore {
    world: World,
    despawn_buffer: Vec<Entity>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            despawn_buffer: Vec::new(),
        }
    }

    pub fn add(&mut self, components: impl DynamicBundle) -> Entity {
        self.world.spawn(components)
    }

    /// Remove an entity immediately. Returns false if it was already gone.
    pub fn remove(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    pub fn get(&self, entity: Entity) -> Option<EntityRef<'_>> {
        self.world.entity(entity).ok()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    pub fn all(&self) -> impl Iterator<Item = EntityRef<'_>> + '_ {
        self.world.iter()
    }

    pub fn with_tag(&self, tag: Tag) -> Vec<Entity> {
        let mut query = self.world.query::<&Tags>();
        let tagged = query
            .iter()
            .filter(|(_, tags)| tags.has(tag))
            .map(|(entity, _)| entity)
            .collect();
        tagged
    }

    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    pub fn clear(&mut self) {
        self.world.clear();
        self.despawn_buffer.clear();
    }

    /// Remove every entity flagged destroyed (the player excepted).
    pub fn sweep_destroyed(&mut self) -> Vec<Casualty> {
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
