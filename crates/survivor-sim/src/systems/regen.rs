//! Passive health regeneration.

use hecs::World;

use survivor_core::components::{Health, Lifecycle, Regeneration};

/// Heal every live regenerating entity by `per_second * dt`, capped at max.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (health, regen, lifecycle)) in
        world.query_mut::<(&mut Health, &Regeneration, &Lifecycle)>()
    {
        if lifecycle.is_destroyed() || regen.per_second <= 0.0 {
            continue;
        }
        health.current = (health.current + regen.per_second * dt).min(health.max);
    }
}
