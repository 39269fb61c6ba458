//! Entity spawn factories.
//!
//! Builds the player, enemy and projectile component bundles from the
//! configured profiles.

use glam::DVec2;
use hecs::{Entity, EntityBuilder, World};

use survivor_core::archetypes::{CharacterProfile, EnemyProfile};
use survivor_core::components::*;
use survivor_core::config::{CombatConfig, GameConfig, WaveConfig};
use survivor_core::enums::Tag;
use survivor_core::types::heading;

use crate::store::entity_id;

/// Spawn the player at the arena origin with the character's base stats.
pub fn spawn_player(world: &mut World, profile: &CharacterProfile, config: &GameConfig) -> Entity {
    let combat = Combat {
        damage: profile.damage,
        attack_speed: profile.attack_speed,
        range: profile.range,
        since_last_attack_ms: 0.0,
        targets: vec![Tag::Enemy],
    };

    let weapon = Weapon {
        damage_multiplier: 1.0,
        projectile_speed: profile.projectile_speed,
        projectile_lifetime_ms: config.combat.projectile_lifetime_ms,
        pierce: profile.pierce.max(1),
        critical_chance: profile.critical_chance,
        critical_multiplier: profile.critical_multiplier,
        multishot: 0,
    };

    let info = PlayerInfo {
        character: profile.id,
        level: 1,
        experience: 0,
        experience_to_next: config.progression.requirement_for(1),
    };

    world.spawn((
        Transform::at(DVec2::ZERO),
        Health::full(profile.health),
        Movement::with_speed(profile.speed),
        combat,
        weapon,
        info,
        Regeneration::default(),
        Tags(vec![Tag::Player]),
        Lifecycle::default(),
        Appearance {
            radius: config.combat.player_radius,
        },
    ))
}

/// Spawn an enemy of `profile` at `position` with stats scaled for `wave`.
pub fn spawn_enemy(
    world: &mut World,
    profile: &EnemyProfile,
    wave: u32,
    position: DVec2,
    waves: &WaveConfig,
    combat: &CombatConfig,
) -> Entity {
    let health = (profile.health * waves.health_scale(wave)).floor().max(1.0);
    let damage = (profile.damage * waves.damage_scale(wave)).floor();
    let reward = (f64::from(profile.reward) * waves.reward_scale(wave)).floor() as u32;
    let speed = profile.speed * waves.speed_scale(wave);

    let mut tags = vec![Tag::Enemy];
    let mut builder = EntityBuilder::new();
    builder
        .add(Transform::at(position))
        .add(Health::full(health))
        .add(Movement::with_speed(speed))
        .add(Combat {
            damage,
            attack_speed: profile.attack_speed,
            range: profile.range,
            since_last_attack_ms: 0.0,
            targets: vec![Tag::Player],
        })
        .add(EnemyInfo {
            archetype: profile.archetype,
            reward,
            ai: profile.ai,
        })
        .add(Lifecycle::default())
        .add(Appearance {
            radius: profile.radius,
        });

    if profile.ranged {
        tags.push(Tag::Ranged);
        builder.add(Weapon {
            damage_multiplier: 1.0,
            projectile_speed: profile.projectile_speed,
            projectile_lifetime_ms: combat.projectile_lifetime_ms,
            pierce: 1,
            critical_chance: 0.0,
            critical_multiplier: 1.0,
            multishot: 0,
        });
    }
    builder.add(Tags(tags));

    world.spawn(builder.build())
}

/// A projectile requested during the attack pass, spawned at commit time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileRequest {
    pub owner: Entity,
    pub origin: DVec2,
    pub velocity: DVec2,
    pub damage: f64,
    pub lifetime_ms: f64,
    pub penetration: u32,
    pub critical: bool,
}

pub fn spawn_projectile(world: &mut World, request: &ProjectileRequest, combat: &CombatConfig) -> Entity {
    world.spawn((
        Transform {
            position: request.origin,
            facing: heading(request.velocity).unwrap_or(0.0),
            scale: 1.0,
        },
        Movement {
            velocity: request.velocity,
            speed: request.velocity.length(),
            target: None,
        },
        Projectile {
            damage: request.damage,
            lifetime_ms: request.lifetime_ms,
            penetration: request.penetration.max(1),
            owner: entity_id(request.owner),
            hits: Vec::new(),
        },
        Tags(vec![Tag::Projectile]),
        Lifecycle::default(),
        Appearance {
            radius: combat.projectile_radius,
        },
    ))
}
