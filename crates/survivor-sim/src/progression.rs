//! Progression tracker: kills, score, experience, levels and upgrades.

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use survivor_core::components::{Combat, Health, Movement, PlayerInfo, Regeneration, Weapon};
use survivor_core::config::{GameConfig, ProgressionConfig};
use survivor_core::enums::{UpgradeId, UpgradeStat};
use survivor_core::events::GameEvent;
use survivor_core::upgrades::UpgradeDef;

use crate::store::Casualty;

/// Run-level progression state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Progression {
    pub score: u64,
    pub kills: u32,
    /// Upgrades on offer while a level-up is pending.
    pub offer: Vec<UpgradeId>,
}

impl Progression {
    /// Credit this tick's confirmed kills to the score and the player's
    /// experience. Each casualty is swept once, so each kill counts once.
    pub fn record_kills(
        &mut self,
        world: &mut World,
        player: Entity,
        casualties: &[Casualty],
        events: &mut Vec<GameEvent>,
    ) {
        let mut gained: u32 = 0;
        for casualty in casualties.iter().filter(|c| c.is_kill()) {
            let Some((archetype, reward)) = casualty.enemy else {
                continue;
            };
            self.kills += 1;
            self.score += u64::from(reward);
            gained = gained.saturating_add(reward);
            events.push(GameEvent::EnemyKilled {
                id: casualty.id,
                archetype,
                reward,
            });
        }

        if gained == 0 {
            return;
        }
        match world.query_one_mut::<&mut PlayerInfo>(player) {
            Ok(info) => info.experience = info.experience.saturating_add(gained),
            Err(_) => log::warn!("no player to credit {gained} experience to"),
        }
    }

    /// Cross one level threshold if the player has the experience for it
    /// and roll a fresh offer. Returns true if an offer is now pending.
    pub fn level_up_if_ready(
        &mut self,
        world: &mut World,
        player: Entity,
        rng: &mut ChaCha8Rng,
        config: &GameConfig,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        let Ok(info) = world.query_one_mut::<&mut PlayerInfo>(player) else {
            return false;
        };
        if !try_level_up(info, &config.progression) {
            return false;
        }

        log::debug!("player reached level {}", info.level);
        events.push(GameEvent::LevelUp { level: info.level });
        self.offer = roll_offer(rng, &config.upgrades, config.progression.choices);
        !self.offer.is_empty()
    }
}

/// Level up once if `experience >= experience_to_next`, carrying the
/// remainder into the next level.
pub fn try_level_up(info: &mut PlayerInfo, config: &ProgressionConfig) -> bool {
    if info.experience < info.experience_to_next {
        return false;
    }
    info.experience -= info.experience_to_next;
    info.level += 1;
    info.experience_to_next = config.requirement_for(info.level);
    true
}

/// Sample `count` distinct upgrades from the pool.
pub fn roll_offer(rng: &mut ChaCha8Rng, pool: &[UpgradeDef], count: usize) -> Vec<UpgradeId> {
    pool.choose_multiple(rng, count).map(|u| u.id).collect()
}

/// Apply `upgrade` to one stat of `player`.
///
/// Returns false if the player lacks the component carrying that stat.
pub fn apply_upgrade(world: &mut World, player: Entity, upgrade: &UpgradeDef) -> bool {
    match upgrade.stat {
        UpgradeStat::Damage => with_component(world, player, |c: &mut Combat| {
            c.damage = upgrade.apply_to(c.damage);
        }),
        UpgradeStat::AttackSpeed => with_component(world, player, |c: &mut Combat| {
            c.attack_speed = upgrade.apply_to(c.attack_speed);
        }),
        UpgradeStat::AttackRange => with_component(world, player, |c: &mut Combat| {
            c.range = upgrade.apply_to(c.range);
        }),
        UpgradeStat::MoveSpeed => with_component(world, player, |m: &mut Movement| {
            m.speed = upgrade.apply_to(m.speed);
        }),
        UpgradeStat::CriticalChance => with_component(world, player, |w: &mut Weapon| {
            w.critical_chance = upgrade.apply_to(w.critical_chance).clamp(0.0, 1.0);
        }),
        UpgradeStat::Multishot => with_component(world, player, |w: &mut Weapon| {
            w.multishot = upgrade.apply_to(f64::from(w.multishot)).round().max(0.0) as u32;
        }),
        UpgradeStat::Pierce => with_component(world, player, |w: &mut Weapon| {
            w.pierce = upgrade.apply_to(f64::from(w.pierce)).round().max(1.0) as u32;
        }),
        UpgradeStat::HealthRegen => with_component(world, player, |r: &mut Regeneration| {
            r.per_second = upgrade.apply_to(r.per_second);
        }),
        UpgradeStat::MaxHealth => with_component(world, player, |h: &mut Health| {
            // Max never decreases; heal by the same delta, never past max.
            let delta = (upgrade.apply_to(h.max) - h.max).max(0.0);
            h.max += delta;
            h.current = (h.current + delta).min(h.max);
        }),
    }
}

fn with_component<T: hecs::Component>(
    world: &mut World,
    entity: Entity,
    f: impl FnOnce(&mut T),
) -> bool {
    match world.query_one_mut::<&mut T>(entity) {
        Ok(component) => {
            f(component);
            true
        }
        Err(_) => {
            log::warn!(
                "{entity:?} has no {}, upgrade skipped",
                std::any::type_name::<T>()
            );
            false
        }
    }
}
