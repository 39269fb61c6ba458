//! The level-up upgrade pool.

use serde::{Deserialize, Serialize};

use crate::enums::{Modifier, UpgradeId, UpgradeStat};

/// One entry of the upgrade pool. Applying it mutates exactly one stat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeDef {
    pub id: UpgradeId,
    pub name: String,
    pub description: String,
    pub stat: UpgradeStat,
    pub modifier: Modifier,
    pub amount: f64,
}

pub fn default_pool() -> Vec<UpgradeDef> {
    use Modifier::*;
    vec![
        def(UpgradeId::DamageBoost, "Damage Boost", "+20% damage", UpgradeStat::Damage, Percent, 0.2),
        def(UpgradeId::CriticalChance, "Critical Chance", "+15% critical chance", UpgradeStat::CriticalChance, Flat, 0.15),
        def(UpgradeId::MovementSpeed, "Movement Speed", "+25% movement speed", UpgradeStat::MoveSpeed, Percent, 0.25),
        def(UpgradeId::AttackSpeed, "Attack Speed", "+30% attack speed", UpgradeStat::AttackSpeed, Percent, 0.3),
        def(UpgradeId::HealthBoost, "Vitality", "+20 max health", UpgradeStat::MaxHealth, Flat, 20.0),
        def(UpgradeId::HealthRegen, "Regeneration", "Heal 2 health per second", UpgradeStat::HealthRegen, Flat, 2.0),
        def(UpgradeId::AttackRange, "Attack Range", "+20% attack range", UpgradeStat::AttackRange, Percent, 0.2),
        def(UpgradeId::DoubleShot, "Double Shot", "Fire one extra projectile", UpgradeStat::Multishot, Flat, 1.0),
        def(UpgradeId::PiercingShot, "Piercing Shot", "Projectiles pass through one more enemy", UpgradeStat::Pierce, Flat, 1.0),
    ]
}

fn def(
    id: UpgradeId,
    name: &str,
    description: &str,
    stat: UpgradeStat,
    modifier: Modifier,
    amount: f64,
) -> UpgradeDef {
    UpgradeDef {
        id,
        name: name.to_string(),
        description: description.to_string(),
        stat,
        modifier,
        amount,
    }
}

impl UpgradeDef {
    /// New value of a stat after this upgrade.
    pub fn apply_to(&self, value: f64) -> f64 {
        match self.modifier {
            Modifier::Flat => value + self.amount,
            Modifier::Percent => value * (1.0 + self.amount),
        }
    }
}
