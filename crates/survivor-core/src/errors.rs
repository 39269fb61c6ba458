//! Error types returned to callers of the simulation.

use thiserror::Error;

use crate::enums::{CharacterId, GamePhase, UpgradeId};

/// A command was rejected. No state was changed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("command not allowed in phase {actual:?}")]
    WrongPhase { actual: GamePhase },
    #[error("upgrade {0:?} is not among the offered choices")]
    UpgradeNotOffered(UpgradeId),
    #[error("upgrade {0:?} is not in the upgrade pool")]
    UnknownUpgrade(UpgradeId),
    #[error("no profile for character {0:?}")]
    UnknownCharacter(CharacterId),
}

/// A game configuration failed to load or validate.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("character table is empty")]
    NoCharacters,
    #[error("no spawnable enemy in wave 1")]
    NoStarterEnemy,
}
