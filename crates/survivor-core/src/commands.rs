//! Player commands sent from the UI shell to the simulation.
//!
//! Commands are either applied directly between ticks or queued and
//! processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session ---
    /// Reset the simulation and start a run with the given character.
    StartGame { character: CharacterId },
    Pause,
    Resume,
    /// Abandon the current run.
    EndGame,
    ReturnToMenu,

    // --- Movement ---
    /// Joystick-style intent. `(0, 0)` stops the player.
    SetMoveIntent { dx: f64, dy: f64 },
    /// Steer towards a world-space point.
    SetMoveTarget { x: f64, y: f64 },
    /// Steer towards a touch/pointer point given in screen coordinates.
    TouchAt { screen_x: f64, screen_y: f64 },

    // --- Progression ---
    /// Pick one of the offered upgrades while in `LevelUp`.
    SelectUpgrade { upgrade: UpgradeId },
}
