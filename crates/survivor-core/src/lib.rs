//! Core types and definitions for the survivor arena simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, snapshots, events, configuration and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod archetypes;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod state;
pub mod types;
pub mod upgrades;

#[cfg(test)]
mod tests;
