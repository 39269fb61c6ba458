//! Simulation engine for the survivor arena.
//!
//! Owns the hecs ECS world behind an `EntityStore`, runs the resolvers in a
//! fixed order each tick, and produces `GameSnapshot`s for the render shell.

pub mod engine;
pub mod progression;
pub mod store;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use store::EntityStore;
pub use survivor_core as core;
