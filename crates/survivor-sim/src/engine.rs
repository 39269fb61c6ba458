//! Simulation engine: the context object that owns all game state.
//!
//! `SimulationEngine` owns the entity store, processes player commands,
//! runs every resolver in a fixed order and produces `GameSnapshot`s.
//! Completely headless, so runs are deterministic for a given seed and
//! command sequence.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::Entity;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use survivor_core::commands::PlayerCommand;
use survivor_core::components::{Health, Lifecycle, Movement, Transform};
use survivor_core::config::GameConfig;
use survivor_core::enums::{CharacterId, GamePhase, UpgradeId};
use survivor_core::errors::CommandError;
use survivor_core::events::GameEvent;
use survivor_core::state::GameSnapshot;
use survivor_core::types::{normalize_or_zero, screen_to_world, SimTime};

use crate::progression::{self, Progression};
use crate::store::EntityStore;
use crate::systems;
use crate::systems::spawner::WaveDirector;
use crate::world_setup::{self, ProjectileRequest};

/// Configuration for a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and commands = same simulation.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    store: EntityStore,
    config: GameConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: Option<Entity>,
    director: WaveDirector,
    progression: Progression,
    command_queue: VecDeque<PlayerCommand>,
    pending_projectiles: Vec<ProjectileRequest>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            store: EntityStore::new(),
            director: WaveDirector::new(&config.game.waves),
            config: config.game,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: None,
            progression: Progression::default(),
            command_queue: VecDeque::new(),
            pending_projectiles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Apply a command immediately.
    pub fn apply_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match command {
            PlayerCommand::StartGame { character } => self.start_game(character),
            PlayerCommand::Pause => self.pause(),
            PlayerCommand::Resume => self.resume(),
            PlayerCommand::EndGame => self.end_game(),
            PlayerCommand::ReturnToMenu => self.return_to_menu(),
            PlayerCommand::SetMoveIntent { dx, dy } => self.set_move_intent(dx, dy),
            PlayerCommand::SetMoveTarget { x, y } => self.set_move_target(DVec2::new(x, y)),
            PlayerCommand::TouchAt { screen_x, screen_y } => {
                self.touch_at(DVec2::new(screen_x, screen_y))
            }
            PlayerCommand::SelectUpgrade { upgrade } => self.select_upgrade(upgrade),
        }
    }

    /// Reset all simulation state and start a run with `character`.
    pub fn start_game(&mut self, character: CharacterId) -> Result<(), CommandError> {
        if !matches!(self.phase, GamePhase::Menu | GamePhase::GameOver) {
            return Err(CommandError::WrongPhase { actual: self.phase });
        }
        let profile = self
            .config
            .character(character)
            .ok_or(CommandError::UnknownCharacter(character))?;

        self.store.clear();
        self.time = SimTime::default();
        self.director = WaveDirector::new(&self.config.waves);
        self.progression = Progression::default();
        self.pending_projectiles.clear();
        self.events.clear();

        let player = world_setup::spawn_player(self.store.world_mut(), profile, &self.config);
        self.player = Some(player);
        self.phase = GamePhase::Playing;

        log::info!("game started as {character:?}");
        self.events.push(GameEvent::GameStarted { character });
        self.events.push(GameEvent::WaveStarted {
            wave: self.director.wave,
        });
        Ok(())
    }

    /// Steer the player with a joystick-style intent. `(0, 0)` stops.
    pub fn set_move_intent(&mut self, dx: f64, dy: f64) -> Result<(), CommandError> {
        let movement = self.player_movement()?;
        movement.target = None;
        movement.velocity = normalize_or_zero(DVec2::new(dx, dy)) * movement.speed;
        Ok(())
    }

    /// Steer the player towards a world-space point.
    pub fn set_move_target(&mut self, target: DVec2) -> Result<(), CommandError> {
        if !target.is_finite() {
            log::warn!("ignoring non-finite move target {target}");
            return Ok(());
        }
        let movement = self.player_movement()?;
        movement.target = Some(target);
        Ok(())
    }

    /// Steer the player towards a screen-space point. The camera keeps the
    /// player at the centre of the viewport.
    pub fn touch_at(&mut self, screen: DVec2) -> Result<(), CommandError> {
        let player = self.active_player()?;
        let camera = self
            .store
            .world()
            .get::<&Transform>(player)
            .map(|t| t.position)
            .unwrap_or(DVec2::ZERO);
        let target = screen_to_world(screen, self.config.arena.viewport(), camera);
        self.set_move_target(target)
    }

    pub fn pause(&mut self) -> Result<(), CommandError> {
        self.transition(&[GamePhase::Playing], GamePhase::Paused)
    }

    pub fn resume(&mut self) -> Result<(), CommandError> {
        self.transition(&[GamePhase::Paused], GamePhase::Playing)
    }

    /// Abandon the run.
    pub fn end_game(&mut self) -> Result<(), CommandError> {
        self.transition(
            &[GamePhase::Playing, GamePhase::Paused, GamePhase::LevelUp],
            GamePhase::GameOver,
        )?;
        self.progression.offer.clear();
        self.finish_run();
        Ok(())
    }

    /// Leave a finished or paused run and drop its world.
    pub fn return_to_menu(&mut self) -> Result<(), CommandError> {
        self.transition(&[GamePhase::GameOver, GamePhase::Paused], GamePhase::Menu)?;
        self.store.clear();
        self.player = None;
        self.progression.offer.clear();
        self.pending_projectiles.clear();
        Ok(())
    }

    /// Apply one of the offered upgrades and resume play, or present the
    /// next offer if the player still has a level-up banked.
    pub fn select_upgrade(&mut self, upgrade: UpgradeId) -> Result<(), CommandError> {
        if self.phase != GamePhase::LevelUp {
            return Err(CommandError::WrongPhase { actual: self.phase });
        }
        let def = self
            .config
            .upgrade(upgrade)
            .ok_or(CommandError::UnknownUpgrade(upgrade))?;
        if !self.progression.offer.contains(&upgrade) {
            return Err(CommandError::UpgradeNotOffered(upgrade));
        }
        let player = self.active_player()?;

        progression::apply_upgrade(self.store.world_mut(), player, def);
        self.progression.offer.clear();
        log::debug!("applied upgrade {upgrade:?}");
        self.events.push(GameEvent::UpgradeApplied { upgrade });

        let pending = self.progression.level_up_if_ready(
            self.store.world_mut(),
            player,
            &mut self.rng,
            &self.config,
            &mut self.events,
        );
        if !pending {
            self.phase = GamePhase::Playing;
        }
        Ok(())
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. Only `Playing` advances the world.
    pub fn tick(&mut self, dt: f64) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            let dt = self.sanitize_dt(dt);
            // A zero step only counts the tick.
            if dt > 0.0 {
                self.run_systems(dt);
            }
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Read-only view of the current state. Events are only delivered
    /// through `tick`.
    pub fn snapshot(&self) -> GameSnapshot {
        self.build_snapshot(Vec::new())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    pub fn wave(&self) -> u32 {
        self.director.wave
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    #[cfg(test)]
    pub fn director_mut(&mut self) -> &mut WaveDirector {
        &mut self.director
    }

    /// Spawn an enemy at `position` with wave-1 stats (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        archetype: survivor_core::enums::EnemyArchetype,
        position: DVec2,
    ) -> Entity {
        let profile = self
            .config
            .enemy(archetype)
            .expect("archetype missing from config");
        world_setup::spawn_enemy(
            self.store.world_mut(),
            profile,
            1,
            position,
            &self.config.waves,
            &self.config.combat,
        )
    }

    /// Process all queued commands. Rejected commands are logged and dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.apply_command(command.clone()) {
                log::warn!("rejected queued command {command:?}: {err}");
            }
        }
    }

    /// Non-finite or negative steps become 0; large steps are capped.
    fn sanitize_dt(&self, dt: f64) -> f64 {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("invalid tick delta {dt}, treated as 0");
            return 0.0;
        }
        dt.min(self.config.max_dt)
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let Some(player) = self.player else {
            log::warn!("playing without a player entity");
            return;
        };
        let world = self.store.world_mut();

        // 1. Spawn director
        systems::spawner::run(
            world,
            &mut self.rng,
            &mut self.director,
            &self.config,
            dt,
            &mut self.events,
        );
        // 2. Enemy AI
        systems::enemy_ai::run(world, &mut self.rng, &self.config.ai);
        // 3. Movement (with despawn of distant enemies)
        systems::movement::run(world, dt, &self.config);
        // 4. Regeneration
        systems::regen::run(world, dt);
        // 5. Combat (attacks, projectiles, commit)
        systems::combat::run(
            world,
            &mut self.rng,
            &self.config,
            dt,
            &mut self.pending_projectiles,
            &mut self.events,
        );
        // 6. Cleanup
        let casualties = self.store.sweep_destroyed();
        // 7. Progression
        self.progression
            .record_kills(self.store.world_mut(), player, &casualties, &mut self.events);

        if self.player_dead(player) {
            self.phase = GamePhase::GameOver;
            self.finish_run();
        } else if self.progression.level_up_if_ready(
            self.store.world_mut(),
            player,
            &mut self.rng,
            &self.config,
            &mut self.events,
        ) {
            self.phase = GamePhase::LevelUp;
        }
    }

    fn player_dead(&self, player: Entity) -> bool {
        let world = self.store.world();
        let destroyed = world
            .get::<&Lifecycle>(player)
            .map_or(true, |lifecycle| lifecycle.is_destroyed());
        let drained = world
            .get::<&Health>(player)
            .map_or(true, |health| health.current <= 0.0);
        destroyed || drained
    }

    fn finish_run(&mut self) {
        log::info!(
            "game over after {:.1}s: score {}, {} kills",
            self.time.elapsed_secs,
            self.progression.score,
            self.progression.kills
        );
        self.events.push(GameEvent::GameOver {
            survival_secs: self.time.elapsed_secs,
            score: self.progression.score,
        });
    }

    fn transition(&mut self, from: &[GamePhase], to: GamePhase) -> Result<(), CommandError> {
        if !from.contains(&self.phase) {
            return Err(CommandError::WrongPhase { actual: self.phase });
        }
        log::debug!("phase {:?} -> {to:?}", self.phase);
        self.phase = to;
        Ok(())
    }

    /// The player entity while a run is in progress.
    fn active_player(&self) -> Result<Entity, CommandError> {
        match (self.phase, self.player) {
            (GamePhase::Playing | GamePhase::Paused | GamePhase::LevelUp, Some(player)) => Ok(player),
            _ => Err(CommandError::WrongPhase { actual: self.phase }),
        }
    }

    fn player_movement(&mut self) -> Result<&mut Movement, CommandError> {
        let player = self.active_player()?;
        let phase = self.phase;
        self.store
            .world_mut()
            .query_one_mut::<&mut Movement>(player)
            .map_err(|_| CommandError::WrongPhase { actual: phase })
    }

    fn build_snapshot(&self, events: Vec<GameEvent>) -> GameSnapshot {
        systems::snapshot::build_snapshot(
            self.store.world(),
            &self.time,
            self.phase,
            self.director.wave,
            &self.progression,
            &self.config,
            events,
        )
    }
}
