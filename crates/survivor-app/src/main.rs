//! survivor-app: headless runner for the survivor arena simulation.
//!
//! Drives the engine at a fixed tick with a scripted movement intent, picks
//! the first offered upgrade on every level-up, and prints the final HUD as
//! JSON.
//!
//! Usage:
//!   survivor-app --character archer --seed 7 --seconds 120
//!   survivor-app --config balance.json --realtime

use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use survivor_core::commands::PlayerCommand;
use survivor_core::config::GameConfig;
use survivor_core::constants::TARGET_FPS;
use survivor_core::enums::{CharacterId, GamePhase};
use survivor_core::events::GameEvent;
use survivor_core::state::GameSnapshot;
use survivor_sim::engine::{SimConfig, SimulationEngine};

/// Radians the scripted intent turns per tick.
const AUTOPILOT_TURN: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
struct RunOptions {
    character: CharacterId,
    seed: u64,
    seconds: f64,
    config: Option<PathBuf>,
    /// Sleep between ticks to run at wall-clock speed.
    realtime: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            character: CharacterId::Warrior,
            seed: 42,
            seconds: 60.0,
            config: None,
            realtime: false,
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        print_usage();
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{msg}");
            print_usage();
            process::exit(1);
        }
    };

    let game = match load_config(options.config.as_deref()) {
        Ok(game) => game,
        Err(msg) => {
            eprintln!("{msg}");
            process::exit(1);
        }
    };

    let snapshot = run(&options, game);
    match serde_json::to_string_pretty(&snapshot.hud) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Failed to serialize final state: {err}");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "survivor-app: headless survivor arena run\n\
         \n\
           --character <name>  warrior | mage | archer | rogue (default: warrior)\n\
           --seed <N>          RNG seed (default: 42)\n\
           --seconds <S>       Simulated seconds to run (default: 60)\n\
           --config <path>     JSON balance file (default: built-in)\n\
           --realtime          Pace ticks at wall-clock speed\n"
    );
}

fn parse_args(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .ok_or_else(|| format!("Missing value for {flag}"))
        };
        match flag.as_str() {
            "--character" => {
                let name = value()?;
                options.character = serde_json::from_value(serde_json::Value::String(name.clone()))
                    .map_err(|_| format!("Unknown character: {name}"))?;
            }
            "--seed" => {
                let raw = value()?;
                options.seed = raw.parse().map_err(|_| format!("Invalid seed: {raw}"))?;
            }
            "--seconds" => {
                let raw = value()?;
                options.seconds = raw
                    .parse()
                    .ok()
                    .filter(|s: &f64| s.is_finite() && *s > 0.0)
                    .ok_or_else(|| format!("Invalid duration: {raw}"))?;
            }
            "--config" => options.config = Some(PathBuf::from(value()?)),
            "--realtime" => options.realtime = true,
            other => return Err(format!("Unknown argument: {other}")),
        }
    }
    Ok(options)
}

fn load_config(path: Option<&Path>) -> Result<GameConfig, String> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
    GameConfig::from_json(&json).map_err(|err| format!("Invalid config {}: {err}", path.display()))
}

/// Run one game to completion or until the requested duration elapses.
fn run(options: &RunOptions, game: GameConfig) -> GameSnapshot {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: options.seed,
        game,
    });
    if let Err(err) = engine.start_game(options.character) {
        log::error!("could not start: {err}");
        return engine.snapshot();
    }

    let dt = 1.0 / f64::from(TARGET_FPS);
    let tick_duration = Duration::from_secs_f64(dt);
    let ticks = (options.seconds / dt).ceil() as u64;
    let mut next_tick_time = Instant::now();
    let mut snapshot = engine.snapshot();

    for tick in 0..ticks {
        let angle = tick as f64 * AUTOPILOT_TURN;
        engine.queue_command(PlayerCommand::SetMoveIntent {
            dx: angle.cos(),
            dy: angle.sin(),
        });

        snapshot = engine.tick(dt);
        report(&snapshot.events);

        match snapshot.phase {
            GamePhase::LevelUp => {
                if let Some(choice) = snapshot.upgrade_offer.first() {
                    log::info!("choosing {}", choice.name);
                    engine.queue_command(PlayerCommand::SelectUpgrade { upgrade: choice.id });
                }
            }
            GamePhase::GameOver => break,
            _ => {}
        }

        if options.realtime {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind: reset rather than spiral.
                next_tick_time = now;
            }
        }
    }

    snapshot
}

fn report(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::WaveStarted { wave } => log::info!("wave {wave}"),
            GameEvent::LevelUp { level } => log::info!("level {level}"),
            GameEvent::GameOver {
                survival_secs,
                score,
            } => log::info!("survived {survival_secs:.1}s, score {score}"),
            _ => {}
        }
    }
}
