//! Default tuning parameters. All of these can be overridden via `GameConfig`.

/// Nominal frame rate of the display callback (Hz).
pub const TARGET_FPS: u32 = 60;

/// Largest step a single tick may take (seconds). Guards against stalls.
pub const MAX_DT: f64 = 1.0 / 30.0;

// --- Arena ---

/// Playable half-extents around the origin.
pub const ARENA_HALF_WIDTH: f64 = 1200.0;
pub const ARENA_HALF_HEIGHT: f64 = 900.0;

/// Rows reserved for the HUD at the top and bottom of the arena.
pub const HUD_TOP_MARGIN: f64 = 20.0;
pub const HUD_BOTTOM_MARGIN: f64 = 20.0;

/// Viewport used to translate touch coordinates.
pub const VIEWPORT_WIDTH: f64 = 1280.0;
pub const VIEWPORT_HEIGHT: f64 = 720.0;

// --- Movement ---

/// Distance under which a steering target counts as reached.
pub const DEAD_ZONE: f64 = 5.0;

// --- Spawning ---

/// Enemies appear this far from the player, just outside the view.
pub const SPAWN_RADIUS: f64 = 800.0;

/// Enemies farther than this from the player are despawned.
pub const DESPAWN_RADIUS: f64 = 1400.0;

/// Hard cap on live enemies.
pub const POPULATION_CEILING: u32 = 50;

pub const WAVE_DURATION_MS: f64 = 30_000.0;
pub const ENEMIES_PER_WAVE_BASE: u32 = 5;
/// Per-wave cap multiplier: `base * growth^(wave-1)`.
pub const WAVE_CAP_GROWTH: f64 = 1.2;

pub const SPAWN_INTERVAL_MS: f64 = 1500.0;
pub const SPAWN_INTERVAL_DECAY: f64 = 0.95;
pub const SPAWN_INTERVAL_MIN_MS: f64 = 800.0;

pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// Per-wave multiplicative health growth.
pub const HEALTH_GROWTH: f64 = 1.15;
/// Per-wave multiplicative damage growth.
pub const DAMAGE_GROWTH: f64 = 1.12;
/// Per-wave linear reward growth.
pub const REWARD_GROWTH: f64 = 0.1;
/// Per-wave linear speed growth, capped.
pub const SPEED_GROWTH: f64 = 0.05;
pub const SPEED_GROWTH_CAP: f64 = 1.5;

// --- Enemy AI ---

/// Ranged enemies close in while farther than this share of their range.
pub const RANGED_APPROACH_RATIO: f64 = 0.8;
/// Ranged enemies back off while closer than this share of their range.
pub const RANGED_RETREAT_RATIO: f64 = 0.5;
pub const RANGED_APPROACH_SPEED: f64 = 0.5;
pub const RANGED_RETREAT_SPEED: f64 = 0.3;

/// Chance per tick that a patrolling enemy picks a new heading.
pub const PATROL_TURN_CHANCE: f64 = 0.05;
pub const PATROL_SPEED: f64 = 0.3;

// --- Combat ---

/// Projectile-to-target distance that counts as a hit.
pub const PROJECTILE_HIT_RADIUS: f64 = 15.0;
pub const PROJECTILE_LIFETIME_MS: f64 = 3000.0;
pub const PROJECTILE_SPEED: f64 = 300.0;
pub const PROJECTILE_RADIUS: f64 = 4.0;
/// Angle between fanned multishot projectiles (radians).
pub const MULTISHOT_SPREAD: f64 = 0.15;

pub const CRITICAL_CHANCE_BASE: f64 = 0.05;
pub const CRITICAL_MULTIPLIER: f64 = 2.0;

/// Melee reach for enemies without a ranged weapon.
pub const MELEE_RANGE: f64 = 30.0;

pub const PLAYER_RADIUS: f64 = 16.0;

// --- Progression ---

pub const BASE_XP_REQUIREMENT: u32 = 100;
pub const XP_SCALING: f64 = 1.2;
/// Upgrades offered per level-up.
pub const UPGRADE_CHOICES: usize = 3;
