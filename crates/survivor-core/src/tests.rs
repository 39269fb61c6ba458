#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::PlayerCommand;
    use crate::config::GameConfig;
    use crate::enums::*;
    use crate::errors::{CommandError, ConfigError};
    use crate::events::GameEvent;
    use crate::state::GameSnapshot;
    use crate::types::*;

    // ---- Geometry ----

    #[test]
    fn test_normalize_zero_vector_is_zero() {
        assert_eq!(normalize_or_zero(DVec2::ZERO), DVec2::ZERO);
        assert_eq!(normalize_or_zero(DVec2::new(f64::NAN, 1.0)), DVec2::ZERO);
        assert_eq!(normalize_or_zero(DVec2::new(f64::INFINITY, 0.0)), DVec2::ZERO);
    }

    #[test]
    fn test_probability_clamps() {
        assert_eq!(probability(0.25), 0.25);
        assert_eq!(probability(1.5), 1.0);
        assert_eq!(probability(-0.1), 0.0);
        assert_eq!(probability(f64::NAN), 0.0);
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = normalize_or_zero(DVec2::new(3.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12);
        assert!((n.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_direction() {
        let a = DVec2::new(1.0, 1.0);
        let b = DVec2::new(4.0, 5.0);
        let d = direction(a, b);
        assert!((d.x - 0.6).abs() < 1e-12);
        assert!((d.y - 0.8).abs() < 1e-12);
        assert_eq!(direction(a, a), DVec2::ZERO);
    }

    #[test]
    fn test_heading_ignores_negligible_velocity() {
        assert_eq!(heading(DVec2::ZERO), None);
        let h = heading(DVec2::new(0.0, 2.0)).unwrap();
        assert!((h - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = rotate(DVec2::X, std::f64::consts::FRAC_PI_2);
        assert!(r.x.abs() < 1e-12);
        assert!((r.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_screen_to_world_centres_on_camera() {
        let viewport = DVec2::new(200.0, 100.0);
        let camera = DVec2::new(50.0, -20.0);
        assert_eq!(screen_to_world(DVec2::new(100.0, 50.0), viewport, camera), camera);
        assert_eq!(
            screen_to_world(DVec2::new(110.0, 40.0), viewport, camera),
            DVec2::new(60.0, -30.0)
        );
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance(0.5);
        t.advance(0.25);
        assert_eq!(t.tick, 2);
        assert!((t.elapsed_secs - 0.75).abs() < 1e-12);
    }

    // ---- Configuration ----

    #[test]
    fn test_default_config_validates() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn test_requirement_formula() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.progression.requirement_for(1), 100);
        assert_eq!(cfg.progression.requirement_for(2), 120);
        assert_eq!(cfg.progression.requirement_for(3), 144);
        assert_eq!(cfg.progression.requirement_for(4), 172);
    }

    #[test]
    fn test_wave_scaling_monotonic() {
        let waves = GameConfig::default().waves;
        let mut prev = (0.0, 0.0);
        for wave in 1..30 {
            let h = waves.health_scale(wave);
            let d = waves.damage_scale(wave);
            assert!(h >= prev.0 && d >= prev.1, "scaling dropped at wave {wave}");
            prev = (h, d);
        }
        assert_eq!(waves.health_scale(1), 1.0);
        assert!(waves.speed_scale(100) <= waves.speed_growth_cap);
    }

    #[test]
    fn test_wave_cap_and_boss_waves() {
        let waves = GameConfig::default().waves;
        assert_eq!(waves.wave_cap(1), 5);
        assert_eq!(waves.wave_cap(2), 6);
        assert!(waves.is_boss_wave(5));
        assert!(waves.is_boss_wave(10));
        assert!(!waves.is_boss_wave(4));
    }

    #[test]
    fn test_arena_clamp_reserves_hud_margins() {
        let arena = GameConfig::default().arena;
        let p = arena.clamp(DVec2::new(1.0e6, -1.0e6));
        assert_eq!(p.x, arena.half_width);
        assert_eq!(p.y, -arena.half_height + arena.hud_top);
        let inside = DVec2::new(10.0, 10.0);
        assert_eq!(arena.clamp(inside), inside);
    }

    #[test]
    fn test_config_from_partial_json() {
        let cfg = GameConfig::from_json(r#"{ "dead_zone": 8.0, "waves": { "population_ceiling": 10 } }"#)
            .unwrap();
        assert_eq!(cfg.dead_zone, 8.0);
        assert_eq!(cfg.waves.population_ceiling, 10);
        assert_eq!(cfg.waves.spawn_interval_ms, 1500.0);
        assert_eq!(cfg.characters.len(), 4);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "max_dt": 0.0 }"#),
            Err(ConfigError::Invalid { field: "max_dt", .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "waves": { "health_growth": 0.9 } }"#),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "characters": [] }"#),
            Err(ConfigError::NoCharacters)
        ));
        assert!(matches!(GameConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_rejects_missing_starter_enemy() {
        let mut cfg = GameConfig::default();
        cfg.enemies.retain(|e| e.unlock_wave > 1);
        assert!(matches!(cfg.validate(), Err(ConfigError::NoStarterEnemy)));
    }

    #[test]
    fn test_config_lookups() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.character(CharacterId::Mage).unwrap().health, 80.0);
        assert!(cfg.enemy(EnemyArchetype::Boss).unwrap().boss_wave_only);
        assert!(cfg.enemy(EnemyArchetype::Elite).unwrap().ranged);
        let health = cfg.upgrade(UpgradeId::HealthBoost).unwrap();
        assert_eq!(health.modifier, Modifier::Flat);
        assert_eq!(health.apply_to(100.0), 120.0);
        let dmg = cfg.upgrade(UpgradeId::DamageBoost).unwrap();
        assert!((dmg.apply_to(10.0) - 12.0).abs() < 1e-12);
    }

    // ---- Serde ----

    #[test]
    fn test_command_serde_tagged() {
        let cmd = PlayerCommand::SelectUpgrade {
            upgrade: UpgradeId::DoubleShot,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains(r#""type":"SelectUpgrade""#), "{json}");
        assert!(json.contains("double_shot"), "{json}");
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_event_serde_tagged() {
        let ev = GameEvent::LevelUp { level: 3 };
        let json = serde_json::to_string(&ev).unwrap();
        assert_eq!(json, r#"{"type":"LevelUp","level":3}"#);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = GameSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Menu);
        assert!(back.entities.is_empty());
    }

    #[test]
    fn test_command_error_messages() {
        let err = CommandError::WrongPhase {
            actual: GamePhase::Paused,
        };
        assert_eq!(err.to_string(), "command not allowed in phase Paused");
        let err = CommandError::UpgradeNotOffered(UpgradeId::HealthRegen);
        assert!(err.to_string().contains("HealthRegen"));
    }
}
