//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  [`ConfigPlugin::load`] reads `assets/game.toml`
//! before the app is built, so the window can be sized from the arena, and
//! overwrites the defaults with any values present in the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! The file is read at build time rather than in `Startup` because the first
//! `OnEnter(GameState::Playing)` runs before the startup schedules, and round
//! setup already needs the final values.
//!
//! ## Tuning workflow
//!
//! 1. Edit `assets/game.toml`.
//! 2. Restart the game. No recompilation required.

use crate::constants::*;
use crate::error::{require_non_negative, require_positive, GameError, GameResult};
use bevy::prelude::*;
use bevy::window::WindowResolution;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Arena ─────────────────────────────────────────────────────────────────
    pub arena_width: f32,
    pub arena_height: f32,

    // ── Player ────────────────────────────────────────────────────────────────
    pub player_speed: f32,
    pub player_display_size: f32,
    pub player_body_size: f32,

    // ── Zones ─────────────────────────────────────────────────────────────────
    pub zone_display_width: f32,
    pub zone_display_height: f32,
    pub zone_margin: f32,

    // ── Bullets ───────────────────────────────────────────────────────────────
    pub bullet_display_size: f32,
    pub bullet_ring_radius: f32,
    pub bullet_base_speed: f32,
    pub spawn_interval_ms: f32,

    // ── Scoring ───────────────────────────────────────────────────────────────
    pub score_per_zone: u32,
    pub difficulty_per_zone: u32,
    pub initial_difficulty: u32,

    /// Fixed seed for zone and bullet placement; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_display_size: PLAYER_DISPLAY_SIZE,
            player_body_size: PLAYER_BODY_SIZE,
            zone_display_width: ZONE_DISPLAY_WIDTH,
            zone_display_height: ZONE_DISPLAY_HEIGHT,
            zone_margin: ZONE_MARGIN,
            bullet_display_size: BULLET_DISPLAY_SIZE,
            bullet_ring_radius: BULLET_RING_RADIUS,
            bullet_base_speed: BULLET_BASE_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            score_per_zone: SCORE_PER_ZONE,
            difficulty_per_zone: DIFFICULTY_PER_ZONE,
            initial_difficulty: INITIAL_DIFFICULTY,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> GameResult<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the game cannot run with.
    pub fn validate(&self) -> GameResult<()> {
        require_positive("arena_width", self.arena_width)?;
        require_positive("arena_height", self.arena_height)?;
        require_non_negative("player_speed", self.player_speed)?;
        require_positive("player_display_size", self.player_display_size)?;
        require_positive("player_body_size", self.player_body_size)?;
        require_positive("zone_display_width", self.zone_display_width)?;
        require_positive("zone_display_height", self.zone_display_height)?;
        require_non_negative("zone_margin", self.zone_margin)?;
        require_positive("bullet_display_size", self.bullet_display_size)?;
        require_non_negative("bullet_ring_radius", self.bullet_ring_radius)?;
        require_non_negative("bullet_base_speed", self.bullet_base_speed)?;
        require_positive("spawn_interval_ms", self.spawn_interval_ms)?;

        if self.zone_margin * 2.0 > self.arena_width.min(self.arena_height) {
            return Err(GameError::InvalidConfig {
                name: "zone_margin",
                value: self.zone_margin,
                requirement: "at most half the smaller arena dimension",
            });
        }
        if self.initial_difficulty == 0 || self.initial_difficulty > MAX_INITIAL_DIFFICULTY {
            return Err(GameError::InvalidConfig {
                name: "initial_difficulty",
                value: self.initial_difficulty as f32,
                requirement: "between 1 and 10000",
            });
        }
        // The cadence is frozen at the initial difficulty, so one check covers
        // the whole round.
        let effective_ms = self.spawn_interval_ms / self.initial_difficulty as f32;
        if effective_ms < MIN_SPAWN_INTERVAL_MS {
            return Err(GameError::InvalidConfig {
                name: "spawn_interval_ms",
                value: self.spawn_interval_ms,
                requirement: ">= 1 ms once divided by initial_difficulty",
            });
        }
        Ok(())
    }

    /// Centre of the arena, where the player spawns and the camera looks.
    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height) * 0.5
    }

    /// Arena bounds as a rectangle in world space.
    pub fn arena_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.arena_width, self.arena_height)
    }

    /// Window size that shows exactly the arena.
    pub fn window_resolution(&self) -> WindowResolution {
        WindowResolution::new(self.arena_width as u32, self.arena_height as u32)
    }
}

/// Where a loaded [`GameConfig`] came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File,
    Missing,
    /// The file was unreadable as a config; holds the error text.
    Rejected(String),
}

/// Read `path`, falling back to [`GameConfig::default`] on any problem.
///
/// A missing file is not an error. Nothing is logged here; the returned
/// [`ConfigSource`] says what happened.
pub fn load_game_config(path: &str) -> (GameConfig, ConfigSource) {
    match std::fs::read_to_string(path) {
        Ok(contents) => match GameConfig::from_toml_str(&contents) {
            Ok(loaded) => (loaded, ConfigSource::File),
            Err(e) => (GameConfig::default(), ConfigSource::Rejected(e.to_string())),
        },
        Err(_) => (GameConfig::default(), ConfigSource::Missing),
    }
}

/// Inserts a [`GameConfig`] read before the app was built.
///
/// The load outcome is logged in [`Plugin::build`], so add this after
/// `DefaultPlugins` to have the log subscriber installed.
pub struct ConfigPlugin {
    path: String,
    config: GameConfig,
    source: ConfigSource,
}

impl ConfigPlugin {
    pub fn load(path: &str) -> Self {
        let (config, source) = load_game_config(path);
        Self {
            path: path.to_owned(),
            config,
            source,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for ConfigPlugin {
    fn default() -> Self {
        Self::load(GAME_CONFIG_PATH)
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let path = &self.path;
        match &self.source {
            ConfigSource::File => info!("Loaded game config from {path}"),
            ConfigSource::Missing => info!("No {path} found; using compiled defaults"),
            ConfigSource::Rejected(e) => warn!("{path}: {e}; using defaults"),
        }
        app.insert_resource(self.config.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_named_keys() {
        let config =
            GameConfig::from_toml_str("player_speed = 450.0\nrng_seed = 42\n").unwrap();
        assert_eq!(config.player_speed, 450.0);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.arena_width, ARENA_WIDTH);
        assert_eq!(config.initial_difficulty, INITIAL_DIFFICULTY);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = GameConfig::from_toml_str("player_speed = \"fast\"").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)), "got {err:?}");
    }

    #[test]
    fn zero_initial_difficulty_is_rejected() {
        let err = GameConfig::from_toml_str("initial_difficulty = 0").unwrap_err();
        assert!(
            matches!(
                err,
                GameError::InvalidConfig {
                    name: "initial_difficulty",
                    ..
                }
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn oversized_zone_margin_is_rejected() {
        let err = GameConfig::from_toml_str("zone_margin = 350.0").unwrap_err();
        assert!(
            matches!(err, GameError::InvalidConfig { name: "zone_margin", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn infinite_arena_is_rejected() {
        let err = GameConfig::from_toml_str("arena_width = inf").unwrap_err();
        assert!(
            matches!(err, GameError::InvalidConfig { name: "arena_width", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn nan_speed_is_rejected() {
        let err = GameConfig::from_toml_str("bullet_base_speed = nan").unwrap_err();
        assert!(
            matches!(err, GameError::InvalidConfig { name: "bullet_base_speed", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn huge_initial_difficulty_is_rejected() {
        let err = GameConfig::from_toml_str("initial_difficulty = 4294967295").unwrap_err();
        assert!(
            matches!(
                err,
                GameError::InvalidConfig {
                    name: "initial_difficulty",
                    ..
                }
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn sub_millisecond_spawn_interval_is_rejected() {
        for doc in [
            "spawn_interval_ms = 1e-9",
            "spawn_interval_ms = 500.0\ninitial_difficulty = 1000",
        ] {
            let err = GameConfig::from_toml_str(doc).unwrap_err();
            assert!(
                matches!(
                    err,
                    GameError::InvalidConfig {
                        name: "spawn_interval_ms",
                        ..
                    }
                ),
                "{doc}: got {err:?}"
            );
        }
    }

    #[test]
    fn largest_initial_difficulty_with_long_interval_is_accepted() {
        let config = GameConfig::from_toml_str(
            "initial_difficulty = 10000\nspawn_interval_ms = 10000.0",
        )
        .unwrap();
        assert_eq!(config.initial_difficulty, MAX_INITIAL_DIFFICULTY);
    }

    fn write_temp_config(name: &str, contents: &str) -> String {
        let file = format!("zone_rush_{}_{name}.toml", std::process::id());
        let path = std::env::temp_dir().join(file);
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let (config, source) = load_game_config("does/not/exist/game.toml");
        assert_eq!(config, GameConfig::default());
        assert_eq!(source, ConfigSource::Missing);
    }

    #[test]
    fn rejected_file_falls_back_to_defaults() {
        let path = write_temp_config("rejected", "arena_height = inf\n");
        let (config, source) = load_game_config(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(config, GameConfig::default());
        assert!(matches!(source, ConfigSource::Rejected(_)), "got {source:?}");
    }

    #[test]
    fn window_follows_overridden_arena() {
        let path = write_temp_config("arena", "arena_width = 1024.0\narena_height = 768.0\n");
        let plugin = ConfigPlugin::load(&path);
        let _ = std::fs::remove_file(&path);

        let resolution = plugin.config().window_resolution();
        assert_eq!((resolution.width(), resolution.height()), (1024.0, 768.0));

        let mut app = App::new();
        app.add_plugins(plugin);
        let inserted = app.world().resource::<GameConfig>();
        assert_eq!(inserted.arena_width, 1024.0);
        assert_eq!(inserted.arena_center(), Vec2::new(512.0, 384.0));
    }

    #[test]
    fn arena_center_is_half_the_dimensions() {
        let config = GameConfig::default();
        assert_eq!(config.arena_center(), Vec2::new(400.0, 300.0));
    }
}
