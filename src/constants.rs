//! Centralised gameplay constants.
//!
//! Every tuneable value lives here and is mirrored by a field of
//! [`crate::config::GameConfig`], which can override it from
//! `assets/game.toml` without recompiling.

// ── Arena ─────────────────────────────────────────────────────────────────────

/// Width of the playfield in world units (also the window width in pixels).
pub const ARENA_WIDTH: f32 = 800.0;

/// Height of the playfield in world units (also the window height in pixels).
pub const ARENA_HEIGHT: f32 = 600.0;

// ── Player ────────────────────────────────────────────────────────────────────

/// Speed applied on each active input axis (u/s).
///
/// Diagonal movement is not normalised: both axes run at full speed.
pub const PLAYER_SPEED: f32 = 300.0;

/// Edge length of the rendered player sprite.
pub const PLAYER_DISPLAY_SIZE: f32 = 32.0;

/// Edge length of the player's collision footprint.
///
/// Much smaller than the sprite: bullets must hit the centre of the ship.
/// Also the box kept inside the arena walls.
pub const PLAYER_BODY_SIZE: f32 = 11.0;

// ── Zones ─────────────────────────────────────────────────────────────────────

/// Rendered zone width.
pub const ZONE_DISPLAY_WIDTH: f32 = 32.0;

/// Rendered zone height.
pub const ZONE_DISPLAY_HEIGHT: f32 = 28.0;

/// Distance from every arena wall that zones never spawn inside.
pub const ZONE_MARGIN: f32 = 50.0;

// ── Bullets ───────────────────────────────────────────────────────────────────

/// Edge length of the rendered bullet sprite and of its collision footprint.
pub const BULLET_DISPLAY_SIZE: f32 = 16.0;

/// Radius of the ring around the player on which bullets appear.
pub const BULLET_RING_RADIUS: f32 = 400.0;

/// Bullet speed at difficulty zero; the live difficulty is added on top.
pub const BULLET_BASE_SPEED: f32 = 200.0;

/// Base spawn period in milliseconds, divided by the difficulty at round start.
pub const SPAWN_INTERVAL_MS: f32 = 500.0;

/// Shortest spawn period a config may produce once divided by the initial
/// difficulty.
pub const MIN_SPAWN_INTERVAL_MS: f32 = 1.0;

// ── Scoring ───────────────────────────────────────────────────────────────────

pub const SCORE_PER_ZONE: u32 = 10;
pub const DIFFICULTY_PER_ZONE: u32 = 10;

/// Difficulty at the start of every round. Must be non-zero (it divides the
/// spawn interval).
pub const INITIAL_DIFFICULTY: u32 = 1;

/// Largest accepted initial difficulty.
pub const MAX_INITIAL_DIFFICULTY: u32 = 10_000;

// ── Rendering ─────────────────────────────────────────────────────────────────

pub const SCORE_FONT_SIZE: f32 = 32.0;
pub const SCORE_TEXT_OFFSET: f32 = 16.0;
pub const GAME_OVER_FONT_SIZE: f32 = 48.0;
pub const RESTART_PROMPT_FONT_SIZE: f32 = 32.0;

pub const BACKGROUND_Z: f32 = -10.0;
pub const ZONE_Z: f32 = 0.0;
pub const PLAYER_Z: f32 = 1.0;
pub const BULLET_Z: f32 = 2.0;

// ── Assets ────────────────────────────────────────────────────────────────────

pub const GAME_CONFIG_PATH: &str = "assets/game.toml";

pub const PLAYER_SPRITE: &str = "sprites/player.png";
pub const ZONE_SPRITE: &str = "sprites/zone.png";
pub const BULLET_SPRITE: &str = "sprites/bullet.png";
pub const BACKGROUND_SPRITE: &str = "sprites/background.png";

pub const MUSIC_TRACK: &str = "audio/music.ogg";
pub const PICKUP_SOUND: &str = "audio/pickup.ogg";
pub const GAME_OVER_SOUND: &str = "audio/game_over.ogg";
pub const ROUND_START_SOUND: &str = "audio/round_start.ogg";
