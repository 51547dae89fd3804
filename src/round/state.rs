//! Round components, resources and messages.
//!
//! Everything that describes a running round lives here.  Systems that mutate
//! this state are in the sibling modules:
//! - [`super::control`]: input and player movement
//! - [`super::collision`]: zone pickups and bullet hits
//! - [`super::spawner`]: timed bullet spawning
//! - [`super::setup`]: round setup and reset

use super::spawner::spawn_interval_secs;
use crate::config::GameConfig;
use crate::constants::{INITIAL_DIFFICULTY, SPAWN_INTERVAL_MS};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Components ─────────────────────────────────────────────────────────────────

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Marker component for a collectible zone.
#[derive(Component)]
pub struct Zone;

/// Marker component for a bullet.
#[derive(Component)]
pub struct Bullet;

/// Marker for the arena background sprite.
#[derive(Component)]
pub struct Background;

/// Tags entities owned by the gameplay screen itself (player, background,
/// score HUD).
///
/// These are despawned on `OnExit(Playing)` and on in-place restarts.  Zones
/// and bullets are *not* tagged: they are tracked by [`RoundState`] and only
/// go away in [`super::reset_round`].
#[derive(Component)]
pub struct SceneEntity;

/// Rendered size and collision size of an entity, centred on its transform.
///
/// Zone pickups compare display rectangles; bullet hits compare the smaller
/// body rectangles.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub display: Vec2,
    pub body: Vec2,
}

impl Footprint {
    pub fn player(config: &GameConfig) -> Self {
        Self {
            display: Vec2::splat(config.player_display_size),
            body: Vec2::splat(config.player_body_size),
        }
    }

    pub fn zone(config: &GameConfig) -> Self {
        let size = Vec2::new(config.zone_display_width, config.zone_display_height);
        Self {
            display: size,
            body: size,
        }
    }

    pub fn bullet(config: &GameConfig) -> Self {
        Self {
            display: Vec2::splat(config.bullet_display_size),
            body: Vec2::splat(config.bullet_display_size),
        }
    }

    #[inline]
    pub fn display_rect(&self, center: Vec2) -> Rect {
        Rect::from_center_size(center, self.display)
    }

    #[inline]
    pub fn body_rect(&self, center: Vec2) -> Rect {
        Rect::from_center_size(center, self.body)
    }
}

// ── Resources ──────────────────────────────────────────────────────────────────

/// Score, difficulty and the entities owned by the current round.
///
/// Injected into every gameplay system instead of living in globals.  The
/// entity lists are the authority for [`super::reset_round`]; the `Zone` and
/// `Bullet` markers are what the per-frame systems query.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub score: u32,
    /// Added to the bullet base speed.  Never feeds back into the spawn cadence.
    pub difficulty: u32,
    pub zones: Vec<Entity>,
    /// Grows for the whole round: bullets are never despawned during play,
    /// so long rounds keep paying for every bullet ever fired.
    pub bullets: Vec<Entity>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(INITIAL_DIFFICULTY)
    }
}

impl RoundState {
    pub fn new(initial_difficulty: u32) -> Self {
        Self {
            score: 0,
            difficulty: initial_difficulty,
            zones: Vec::new(),
            bullets: Vec::new(),
        }
    }

    /// Apply the score and difficulty bump for one zone pickup.
    ///
    /// Both counters saturate at `u32::MAX`.
    pub fn award_zone(&mut self, config: &GameConfig) {
        self.score = self.score.saturating_add(config.score_per_zone);
        self.difficulty = self.difficulty.saturating_add(config.difficulty_per_zone);
    }

    /// Zero the counters and hand back every tracked zone and bullet so the
    /// caller can despawn them.
    pub fn clear(&mut self, initial_difficulty: u32) -> Vec<Entity> {
        let mut tracked = std::mem::take(&mut self.zones);
        tracked.append(&mut self.bullets);
        self.score = 0;
        self.difficulty = initial_difficulty;
        tracked
    }
}

/// Repeating timer that drives the bullet spawner.
///
/// Its period is fixed when the round starts and is not touched again.
#[derive(Resource, Debug, Clone)]
pub struct BulletSpawnTimer(pub Timer);

impl Default for BulletSpawnTimer {
    fn default() -> Self {
        Self::for_round(SPAWN_INTERVAL_MS, INITIAL_DIFFICULTY)
    }
}

impl BulletSpawnTimer {
    pub fn for_round(interval_ms: f32, difficulty: u32) -> Self {
        Self(Timer::from_seconds(
            spawn_interval_secs(interval_ms, difficulty),
            TimerMode::Repeating,
        ))
    }
}

/// Movement intent for the current frame, derived from the arrow keys.
///
/// Each axis is −1, 0 or +1.  Cleared every frame; tests can populate it
/// directly to drive the player without a keyboard.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct MoveIntent {
    /// −1 = left, +1 = right.
    pub horizontal: f32,
    /// −1 = down, +1 = up.
    pub vertical: f32,
}

/// Random source for zone placement and bullet angles.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl FromWorld for GameRng {
    fn from_world(world: &mut World) -> Self {
        match world.get_resource::<GameConfig>().and_then(|c| c.rng_seed) {
            Some(seed) => {
                info!("Using fixed RNG seed {seed}");
                Self::seeded(seed)
            }
            None => Self(StdRng::from_entropy()),
        }
    }
}

// ── Messages ───────────────────────────────────────────────────────────────────

/// A fresh round has been set up.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStarted;

/// The player collected a zone; carries the counters after the bump.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneCollected {
    pub score: u32,
    pub difficulty: u32,
}

/// A bullet touched the player; the round is over.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHit {
    pub final_score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_round_starts_at_zero_score_and_initial_difficulty() {
        let round = RoundState::default();
        assert_eq!(round.score, 0);
        assert_eq!(round.difficulty, 1);
        assert!(round.zones.is_empty());
        assert!(round.bullets.is_empty());
    }

    #[test]
    fn award_zone_adds_ten_to_both_counters() {
        let config = GameConfig::default();
        let mut round = RoundState::default();
        round.award_zone(&config);
        assert_eq!((round.score, round.difficulty), (10, 11));
        round.award_zone(&config);
        assert_eq!((round.score, round.difficulty), (20, 21));
    }

    #[test]
    fn award_zone_saturates_instead_of_overflowing() {
        let config = GameConfig::default();
        let mut round = RoundState::new(u32::MAX - 3);
        round.score = u32::MAX - 1;
        round.award_zone(&config);
        assert_eq!((round.score, round.difficulty), (u32::MAX, u32::MAX));
    }

    #[test]
    fn clear_returns_every_tracked_entity_and_resets_counters() {
        let mut world = World::new();
        let zone = world.spawn_empty().id();
        let bullets: Vec<Entity> = (0..3).map(|_| world.spawn_empty().id()).collect();

        let mut round = RoundState {
            score: 50,
            difficulty: 41,
            zones: vec![zone],
            bullets: bullets.clone(),
        };
        let tracked = round.clear(1);

        assert_eq!(tracked.len(), 4);
        assert!(tracked.contains(&zone));
        assert!(bullets.iter().all(|b| tracked.contains(b)));
        assert_eq!(round, RoundState::new(1));
    }

    #[test]
    fn footprint_rects_are_centred() {
        let config = GameConfig::default();
        let fp = Footprint::player(&config);
        let body = fp.body_rect(Vec2::new(100.0, 50.0));
        assert_eq!(body.min, Vec2::new(94.5, 44.5));
        assert_eq!(body.max, Vec2::new(105.5, 55.5));
        assert_eq!(fp.display_rect(Vec2::ZERO).size(), Vec2::splat(32.0));
    }
}
