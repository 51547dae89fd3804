//! Timer-driven bullet spawner.
//!
//! Each firing picks a random angle, places a bullet on a ring around the
//! player (clamped into the arena) and aims it at where the player is *now*.
//! Bullets do not home: once fired they fly straight.
//!
//! The cadence is set once per round from the initial difficulty
//! ([`spawn_interval_secs`]); later difficulty only changes bullet speed.

use super::setup::spawn_bullet;
use super::state::{BulletSpawnTimer, GameRng, Player, RoundState};
use crate::config::GameConfig;
use crate::graphics::SpriteAssets;
use bevy::prelude::*;
use rand::Rng;

/// Spawn period in seconds: `interval_ms / difficulty`.
pub fn spawn_interval_secs(interval_ms: f32, difficulty: u32) -> f32 {
    interval_ms / difficulty.max(1) as f32 / 1000.0
}

/// Bullet speed for the given difficulty.
#[inline]
pub fn bullet_speed(base_speed: f32, difficulty: u32) -> f32 {
    base_speed + difficulty as f32
}

/// Point `radius` units from `center` along `angle_deg` (counter-clockwise
/// from +x).  Not clamped.
pub fn ring_point(center: Vec2, radius: f32, angle_deg: f32) -> Vec2 {
    center + Vec2::from_angle(angle_deg.to_radians()) * radius
}

/// Clamp a point into the arena rectangle.
#[inline]
pub fn clamp_to_arena(point: Vec2, arena: Rect) -> Vec2 {
    point.clamp(arena.min, arena.max)
}

/// Velocity of magnitude `speed` pointing from `from` to `to`.
///
/// Zero when the two points coincide.
pub fn aim_velocity(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    (to - from).normalize_or_zero() * speed
}

/// Fire one bullet per elapsed timer period.
///
/// A long frame that spans several periods fires several bullets, so the
/// average rate never drops with frame rate.
#[allow(clippy::too_many_arguments)]
pub fn bullet_spawn_system(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<BulletSpawnTimer>,
    players: Query<&Transform, With<Player>>,
    mut round: ResMut<RoundState>,
    config: Res<GameConfig>,
    sprites: Res<SpriteAssets>,
    mut rng: ResMut<GameRng>,
) {
    timer.0.tick(time.delta());
    let firings = timer.0.times_finished_this_tick();
    if firings == 0 {
        return;
    }

    let Ok(player_tf) = players.single() else {
        return;
    };
    let target = player_tf.translation.truncate();
    let arena = config.arena_rect();
    let speed = bullet_speed(config.bullet_base_speed, round.difficulty);

    for _ in 0..firings {
        let angle = rng.0.gen_range(0.0..360.0);
        let origin = clamp_to_arena(ring_point(target, config.bullet_ring_radius, angle), arena);
        let velocity = aim_velocity(origin, target, speed);
        let bullet = spawn_bullet(&mut commands, &config, &sprites, origin, velocity);
        round.bullets.push(bullet);
    }

    debug!("{} bullets live", round.bullets.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_interval_is_half_a_second() {
        assert!((spawn_interval_secs(500.0, 1) - 0.5).abs() < 1e-6);
        assert!((spawn_interval_secs(500.0, 10) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn speed_is_base_plus_difficulty() {
        assert_eq!(bullet_speed(200.0, 1), 201.0);
        assert_eq!(bullet_speed(200.0, 41), 241.0);
    }

    #[test]
    fn ring_point_is_exactly_radius_away() {
        let center = Vec2::new(400.0, 300.0);
        for angle in [0.0_f32, 37.0, 90.0, 181.5, 270.0, 359.9] {
            let p = ring_point(center, 400.0, angle);
            assert!(
                (p.distance(center) - 400.0).abs() < 1e-3,
                "angle {angle}: distance {}",
                p.distance(center)
            );
        }
    }

    #[test]
    fn clamped_spawn_points_stay_in_the_arena() {
        let arena = Rect::new(0.0, 0.0, 800.0, 600.0);
        let center = Vec2::new(30.0, 580.0);
        for step in 0..72 {
            let p = clamp_to_arena(ring_point(center, 400.0, step as f32 * 5.0), arena);
            assert!(arena.contains(p), "{p:?} escaped the arena");
        }
    }

    #[test]
    fn aim_velocity_points_at_target_with_requested_speed() {
        let v = aim_velocity(Vec2::new(0.0, 300.0), Vec2::new(400.0, 300.0), 211.0);
        assert!((v - Vec2::new(211.0, 0.0)).length() < 1e-4, "got {v:?}");
        assert_eq!(aim_velocity(Vec2::ONE, Vec2::ONE, 211.0), Vec2::ZERO);
    }
}
