//! Zone pickups and bullet hits.
//!
//! Both checks are plain axis-aligned rectangle tests on the entities'
//! transforms and [`Footprint`]s.  Rapier only integrates motion; it does not
//! report these overlaps.
//!
//! | Check       | Rectangles compared           | Touching edges |
//! |-------------|-------------------------------|----------------|
//! | Zone pickup | player display ↔ zone display | overlap        |
//! | Bullet hit  | player body ↔ bullet body     | no overlap     |

use super::setup::spawn_zone;
use super::state::{
    Bullet, Footprint, GameRng, Player, PlayerHit, RoundState, Zone, ZoneCollected,
};
use crate::config::GameConfig;
use crate::graphics::SpriteAssets;
use crate::menu::{FinalScore, GameState};
use bevy::prelude::*;

/// True when `a` and `b` intersect or share an edge.
#[inline]
pub fn rects_touch(a: Rect, b: Rect) -> bool {
    a.min.x <= b.max.x && a.max.x >= b.min.x && a.min.y <= b.max.y && a.max.y >= b.min.y
}

/// True when `a` and `b` share interior area; edge contact is not enough.
#[inline]
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// Collect every zone the player's sprite is touching.
///
/// Each collected zone is despawned and immediately replaced, and the score
/// and difficulty are bumped once per zone.
#[allow(clippy::too_many_arguments)]
pub fn zone_pickup_system(
    mut commands: Commands,
    players: Query<(&Transform, &Footprint), With<Player>>,
    zones: Query<(Entity, &Transform, &Footprint), With<Zone>>,
    mut round: ResMut<RoundState>,
    config: Res<GameConfig>,
    sprites: Res<SpriteAssets>,
    mut rng: ResMut<GameRng>,
    mut collected: MessageWriter<ZoneCollected>,
) {
    let Ok((player_tf, player_fp)) = players.single() else {
        return;
    };
    let player_rect = player_fp.display_rect(player_tf.translation.truncate());

    for (zone, zone_tf, zone_fp) in zones.iter() {
        if !rects_touch(player_rect, zone_fp.display_rect(zone_tf.translation.truncate())) {
            continue;
        }

        commands.entity(zone).despawn();
        round.zones.retain(|&z| z != zone);
        round.award_zone(&config);
        info!("Difficulty increased to {}", round.difficulty);

        collected.write(ZoneCollected {
            score: round.score,
            difficulty: round.difficulty,
        });

        let replacement = spawn_zone(&mut commands, &config, &sprites, &mut rng.0);
        round.zones.push(replacement);
    }
}

/// End the round on the first bullet whose body overlaps the player's body.
///
/// Nothing is despawned here; the overlay and reset take care of cleanup.
pub fn bullet_hit_system(
    players: Query<(&Transform, &Footprint), With<Player>>,
    bullets: Query<(&Transform, &Footprint), With<Bullet>>,
    round: Res<RoundState>,
    mut final_score: ResMut<FinalScore>,
    mut next_state: ResMut<NextState<GameState>>,
    mut hit: MessageWriter<PlayerHit>,
) {
    let Ok((player_tf, player_fp)) = players.single() else {
        return;
    };
    let player_rect = player_fp.body_rect(player_tf.translation.truncate());

    let struck = bullets
        .iter()
        .any(|(tf, fp)| rects_overlap(player_rect, fp.body_rect(tf.translation.truncate())));

    if struck {
        info!(
            "Player hit with {} bullets live; final score {}",
            round.bullets.len(),
            round.score
        );
        final_score.0 = round.score;
        hit.write(PlayerHit {
            final_score: round.score,
        });
        next_state.set(GameState::GameOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(cx: f32, cy: f32, w: f32, h: f32) -> Rect {
        Rect::from_center_size(Vec2::new(cx, cy), Vec2::new(w, h))
    }

    #[test]
    fn separated_rects_neither_touch_nor_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(20.0, 0.0, 10.0, 10.0);
        assert!(!rects_touch(a, b));
        assert!(!rects_overlap(a, b));
    }

    #[test]
    fn shared_edge_touches_but_does_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert!(rects_touch(a, b));
        assert!(!rects_overlap(a, b));
    }

    #[test]
    fn intersecting_rects_touch_and_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(4.0, -3.0, 10.0, 10.0);
        assert!(rects_touch(a, b));
        assert!(rects_overlap(a, b));
        assert!(rects_overlap(b, a));
    }

    #[test]
    fn player_body_is_much_smaller_than_its_sprite() {
        // A bullet grazing the sprite corner misses the 11×11 body.
        let config = GameConfig::default();
        let player = Footprint::player(&config);
        let bullet = Footprint::bullet(&config);
        let bullet_at = Vec2::new(20.0, 20.0);

        assert!(rects_touch(
            player.display_rect(Vec2::ZERO),
            bullet.display_rect(bullet_at)
        ));
        assert!(!rects_overlap(
            player.body_rect(Vec2::ZERO),
            bullet.body_rect(bullet_at)
        ));
    }
}
