//! Player input and movement systems.
//!
//! ## Pipeline (every `Update` frame while playing)
//!
//! 1. [`move_intent_clear_system`]: resets `MoveIntent` to zero.
//! 2. [`keyboard_to_intent_system`]: translates the arrow keys into `MoveIntent`.
//! 3. [`apply_move_intent_system`]: converts `MoveIntent` into the player's `Velocity`.
//!
//! Rapier integrates the velocity in `PostUpdate`; [`confine_player_system`]
//! then pulls the player back inside the arena walls.

use super::state::{MoveIntent, Player};
use crate::config::GameConfig;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Left beats right; neither gives zero.
#[inline]
pub fn horizontal_axis(left: bool, right: bool) -> f32 {
    if left {
        -1.0
    } else if right {
        1.0
    } else {
        0.0
    }
}

/// Up beats down; neither gives zero.
#[inline]
pub fn vertical_axis(up: bool, down: bool) -> f32 {
    if up {
        1.0
    } else if down {
        -1.0
    } else {
        0.0
    }
}

/// Clamp a player centre so a body of `body` size stays inside `arena`.
pub fn confine_to_arena(center: Vec2, body: Vec2, arena: Rect) -> Vec2 {
    let half = (body * 0.5).min(arena.half_size());
    center.clamp(arena.min + half, arena.max - half)
}

// ── Step 1: Clear ─────────────────────────────────────────────────────────────

pub fn move_intent_clear_system(mut intent: ResMut<MoveIntent>) {
    *intent = MoveIntent::default();
}

// ── Step 2: Keyboard → Intent ─────────────────────────────────────────────────

/// Translate the arrow keys into [`MoveIntent`].
///
/// The axes are independent: holding Left and Up moves diagonally at full
/// speed on both.
pub fn keyboard_to_intent_system(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<MoveIntent>) {
    intent.horizontal = horizontal_axis(
        keys.pressed(KeyCode::ArrowLeft),
        keys.pressed(KeyCode::ArrowRight),
    );
    intent.vertical = vertical_axis(
        keys.pressed(KeyCode::ArrowUp),
        keys.pressed(KeyCode::ArrowDown),
    );
}

// ── Step 3: Apply intent ──────────────────────────────────────────────────────

/// Overwrite the player's linear velocity from [`MoveIntent`].
///
/// This is the only system that writes the player's velocity, so tests can
/// populate `MoveIntent` directly and run it in isolation.
pub fn apply_move_intent_system(
    mut q: Query<&mut Velocity, With<Player>>,
    intent: Res<MoveIntent>,
    config: Res<GameConfig>,
) {
    let Ok(mut velocity) = q.single_mut() else {
        return;
    };
    velocity.linvel = Vec2::new(intent.horizontal, intent.vertical) * config.player_speed;
}

// ── World bounds ──────────────────────────────────────────────────────────────

/// Keep the player's collision footprint inside the arena.
///
/// Runs after Rapier writes transforms back; the corrected transform is
/// picked up by Rapier on the next frame.
pub fn confine_player_system(
    mut q: Query<&mut Transform, With<Player>>,
    config: Res<GameConfig>,
) {
    let Ok(mut transform) = q.single_mut() else {
        return;
    };
    let center = transform.translation.truncate();
    let body = Vec2::splat(config.player_body_size);
    let confined = confine_to_arena(center, body, config.arena_rect());
    if confined != center {
        transform.translation.x = confined.x;
        transform.translation.y = confined.y;
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PLAYER_SPEED;

    /// Build a minimal Bevy `App` with just the resources needed to test the
    /// MoveIntent → velocity pipeline, without Rapier or rendering.
    fn build_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(MoveIntent::default());
        app.insert_resource(GameConfig::default());
        app
    }

    fn spawn_test_player(app: &mut App, at: Vec2) {
        app.world_mut().spawn((
            Player,
            Transform::from_translation(at.extend(0.0)),
            Velocity::zero(),
        ));
    }

    fn player_velocity(app: &mut App) -> Vec2 {
        let world = app.world_mut();
        world
            .query_filtered::<&Velocity, With<Player>>()
            .single(world)
            .unwrap()
            .linvel
    }

    fn player_position(app: &mut App) -> Vec2 {
        let world = app.world_mut();
        world
            .query_filtered::<&Transform, With<Player>>()
            .single(world)
            .unwrap()
            .translation
            .truncate()
    }

    fn run_apply(app: &mut App, intent: MoveIntent) {
        app.insert_resource(intent);
        app.add_systems(Update, apply_move_intent_system);
        app.update();
    }

    // ── axis helpers ──────────────────────────────────────────────────────────

    #[test]
    fn left_overrides_right() {
        assert_eq!(horizontal_axis(true, true), -1.0);
        assert_eq!(horizontal_axis(false, true), 1.0);
        assert_eq!(horizontal_axis(false, false), 0.0);
    }

    #[test]
    fn up_overrides_down() {
        assert_eq!(vertical_axis(true, true), 1.0);
        assert_eq!(vertical_axis(false, true), -1.0);
        assert_eq!(vertical_axis(false, false), 0.0);
    }

    // ── apply_move_intent_system ──────────────────────────────────────────────

    #[test]
    fn no_intent_stops_the_player() {
        let mut app = build_test_app();
        app.world_mut().spawn((
            Player,
            Transform::default(),
            Velocity::linear(Vec2::new(120.0, -40.0)),
        ));

        run_apply(&mut app, MoveIntent::default());

        assert_eq!(player_velocity(&mut app), Vec2::ZERO);
    }

    #[test]
    fn diagonal_intent_runs_both_axes_at_full_speed() {
        let mut app = build_test_app();
        spawn_test_player(&mut app, Vec2::new(400.0, 300.0));

        run_apply(
            &mut app,
            MoveIntent {
                horizontal: -1.0,
                vertical: 1.0,
            },
        );

        assert_eq!(
            player_velocity(&mut app),
            Vec2::new(-PLAYER_SPEED, PLAYER_SPEED)
        );
    }

    #[test]
    fn keyboard_feeds_velocity_through_intent() {
        let mut app = build_test_app();
        spawn_test_player(&mut app, Vec2::new(400.0, 300.0));
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ArrowRight);
        keys.press(KeyCode::ArrowDown);
        app.insert_resource(keys);
        app.add_systems(
            Update,
            (
                move_intent_clear_system,
                keyboard_to_intent_system,
                apply_move_intent_system,
            )
                .chain(),
        );

        app.update();

        assert_eq!(player_velocity(&mut app), Vec2::new(300.0, -300.0));
    }

    // ── confine_player_system ─────────────────────────────────────────────────

    #[test]
    fn player_outside_arena_is_pulled_back_in() {
        let mut app = build_test_app();
        spawn_test_player(&mut app, Vec2::new(-120.0, 950.0));
        app.add_systems(Update, confine_player_system);

        app.update();

        let pos = player_position(&mut app);
        assert_eq!(pos, Vec2::new(5.5, 594.5), "got {pos:?}");
    }

    #[test]
    fn player_inside_arena_is_untouched() {
        let mut app = build_test_app();
        spawn_test_player(&mut app, Vec2::new(400.0, 300.0));
        app.add_systems(Update, confine_player_system);

        app.update();

        assert_eq!(player_position(&mut app), Vec2::new(400.0, 300.0));
    }
}
