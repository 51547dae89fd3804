//! Headless unit tests for the [`GameState`] state machine.
//!
//! These tests use [`MinimalPlugins`]: no window, no rendering, no physics.
//!
//! Covered scenarios:
//! 1. Default initial state is `Playing`.
//! 2. A `NextState` request transitions from `Playing` → `GameOver`.
//! 3. `GameOver` persists across frames with no new transition request.
//! 4. `GameOver` → `Playing` on request.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use zone_rush::menu::GameState;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn app_with_default_state() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app
}

fn current_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

fn request(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The game boots straight into a round.
#[test]
fn default_state_is_playing() {
    let mut app = app_with_default_state();
    app.update();
    assert_eq!(
        current_state(&app),
        GameState::Playing,
        "initial state must be Playing"
    );
}

#[test]
fn transition_playing_to_game_over() {
    let mut app = app_with_default_state();
    app.update();

    request(&mut app, GameState::GameOver);
    app.update();

    assert_eq!(current_state(&app), GameState::GameOver);
}

/// `GameOver` persists without another transition request.
#[test]
fn game_over_persists_across_frames() {
    let mut app = app_with_default_state();
    app.update();
    request(&mut app, GameState::GameOver);
    app.update();

    for _ in 0..5 {
        app.update();
    }

    assert_eq!(
        current_state(&app),
        GameState::GameOver,
        "GameOver must remain stable without a new transition"
    );
}

#[test]
fn game_over_returns_to_playing_on_request() {
    let mut app = app_with_default_state();
    app.update();
    request(&mut app, GameState::GameOver);
    app.update();

    request(&mut app, GameState::Playing);
    app.update();

    assert_eq!(current_state(&app), GameState::Playing);
}
