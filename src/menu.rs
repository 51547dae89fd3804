//! Screen state machine and the game-over screen.
//!
//! ## States
//!
//! | State      | Description                                   |
//! |------------|-----------------------------------------------|
//! | `Playing`  | Initial state; a round is running             |
//! | `GameOver` | A bullet hit the player; final score shown    |
//!
//! Transitions: `Playing → GameOver` on any bullet hit, `GameOver → Playing`
//! on Space or a click on the restart prompt.  Space during play restarts in
//! place without leaving `Playing` (see [`crate::round`]).
//!
//! ## Systems (registered by `MenuPlugin`)
//!
//! | System                   | Schedule                   | Purpose                        |
//! |--------------------------|----------------------------|--------------------------------|
//! | `setup_game_over`        | `OnEnter(GameOver)`        | Spawn score overlay and prompt |
//! | `cleanup_game_over`      | `OnExit(GameOver)`         | Despawn overlay entities       |
//! | `game_over_input_system` | `Update / in GameOver`     | Restart on Space or click      |

mod common;
mod game_over;
pub mod types;

use crate::config::GameConfig;
use crate::constants::{GAME_OVER_FONT_SIZE, RESTART_PROMPT_FONT_SIZE};
use crate::round::{reset_round, RoundState};
use bevy::prelude::*;
use common::*;

pub use common::{prompt_hover_text, prompt_text};
pub use game_over::game_over_label;
pub use types::*;

/// Registers `GameState`, `FinalScore` and the game-over overlay.
///
/// Must be added **before** any plugin that calls
/// `.run_if(in_state(GameState::Playing))`, so the state is always registered
/// first.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<FinalScore>()
            .add_systems(OnEnter(GameState::GameOver), game_over::setup_game_over)
            .add_systems(OnExit(GameState::GameOver), game_over::cleanup_game_over)
            .add_systems(
                Update,
                game_over::game_over_input_system.run_if(in_state(GameState::GameOver)),
            );
    }
}
