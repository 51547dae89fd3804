use bevy::prelude::*;

/// Top-level application state machine.
///
/// Every gameplay system in [`crate::round::RoundPlugin`] runs under
/// `.run_if(in_state(GameState::Playing))`, so they are fully inactive while
/// the game-over screen is shown.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Active round; the game starts here.
    #[default]
    Playing,
    /// A bullet hit the player; final score overlay shown.
    GameOver,
}

/// Score carried from the round that just ended into the game-over screen.
///
/// Written once by the bullet-hit system before the transition; the round
/// reset zeroes [`crate::round::RoundState`] but leaves this untouched.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinalScore(pub u32);

/// Root node of the game-over overlay; despawned on `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;

/// Tags the clickable "Press space to restart" prompt.
#[derive(Component)]
pub struct GameOverRestartButton;
