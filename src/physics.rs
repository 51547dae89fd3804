//! Rapier pipeline control.
//!
//! Rapier only integrates velocities here: there is no gravity and no
//! contact response.  The pipeline is frozen while the game-over screen is up
//! so leftover bullets stop moving, and resumed when a round starts.

use crate::menu::GameState;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Disable gravity on every Rapier context.
pub fn setup_physics_config(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.gravity = Vec2::ZERO;
    }
}

pub fn pause_physics(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.physics_pipeline_active = false;
    }
}

pub fn resume_physics(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.physics_pipeline_active = true;
    }
}

/// Adds Rapier (one world unit per pixel) and the pipeline control systems.
pub struct ArenaPhysicsPlugin;

impl Plugin for ArenaPhysicsPlugin {
    fn build(&self, app: &mut App) {
        // pixels_per_meter(1.0) keeps velocities in the same units as the
        // config (world units per second).
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
            .add_systems(Startup, setup_physics_config)
            .add_systems(OnEnter(GameState::GameOver), pause_physics)
            .add_systems(OnEnter(GameState::Playing), resume_physics);
    }
}
