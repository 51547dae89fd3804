//! Round module: player, zones, bullets, scoring and the round lifecycle.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | Components (`Player`, `Zone`, `Bullet`, `Footprint`), resources (`RoundState`, `BulletSpawnTimer`, `MoveIntent`, `GameRng`) and messages |
//! | [`control`] | Arrow keys → velocity, arena confinement |
//! | [`collision`] | Zone pickups and bullet hits |
//! | [`spawner`] | Timer-driven bullet spawning and its geometry |
//! | [`setup`] | Entity spawners, round setup, in-place restart, reset |
//!
//! ## Frame order while playing
//!
//! `restart → clear intent → keyboard → apply intent → zone pickup → bullet hit → spawner`
//! in `Update`, then Rapier integration and [`confine_player_system`] in
//! `PostUpdate`.

pub mod collision;
pub mod control;
pub mod setup;
pub mod spawner;
pub mod state;

// ── Flat re-exports ───────────────────────────────────────────────────────────

pub use collision::{bullet_hit_system, rects_overlap, rects_touch, zone_pickup_system};
pub use control::{
    apply_move_intent_system, confine_player_system, keyboard_to_intent_system,
    move_intent_clear_system,
};
pub use setup::{
    despawn_scene_entities, reset_round, restart_round_system, setup_round, spawn_bullet,
    spawn_player, spawn_zone, RoundSetup,
};
pub use spawner::bullet_spawn_system;
pub use state::{
    Background, Bullet, BulletSpawnTimer, Footprint, GameRng, MoveIntent, Player, PlayerHit,
    RoundStarted, RoundState, SceneEntity, Zone, ZoneCollected,
};

use crate::config::GameConfig;
use crate::graphics::SpriteAssets;
use crate::menu::GameState;
use bevy::prelude::*;
use bevy_rapier2d::plugin::PhysicsSet;

/// Registers round resources, messages and the gameplay systems.
///
/// Add after [`crate::menu::MenuPlugin`] (which registers `GameState`).  If
/// [`crate::config::ConfigPlugin`] was added first its `GameConfig` is kept;
/// otherwise the compiled defaults are used.
pub struct RoundPlugin;

impl Plugin for RoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<SpriteAssets>()
            .init_resource::<GameRng>()
            .init_resource::<RoundState>()
            .init_resource::<BulletSpawnTimer>()
            .init_resource::<MoveIntent>()
            .add_message::<RoundStarted>()
            .add_message::<ZoneCollected>()
            .add_message::<PlayerHit>()
            .add_systems(OnEnter(GameState::Playing), setup_round)
            .add_systems(OnExit(GameState::Playing), despawn_scene_entities)
            .add_systems(
                Update,
                (
                    restart_round_system,
                    move_intent_clear_system,
                    keyboard_to_intent_system,
                    apply_move_intent_system,
                    zone_pickup_system,
                    bullet_hit_system,
                    bullet_spawn_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                PostUpdate,
                confine_player_system
                    .after(PhysicsSet::Writeback)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
