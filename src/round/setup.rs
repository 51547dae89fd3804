//! Round setup, in-place restart and reset.
//!
//! [`setup_round`] runs on `OnEnter(Playing)`.  [`restart_round_system`]
//! handles Space during play without leaving the state.  Both go through
//! [`RoundSetup::restart`], so the two paths build identical rounds.

use super::state::{
    Background, Bullet, BulletSpawnTimer, Footprint, GameRng, Player, RoundStarted, RoundState,
    SceneEntity, Zone,
};
use crate::config::GameConfig;
use crate::constants::{BACKGROUND_Z, BULLET_Z, PLAYER_Z, ZONE_Z};
use crate::graphics::SpriteAssets;
use crate::rendering::spawn_score_hud;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

// ── Entity spawners ───────────────────────────────────────────────────────────

/// Spawn the player at the arena centre, at rest.
pub fn spawn_player(
    commands: &mut Commands,
    config: &GameConfig,
    sprites: &SpriteAssets,
) -> Entity {
    let footprint = Footprint::player(config);
    commands
        .spawn((
            Player,
            SceneEntity,
            footprint,
            Sprite {
                image: sprites.player.clone(),
                custom_size: Some(footprint.display),
                ..default()
            },
            RigidBody::KinematicVelocityBased,
            Velocity::zero(),
            Transform::from_translation(config.arena_center().extend(PLAYER_Z)),
        ))
        .id()
}

/// Spawn a zone at a uniformly random point inside the zone margin.
pub fn spawn_zone(
    commands: &mut Commands,
    config: &GameConfig,
    sprites: &SpriteAssets,
    rng: &mut impl Rng,
) -> Entity {
    let margin = config.zone_margin;
    let x = rng.gen_range(margin..=config.arena_width - margin);
    let y = rng.gen_range(margin..=config.arena_height - margin);
    let footprint = Footprint::zone(config);
    commands
        .spawn((
            Zone,
            footprint,
            Sprite {
                image: sprites.zone.clone(),
                custom_size: Some(footprint.display),
                ..default()
            },
            Transform::from_xyz(x, y, ZONE_Z),
        ))
        .id()
}

/// Spawn a bullet at `origin` flying with `velocity`.
pub fn spawn_bullet(
    commands: &mut Commands,
    config: &GameConfig,
    sprites: &SpriteAssets,
    origin: Vec2,
    velocity: Vec2,
) -> Entity {
    let footprint = Footprint::bullet(config);
    commands
        .spawn((
            Bullet,
            footprint,
            Sprite {
                image: sprites.bullet.clone(),
                custom_size: Some(footprint.display),
                ..default()
            },
            RigidBody::KinematicVelocityBased,
            Velocity::linear(velocity),
            Transform::from_translation(origin.extend(BULLET_Z)),
        ))
        .id()
}

fn spawn_background(commands: &mut Commands, config: &GameConfig, sprites: &SpriteAssets) {
    commands.spawn((
        Background,
        SceneEntity,
        Sprite {
            image: sprites.background.clone(),
            custom_size: Some(Vec2::new(config.arena_width, config.arena_height)),
            ..default()
        },
        Transform::from_translation(config.arena_center().extend(BACKGROUND_Z)),
    ));
}

// ── Reset ─────────────────────────────────────────────────────────────────────

/// Despawn every tracked zone and bullet and zero the counters.
///
/// The player and HUD are left alone; the next setup replaces them.
/// Entities that are already gone are skipped silently.
pub fn reset_round(commands: &mut Commands, round: &mut RoundState, config: &GameConfig) {
    for entity in round.clear(config.initial_difficulty) {
        commands.entity(entity).try_despawn();
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

/// Everything needed to tear down and build a round.
#[derive(SystemParam)]
pub struct RoundSetup<'w, 's> {
    commands: Commands<'w, 's>,
    config: Res<'w, GameConfig>,
    round: ResMut<'w, RoundState>,
    spawn_timer: ResMut<'w, BulletSpawnTimer>,
    sprites: Res<'w, SpriteAssets>,
    rng: ResMut<'w, GameRng>,
    scene: Query<'w, 's, Entity, With<SceneEntity>>,
    started: MessageWriter<'w, RoundStarted>,
}

impl RoundSetup<'_, '_> {
    /// Reset, clear the previous screen and build a fresh round.
    pub fn restart(&mut self) {
        reset_round(&mut self.commands, &mut self.round, &self.config);
        for entity in self.scene.iter() {
            self.commands.entity(entity).try_despawn();
        }
        self.begin();
    }

    fn begin(&mut self) {
        let config = &*self.config;
        let sprites = &*self.sprites;

        spawn_background(&mut self.commands, config, sprites);
        spawn_player(&mut self.commands, config, sprites);
        spawn_score_hud(&mut self.commands, self.round.score);

        let zone = spawn_zone(&mut self.commands, config, sprites, &mut self.rng.0);
        self.round.zones.push(zone);

        *self.spawn_timer =
            BulletSpawnTimer::for_round(config.spawn_interval_ms, self.round.difficulty);

        self.started.write(RoundStarted);
        info!(
            "Round started (difficulty {}, spawn every {:.3}s)",
            self.round.difficulty,
            self.spawn_timer.0.duration().as_secs_f32()
        );
    }
}

/// `OnEnter(Playing)`: build a fresh round.
pub fn setup_round(mut setup: RoundSetup) {
    setup.restart();
}

/// Space during play restarts the round in place.
pub fn restart_round_system(keys: Res<ButtonInput<KeyCode>>, mut setup: RoundSetup) {
    if keys.just_pressed(KeyCode::Space) {
        info!("Round restarted");
        setup.restart();
    }
}

/// `OnExit(Playing)`: remove the player, background and HUD.
///
/// Zones and bullets stay until the reset triggered by the restart.
pub fn despawn_scene_entities(mut commands: Commands, query: Query<Entity, With<SceneEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
