use crate::config::GameConfig;
use crate::constants::{BACKGROUND_SPRITE, BULLET_SPRITE, PLAYER_SPRITE, ZONE_SPRITE};
use bevy::prelude::*;

/// Image handles for every sprite in the game.
///
/// Loaded through `FromWorld` rather than a startup system because the first
/// `OnEnter(Playing)` runs before `Startup`.  Without an `AssetServer`
/// (headless tests) the handles stay default and sprites render blank.
#[derive(Resource, Clone)]
pub struct SpriteAssets {
    pub player: Handle<Image>,
    pub zone: Handle<Image>,
    pub bullet: Handle<Image>,
    pub background: Handle<Image>,
}

impl FromWorld for SpriteAssets {
    fn from_world(world: &mut World) -> Self {
        let Some(server) = world.get_resource::<AssetServer>() else {
            return Self {
                player: Handle::default(),
                zone: Handle::default(),
                bullet: Handle::default(),
                background: Handle::default(),
            };
        };
        Self {
            player: server.load(PLAYER_SPRITE),
            zone: server.load(ZONE_SPRITE),
            bullet: server.load(BULLET_SPRITE),
            background: server.load(BACKGROUND_SPRITE),
        }
    }
}

/// Spawn a 2D camera looking at the arena centre, so world coordinates
/// `[0, width] × [0, height]` fill the window exactly.
pub fn setup_camera(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn((
        Camera2d,
        Transform::from_translation(config.arena_center().extend(0.0)),
    ));
    info!("Camera spawned");
}
