//! Sound effects and background music, driven by round messages.
//!
//! | Message         | Effect                                                 |
//! |-----------------|--------------------------------------------------------|
//! | `RoundStarted`  | round-start sound; stop old music; start looping music |
//! | `ZoneCollected` | pickup sound                                           |
//! | `PlayerHit`     | stop music; game-over sound                            |

use crate::constants::{GAME_OVER_SOUND, MUSIC_TRACK, PICKUP_SOUND, ROUND_START_SOUND};
use crate::round::{PlayerHit, RoundStarted, ZoneCollected};
use bevy::prelude::*;

/// Audio handles for the music track and the three one-shots.
///
/// Loaded through `FromWorld` for the same reason as
/// [`crate::graphics::SpriteAssets`].
#[derive(Resource, Clone)]
pub struct SoundAssets {
    pub music: Handle<AudioSource>,
    pub pickup: Handle<AudioSource>,
    pub game_over: Handle<AudioSource>,
    pub round_start: Handle<AudioSource>,
}

impl FromWorld for SoundAssets {
    fn from_world(world: &mut World) -> Self {
        let Some(server) = world.get_resource::<AssetServer>() else {
            return Self {
                music: Handle::default(),
                pickup: Handle::default(),
                game_over: Handle::default(),
                round_start: Handle::default(),
            };
        };
        Self {
            music: server.load(MUSIC_TRACK),
            pickup: server.load(PICKUP_SOUND),
            game_over: server.load(GAME_OVER_SOUND),
            round_start: server.load(ROUND_START_SOUND),
        }
    }
}

/// Marker for the looping music entity.  At most one exists.
#[derive(Component)]
pub struct BackgroundMusic;

/// Which one-shot a [`SoundEffect`] entity is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Pickup,
    GameOver,
    RoundStart,
}

/// Tags a one-shot sound entity; despawned by the engine when playback ends.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundEffect(pub SoundKind);

fn play_once(commands: &mut Commands, sounds: &SoundAssets, kind: SoundKind) {
    let source = match kind {
        SoundKind::Pickup => sounds.pickup.clone(),
        SoundKind::GameOver => sounds.game_over.clone(),
        SoundKind::RoundStart => sounds.round_start.clone(),
    };
    commands.spawn((
        AudioPlayer::new(source),
        PlaybackSettings::DESPAWN,
        SoundEffect(kind),
    ));
}

fn stop_music(commands: &mut Commands, music: &Query<Entity, With<BackgroundMusic>>) {
    for entity in music.iter() {
        commands.entity(entity).despawn();
    }
}

/// React to round messages with the matching sounds.
pub fn round_audio_system(
    mut commands: Commands,
    sounds: Res<SoundAssets>,
    music: Query<Entity, With<BackgroundMusic>>,
    mut started: MessageReader<RoundStarted>,
    mut collected: MessageReader<ZoneCollected>,
    mut hits: MessageReader<PlayerHit>,
) {
    for _ in started.read() {
        play_once(&mut commands, &sounds, SoundKind::RoundStart);
        stop_music(&mut commands, &music);
        commands.spawn((
            AudioPlayer::new(sounds.music.clone()),
            PlaybackSettings::LOOP,
            BackgroundMusic,
        ));
    }

    for _ in collected.read() {
        play_once(&mut commands, &sounds, SoundKind::Pickup);
    }

    for _ in hits.read() {
        stop_music(&mut commands, &music);
        play_once(&mut commands, &sounds, SoundKind::GameOver);
    }
}

/// Registers [`SoundAssets`] and [`round_audio_system`].
///
/// Add after [`crate::round::RoundPlugin`], which registers the messages.
pub struct AudioCuePlugin;

impl Plugin for AudioCuePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundAssets>()
            .add_systems(PostUpdate, round_audio_system);
    }
}
