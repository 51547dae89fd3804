use bevy::prelude::*;
use zone_rush::audio::AudioCuePlugin;
use zone_rush::config::ConfigPlugin;
use zone_rush::graphics;
use zone_rush::menu::MenuPlugin;
use zone_rush::physics::ArenaPhysicsPlugin;
use zone_rush::rendering::HudPlugin;
use zone_rush::round::RoundPlugin;

fn main() {
    // Read before the window exists so its size matches the arena.
    let config = ConfigPlugin::default();
    let resolution = config.config().window_resolution();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Zone Rush".into(),
                resolution,
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Config first: every plugin below reads the loaded values.
        .add_plugins(config)
        // MenuPlugin registers GameState, which the round systems gate on.
        .add_plugins((
            MenuPlugin,
            ArenaPhysicsPlugin,
            RoundPlugin,
            AudioCuePlugin,
            HudPlugin,
        ))
        .add_systems(Startup, graphics::setup_camera)
        .run();
}
