use bevy::prelude::*;

pub(super) fn overlay_bg() -> Color {
    Color::srgba(0.0, 0.0, 0.0, 0.82)
}
pub(super) fn title_color() -> Color {
    Color::WHITE
}
/// Restart prompt colour at rest.
pub fn prompt_text() -> Color {
    Color::srgb(0.85, 0.85, 0.85)
}
/// Restart prompt colour while hovered.
pub fn prompt_hover_text() -> Color {
    Color::srgb(1.0, 0.88, 0.45)
}

pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}
