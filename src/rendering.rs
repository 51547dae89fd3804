//! Score HUD.
//!
//! | System / fn                | Schedule     | Purpose                          |
//! |----------------------------|--------------|----------------------------------|
//! | `spawn_score_hud`          | round setup  | Spawn the top-left score text    |
//! | `hud_score_display_system` | `PostUpdate` | Refresh text when score changes  |

use crate::constants::{SCORE_FONT_SIZE, SCORE_TEXT_OFFSET};
use crate::round::{RoundState, SceneEntity};
use bevy::prelude::*;

/// Marker for the score HUD text node.
#[derive(Component)]
pub struct HudScoreDisplay;

/// HUD text for a score value.
pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

/// Spawn the score text in the top-left corner.
///
/// Tagged [`SceneEntity`] so it goes away with the gameplay screen.
pub fn spawn_score_hud(commands: &mut Commands, score: u32) -> Entity {
    commands
        .spawn((
            Text::new(score_label(score)),
            TextFont {
                font_size: SCORE_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(SCORE_TEXT_OFFSET),
                top: Val::Px(SCORE_TEXT_OFFSET),
                ..default()
            },
            HudScoreDisplay,
            SceneEntity,
        ))
        .id()
}

/// Rewrite the HUD text whenever the round state changes.
pub fn hud_score_display_system(
    round: Res<RoundState>,
    mut hud: Query<&mut Text, With<HudScoreDisplay>>,
) {
    if !round.is_changed() {
        return;
    }
    let label = score_label(round.score);
    for mut text in hud.iter_mut() {
        if text.0 != label {
            text.0.clone_from(&label);
        }
    }
}

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, hud_score_display_system);
    }
}
