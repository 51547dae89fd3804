use super::*;

/// Text shown in the centre of the game-over overlay.
pub fn game_over_label(score: u32) -> String {
    format!("Game Over\nScore: {score}")
}

/// Spawn the full-screen game-over overlay with the final score and the
/// clickable restart prompt.
pub(super) fn setup_game_over(mut commands: Commands, score: Res<FinalScore>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(overlay_bg()),
            ZIndex(300),
            GameOverRoot,
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new(game_over_label(score.0)),
                TextFont {
                    font_size: GAME_OVER_FONT_SIZE,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(overlay, 36.0);

            overlay
                .spawn((
                    Button,
                    Node {
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                        ..default()
                    },
                    GameOverRestartButton,
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("Press space to restart"),
                        TextFont {
                            font_size: RESTART_PROMPT_FONT_SIZE,
                            ..default()
                        },
                        TextColor(prompt_text()),
                    ));
                });
        });

    info!("Game over screen shown (score {})", score.0);
}

/// Recursively despawn all game-over overlay entities.
pub(super) fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Restart on Space or a click on the prompt; tint the prompt on hover.
///
/// Restarting resets the round here and lets `OnEnter(Playing)` run setup.
#[allow(clippy::type_complexity)]
pub(super) fn game_over_input_system(
    mut commands: Commands,
    restart_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<GameOverRestartButton>),
    >,
    mut btn_text: Query<&mut TextColor>,
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    mut round: ResMut<RoundState>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let wants_restart = keys.just_pressed(KeyCode::Space)
        || restart_query
            .iter()
            .any(|(i, _)| *i == Interaction::Pressed);

    if wants_restart {
        reset_round(&mut commands, &mut round, &config);
        next_state.set(GameState::Playing);
        return;
    }

    for (interaction, children) in restart_query.iter() {
        let color = match interaction {
            Interaction::Hovered => prompt_hover_text(),
            Interaction::None => prompt_text(),
            Interaction::Pressed => continue,
        };
        for child in children.iter() {
            if let Ok(mut text_color) = btn_text.get_mut(child) {
                *text_color = TextColor(color);
            }
        }
    }
}
