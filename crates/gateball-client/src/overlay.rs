use bevy::prelude::*;

use crate::game::Round;

/// Seconds the message takes to fade out once the hold window closes.
const MESSAGE_FADE_SECS: f32 = 0.5;

/// The goal banner. Tracks its own alpha so the fade-out is smooth even
/// though the simulation only reports hold/off.
#[derive(Component, Default)]
pub struct GoalMessage {
    alpha: f32,
}

/// Spawn the (initially invisible) goal banner, centered near the top.
pub fn setup_overlay(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(60.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("GOAL!"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::srgb_u8(255, 215, 0).with_alpha(0.0)),
                GoalMessage::default(),
            ));
        });
}

/// Snap to full opacity while the simulation holds the message, then ease
/// back to invisible.
pub fn message_fade(
    time: Res<Time>,
    round: Res<Round>,
    mut query: Query<(&mut GoalMessage, &mut TextColor)>,
) {
    let target = round.0.message_opacity();
    for (mut message, mut color) in &mut query {
        if target >= message.alpha {
            message.alpha = target;
        } else {
            message.alpha =
                (message.alpha - time.delta_secs() / MESSAGE_FADE_SECS).clamp(0.0, 1.0);
        }
        color.0 = color.0.with_alpha(message.alpha);
    }
}
