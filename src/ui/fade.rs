//! UI domain: full-screen fade overlay driven by the room transition.

use bevy::prelude::*;

use crate::rooms::RoomManager;

/// Marker for the full-screen fade overlay
#[derive(Component)]
pub struct FadeOverlay;

pub(crate) fn overlay_color(alpha: u8) -> Color {
    Color::srgba(0.0, 0.0, 0.0, f32::from(alpha) / 255.0)
}

pub(crate) fn spawn_fade_overlay(mut commands: Commands) {
    commands.spawn((
        FadeOverlay,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            ..default()
        },
        BackgroundColor(overlay_color(0)),
        // Above every other HUD element
        ZIndex(100),
    ));
}

pub(crate) fn update_fade_overlay(
    rooms: Option<Res<RoomManager>>,
    mut overlay_query: Query<&mut BackgroundColor, With<FadeOverlay>>,
) {
    let alpha = rooms.map_or(0, |r| r.transition().overlay_alpha());
    let color = overlay_color(alpha);

    for mut bg_color in &mut overlay_query {
        if bg_color.0 != color {
            bg_color.0 = color;
        }
    }
}
