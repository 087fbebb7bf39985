//! UI domain: current room label.

use bevy::prelude::*;

use crate::content::RoomKind;
use crate::rooms::{Room, RoomManager};

/// Marker for the room label text
#[derive(Component)]
pub struct RoomLabelUI;

pub(crate) fn room_label(room: &Room) -> String {
    let kind = match room.kind() {
        RoomKind::SafeZone => "Safe Room",
        RoomKind::Combat => "Combat",
        RoomKind::Boss => "Boss",
        RoomKind::Treasure => "Treasure",
    };
    let status = if room.is_cleared() {
        "doors open"
    } else {
        "enemies remain"
    };
    format!("Room {}  |  {}  |  {}", room.id(), kind, status)
}

pub(crate) fn spawn_room_label(mut commands: Commands) {
    commands.spawn((
        RoomLabelUI,
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            bottom: Val::Px(16.0),
            ..default()
        },
    ));
}

pub(crate) fn update_room_label(
    rooms: Res<RoomManager>,
    mut label_query: Query<&mut Text, With<RoomLabelUI>>,
) {
    let label = room_label(rooms.current_room());
    for mut text in &mut label_query {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
}
