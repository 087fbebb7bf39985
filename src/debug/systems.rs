//! Debug domain: hotkeys for inspecting and skipping through the dungeon.

use bevy::prelude::*;

use crate::rooms::RoomManager;

/// F1: dump every room, its doors and grid coordinate to the log.
pub(crate) fn log_dungeon_layout(keyboard: Res<ButtonInput<KeyCode>>, rooms: Res<RoomManager>) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    let mut ids: Vec<_> = rooms.rooms().map(|r| r.id()).collect();
    ids.sort_unstable();

    let minimap = rooms.minimap();
    info!(
        "[DEBUG] Dungeon: {} rooms on {} grid cells, current {}, state {:?}",
        rooms.room_count(),
        minimap.coord_to_room().len(),
        rooms.current_room_id(),
        rooms.transition_state()
    );
    for room in ids.into_iter().filter_map(|id| rooms.room(id)) {
        let doors: Vec<String> = room
            .doors()
            .iter()
            .map(|d| match d.target_room_id {
                Some(target) => format!("{:?}->{}", d.direction, target),
                None => format!("{:?}->x", d.direction),
            })
            .collect();
        let coord = minimap.coord_of(room.id());
        // A later room landed on the same cell
        let hidden = coord.and_then(|c| minimap.room_at(c)) != Some(room.id());
        info!(
            "[DEBUG]   room {} {:?} at {:?}{} cleared={} visited={} doors=[{}]",
            room.id(),
            room.kind(),
            coord,
            if hidden { " (hidden)" } else { "" },
            room.is_cleared(),
            minimap.is_visited(room.id()),
            doors.join(", ")
        );
    }
}

/// F2: defeat every enemy in the current room.
pub(crate) fn defeat_current_room(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut rooms: ResMut<RoomManager>,
) {
    if !keyboard.just_pressed(KeyCode::F2) || rooms.is_transitioning() {
        return;
    }

    let room = rooms.current_room_mut();
    let room_id = room.id();
    if let Some(population) = room.population_mut() {
        population.defeat_all();
        info!("[DEBUG] Defeated every enemy in room {}", room_id);
    }
}
