//! Debug mode for fast iteration and testing.
//!
//! Features:
//! - F1 logs the generated dungeon layout
//! - F2 defeats every enemy in the current room

mod systems;

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{defeat_current_room, log_dungeon_layout};
use crate::rooms::RoomManager;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (log_dungeon_layout, defeat_current_room)
                .run_if(in_state(GameState::Playing).and(resource_exists::<RoomManager>)),
        );
    }
}
