//! Rooms domain: dungeon graph, room clear state and door transitions.

mod door;
mod events;
mod graph;
mod minimap;
mod population;
mod room;
mod systems;
mod transition;

#[cfg(test)]
mod tests;

/// Rooms are numbered in generation order; 0 is the safe room.
pub type RoomId = u32;

pub use door::{Door, DoorKind};
pub use events::{RoomClearedEvent, RoomEnteredEvent, TransitionStartedEvent};
pub use graph::{ChainEdge, RoomManager, SAFE_ROOM_ID, TransitionOutcome};
pub use minimap::MiniMap;
pub use population::{EnemyPopulation, PopulationSpawner};
pub use room::Room;
pub use transition::{TransitionController, TransitionState};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::MovementSet;
use crate::rooms::systems::{
    advance_transition, detect_door_contact, draw_current_room, generate_dungeon,
    update_current_room,
};

pub struct RoomsPlugin;

impl Plugin for RoomsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RoomClearedEvent>()
            .add_message::<RoomEnteredEvent>()
            .add_message::<TransitionStartedEvent>()
            .add_systems(OnEnter(GameState::Playing), generate_dungeon)
            .add_systems(
                Update,
                (
                    advance_transition,
                    update_current_room,
                    detect_door_contact,
                    draw_current_room,
                )
                    .chain()
                    .after(MovementSet)
                    .run_if(in_state(GameState::Playing).and(resource_exists::<RoomManager>)),
            );
    }
}
