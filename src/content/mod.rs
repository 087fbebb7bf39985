//! Content domain: dungeon config loading and validation at startup.

mod data;
mod loader;
mod validation;


pub use data::{
    Direction, DoorGeometryDef, DungeonConfig, PlayerDef, RoomKind, RoomLayoutDef,
    SpawnChancesDef,
};
pub use loader::{ContentLoadError, load_dungeon_config};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Direction>()
            .register_type::<RoomKind>()
            .add_systems(Startup, load_content);
    }
}

/// Load and validate the dungeon config. Any failure is fatal: the errors are
/// logged and the app exits before the dungeon is generated.
fn load_content(
    mut commands: Commands,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    match load_dungeon_config(Path::new("assets/data")) {
        Ok(config) => {
            info!(
                "[CONTENT] Loaded dungeon config: {} rooms, {}x{} play area",
                config.room_layout.num_rooms,
                config.room_layout.play_area_width,
                config.room_layout.play_area_height
            );
            commands.insert_resource(config);
            next_state.set(GameState::Playing);
        }
        Err(errors) => {
            for e in &errors {
                error!("[CONTENT] {}", e);
            }
            error!("[CONTENT] Dungeon config unusable, aborting startup");
            exit.write(AppExit::error());
        }
    }
}
