//! UI domain: transition fade, minimap and room label.

mod fade;
mod hud_room;
mod minimap;


use bevy::prelude::*;

use crate::core::GameState;
use crate::rooms::RoomManager;
use crate::ui::fade::{spawn_fade_overlay, update_fade_overlay};
use crate::ui::hud_room::{spawn_room_label, update_room_label};
use crate::ui::minimap::{rebuild_minimap, spawn_minimap_panel};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn_fade_overlay, spawn_minimap_panel, spawn_room_label),
        )
        // Rooms advance the transition in Update
        .add_systems(PostUpdate, update_fade_overlay)
        .add_systems(
            PostUpdate,
            (update_room_label, rebuild_minimap)
                .run_if(in_state(GameState::Playing).and(resource_exists::<RoomManager>)),
        );
    }
}
