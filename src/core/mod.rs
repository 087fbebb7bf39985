//! Core domain: game state, run seed and camera.

mod resources;
mod state;
mod systems;

pub use resources::RunConfig;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .add_systems(Startup, setup_camera);
    }
}
