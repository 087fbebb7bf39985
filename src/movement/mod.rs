//! Movement domain: top-down player locomotion on a kinematic body.

mod bootstrap;
mod components;
mod resources;
mod systems;


pub use components::{GameLayer, MovementState, Player, PlayerSize};
pub use resources::{MovementInput, MovementTuning};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{apply_movement, clamp_to_play_area, read_input, update_timers};

/// Input sampling and locomotion; gameplay that reads the player runs after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .insert_resource(Gravity(Vec2::ZERO))
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(
                Update,
                (read_input, update_timers, apply_movement, clamp_to_play_area)
                    .chain()
                    .in_set(MovementSet)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
