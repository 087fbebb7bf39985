//! Combat domain: enemy rosters that populate rooms, and the player's strike.

mod components;
mod roster;
mod spawn;
mod systems;


pub use components::{Enemy, EnemyKind, Health};
pub use roster::EnemyRoster;
pub use spawn::RosterSpawner;

use bevy::prelude::*;

use crate::combat::systems::player_strike;
use crate::core::GameState;
use crate::movement::MovementSet;
use crate::rooms::RoomManager;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            player_strike
                .after(MovementSet)
                .run_if(in_state(GameState::Playing).and(resource_exists::<RoomManager>)),
        );
    }
}
