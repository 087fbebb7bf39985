use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Waiting for the dungeon config
    #[default]
    Loading,
    Playing,
}
