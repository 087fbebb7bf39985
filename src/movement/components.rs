//! Movement domain: player components and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Axis-aligned footprint used for door-contact tests
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerSize(pub Vec2);

impl PlayerSize {
    pub fn bounds_at(&self, position: Vec2) -> Rect {
        Rect::from_center_size(position, self.0)
    }
}

#[derive(Component, Debug)]
pub struct MovementState {
    /// Unit vector of the last walking direction
    pub facing: Vec2,
    /// Seconds until the next strike is allowed
    pub strike_cooldown: f32,
}

impl Default for MovementState {
    /// Players start out facing north, towards the top wall.
    fn default() -> Self {
        Self {
            facing: Vec2::Y,
            strike_cooldown: 0.0,
        }
    }
}
