//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::PlayerDef;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub strike_reach: f32,
    pub strike_damage: f32,
    pub strike_cooldown: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 260.0,
            strike_reach: 56.0,
            strike_damage: 10.0,
            strike_cooldown: 0.3,
        }
    }
}

impl MovementTuning {
    pub fn from_def(def: &PlayerDef) -> Self {
        Self {
            max_speed: def.speed,
            strike_reach: def.strike_reach,
            strike_damage: def.strike_damage,
            ..default()
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub strike_just_pressed: bool,
}
