//! Combat domain: player strikes against the current room's enemies.

use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};
use crate::rooms::RoomManager;

/// Strikes land half a reach in front of the player.
pub(crate) fn strike_origin(position: Vec2, facing: Vec2, reach: f32) -> Vec2 {
    position + facing * (reach * 0.5)
}

pub(crate) fn player_strike(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut rooms: ResMut<RoomManager>,
    mut player_query: Query<(&Transform, &mut MovementState), With<Player>>,
) {
    if !input.strike_just_pressed || rooms.is_transitioning() {
        return;
    }

    let Ok((transform, mut state)) = player_query.single_mut() else {
        return;
    };
    if state.strike_cooldown > 0.0 {
        return;
    }
    state.strike_cooldown = tuning.strike_cooldown;

    let origin = strike_origin(
        transform.translation.truncate(),
        state.facing,
        tuning.strike_reach,
    );
    let room = rooms.current_room_mut();
    let room_id = room.id();
    let Some(population) = room.population_mut() else {
        return;
    };

    let hits = population.take_hit(origin, tuning.strike_reach, tuning.strike_damage);
    if hits > 0 {
        debug!("[COMBAT] Strike hit {} enemies in room {}", hits, room_id);
    }
}
