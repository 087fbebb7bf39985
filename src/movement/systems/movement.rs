//! Movement domain: locomotion systems for timers and physics.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player, PlayerSize};
use crate::rooms::RoomManager;

pub(crate) fn update_timers(time: Res<Time>, mut query: Query<&mut MovementState, With<Player>>) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        if state.strike_cooldown > 0.0 {
            state.strike_cooldown = (state.strike_cooldown - dt).max(0.0);
        }
    }
}

/// Top-down movement. The player stands still while a transition is running.
pub(crate) fn apply_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    rooms: Option<Res<RoomManager>>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let frozen = rooms.as_ref().is_some_and(|r| r.is_transitioning());

    for (mut state, mut velocity) in &mut query {
        if frozen {
            velocity.0 = Vec2::ZERO;
            continue;
        }

        velocity.0 = input.axis * tuning.max_speed;
        if input.axis != Vec2::ZERO {
            state.facing = input.axis;
        }
    }
}

/// Keep the player inside the current room. Door rectangles straddle the
/// walls, so they stay reachable from the inside.
pub(crate) fn clamp_to_play_area(
    rooms: Option<Res<RoomManager>>,
    mut query: Query<(&mut Transform, &PlayerSize), With<Player>>,
) {
    let Some(rooms) = rooms else {
        return;
    };
    let area = rooms.current_room().play_area();

    for (mut transform, size) in &mut query {
        let half = size.0 * 0.5;
        let clamped = transform
            .translation
            .truncate()
            .clamp(area.min + half, area.max - half);
        if clamped != transform.translation.truncate() {
            transform.translation.x = clamped.x;
            transform.translation.y = clamped.y;
        }
    }
}
