//! Movement domain: keyboard sampling for walking and striking.

use bevy::prelude::*;

use crate::movement::MovementInput;

/// Direction keys, each paired with its arrow-key alternative.
const WALK_BINDINGS: [(KeyCode, KeyCode, Vec2); 4] = [
    (KeyCode::KeyW, KeyCode::ArrowUp, Vec2::Y),
    (KeyCode::KeyS, KeyCode::ArrowDown, Vec2::NEG_Y),
    (KeyCode::KeyA, KeyCode::ArrowLeft, Vec2::NEG_X),
    (KeyCode::KeyD, KeyCode::ArrowRight, Vec2::X),
];

const STRIKE_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyJ];

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let axis: Vec2 = WALK_BINDINGS
        .iter()
        .filter(|(key, alt, _)| keyboard.any_pressed([*key, *alt]))
        .map(|(_, _, dir)| *dir)
        .sum();

    // Diagonals are no faster than straight lines
    input.axis = axis.normalize_or_zero();
    input.strike_just_pressed = keyboard.any_just_pressed(STRIKE_KEYS);
}
