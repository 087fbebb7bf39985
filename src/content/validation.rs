//! Validation for numeric ranges in the dungeon config.

use super::data::DungeonConfig;

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}' {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking a strictly positive value
macro_rules! check_positive {
    ($errors:expr, $field:expr, $value:expr) => {
        if !($value > 0.0) {
            $errors.push(ValidationError {
                field: $field,
                message: format!("must be positive, got {}", $value),
            });
        }
    };
}

/// Helper macro for checking a probability in [0, 1]
macro_rules! check_chance {
    ($errors:expr, $field:expr, $value:expr) => {
        if !(0.0..=1.0).contains(&$value) {
            $errors.push(ValidationError {
                field: $field,
                message: format!("must be within [0, 1], got {}", $value),
            });
        }
    };
}

/// Validate every numeric range in the config.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_dungeon_config(config: &DungeonConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let layout = &config.room_layout;
    check_positive!(errors, "room_layout.play_area_width", layout.play_area_width);
    check_positive!(errors, "room_layout.play_area_height", layout.play_area_height);
    check_chance!(errors, "room_layout.dead_end_chance", layout.dead_end_chance);
    check_chance!(
        errors,
        "room_layout.treasure_room_chance",
        layout.treasure_room_chance
    );

    let doors = &config.doors;
    check_positive!(errors, "doors.width", doors.width);
    check_positive!(errors, "doors.height", doors.height);
    check_positive!(errors, "doors.scale", doors.scale);
    if doors.player_spawn_offset < 0.0 {
        errors.push(ValidationError {
            field: "doors.player_spawn_offset",
            message: format!("must not be negative, got {}", doors.player_spawn_offset),
        });
    }

    check_positive!(
        errors,
        "transition.duration_secs",
        config.transition.duration_secs
    );

    let spawn = &config.spawn;
    check_chance!(errors, "spawn.slime_chance", spawn.slime_chance);
    check_chance!(errors, "spawn.skeleton_chance", spawn.skeleton_chance);
    check_chance!(errors, "spawn.brute_chance", spawn.brute_chance);

    let player = &config.player;
    check_positive!(errors, "player.speed", player.speed);
    check_positive!(errors, "player.width", player.width);
    check_positive!(errors, "player.height", player.height);
    check_positive!(errors, "player.strike_reach", player.strike_reach);

    // Cross-field checks only make sense once every size is usable
    if errors.is_empty() {
        check_door_geometry(config, &mut errors);
    }

    errors
}

/// Doors must poke into the room far enough to be touched, and a player
/// arriving through a door must land clear of it.
fn check_door_geometry(config: &DungeonConfig, errors: &mut Vec<ValidationError>) {
    let layout = &config.room_layout;
    let doors = &config.doors;
    let player = &config.player;

    if player.width >= layout.play_area_width || player.height >= layout.play_area_height {
        errors.push(ValidationError {
            field: "player.width",
            message: format!(
                "player {}x{} does not fit the {}x{} play area",
                player.width, player.height, layout.play_area_width, layout.play_area_height
            ),
        });
        return;
    }

    // How far a door rectangle reaches past its wall into the room
    let door_reach = doors.height * doors.scale * 0.5 - doors.wall_offset;
    if door_reach <= 0.0 {
        errors.push(ValidationError {
            field: "doors.wall_offset",
            message: format!(
                "must be below half the door depth ({}), got {}",
                doors.height * doors.scale * 0.5,
                doors.wall_offset
            ),
        });
        return;
    }

    let player_half = player.width.max(player.height) * 0.5;
    let min_spawn = door_reach + player_half;
    if doors.player_spawn_offset <= min_spawn {
        errors.push(ValidationError {
            field: "doors.player_spawn_offset",
            message: format!(
                "must be above {} to land clear of the entry door, got {}",
                min_spawn, doors.player_spawn_offset
            ),
        });
    }

    let max_spawn = layout.play_area_width.min(layout.play_area_height) * 0.5;
    if doors.player_spawn_offset > max_spawn {
        errors.push(ValidationError {
            field: "doors.player_spawn_offset",
            message: format!(
                "must not pass the middle of the room ({}), got {}",
                max_spawn, doors.player_spawn_offset
            ),
        });
    }
}
