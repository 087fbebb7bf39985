//! Data definitions for the dungeon content file.
//!
//! These structs mirror the structure in assets/data/dungeon.ron and are used
//! for deserialization. Every numeric key is required.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Shared enums
// ============================================================================

/// Side of a room a door occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect, Default)]
pub enum Direction {
    #[default]
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit step on the minimap grid (y grows southwards).
    pub fn grid_offset(self) -> IVec2 {
        match self {
            Direction::North => IVec2::new(0, -1),
            Direction::South => IVec2::new(0, 1),
            Direction::East => IVec2::new(1, 0),
            Direction::West => IVec2::new(-1, 0),
        }
    }

    /// Unit vector in world space (y up).
    pub fn world_offset(self) -> Vec2 {
        match self {
            Direction::North => Vec2::Y,
            Direction::South => Vec2::NEG_Y,
            Direction::East => Vec2::X,
            Direction::West => Vec2::NEG_X,
        }
    }

    /// Presentation-only rotation of a door sprite on this wall.
    pub fn rotation_degrees(self) -> f32 {
        match self {
            Direction::North => 0.0,
            Direction::East => 90.0,
            Direction::South => 180.0,
            Direction::West => -90.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect, Default)]
pub enum RoomKind {
    #[default]
    Combat,
    SafeZone,
    Boss,
    Treasure,
}

impl RoomKind {
    /// Rooms of this kind start uncleared and host an enemy population.
    pub fn has_combat(self) -> bool {
        !matches!(self, RoomKind::SafeZone)
    }
}

// ============================================================================
// Dungeon config (dungeon.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct DungeonConfig {
    pub schema_version: u32,
    /// Fixed run seed. A random seed is rolled when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    pub room_layout: RoomLayoutDef,
    pub doors: DoorGeometryDef,
    pub transition: TransitionDef,
    pub spawn: SpawnChancesDef,
    pub player: PlayerDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoomLayoutDef {
    pub num_rooms: u32,
    pub play_area_width: f32,
    pub play_area_height: f32,
    pub dead_end_chance: f64,
    pub boss_room_at_end: bool,
    pub treasure_room_chance: f64,
}

impl RoomLayoutDef {
    /// Playable rectangle shared by every room, centered on the origin.
    pub fn play_area(&self) -> Rect {
        Rect::from_center_size(
            Vec2::ZERO,
            Vec2::new(self.play_area_width, self.play_area_height),
        )
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DoorGeometryDef {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    /// Distance from the play-area edge to the door center, positive outwards.
    pub wall_offset: f32,
    /// Distance from the entry door to where the player is placed.
    pub player_spawn_offset: f32,
    pub kind_offsets: DoorKindOffsetsDef,
}

/// Visual offsets per door kind. Presentation only.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DoorKindOffsetsDef {
    pub normal: (f32, f32),
    pub boss: (f32, f32),
    pub treasure: (f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransitionDef {
    pub duration_secs: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpawnChancesDef {
    pub slime_chance: f64,
    pub skeleton_chance: f64,
    pub brute_chance: f64,
    pub max_per_kind: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerDef {
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub strike_reach: f32,
    pub strike_damage: f32,
}

#[cfg(test)]
impl DungeonConfig {
    /// Small fixed config for tests that skip the loader.
    pub fn for_tests() -> Self {
        Self {
            schema_version: 1,
            seed: Some(7),
            room_layout: RoomLayoutDef {
                num_rooms: 6,
                play_area_width: 800.0,
                play_area_height: 480.0,
                dead_end_chance: 0.3,
                boss_room_at_end: false,
                treasure_room_chance: 0.0,
            },
            doors: DoorGeometryDef {
                width: 64.0,
                height: 24.0,
                scale: 1.0,
                wall_offset: 0.0,
                player_spawn_offset: 60.0,
                kind_offsets: DoorKindOffsetsDef {
                    normal: (0.0, 0.0),
                    boss: (0.0, 4.0),
                    treasure: (0.0, 2.0),
                },
            },
            transition: TransitionDef { duration_secs: 0.5 },
            spawn: SpawnChancesDef {
                slime_chance: 0.8,
                skeleton_chance: 0.5,
                brute_chance: 0.2,
                max_per_kind: 3,
            },
            player: PlayerDef {
                speed: 260.0,
                width: 28.0,
                height: 28.0,
                strike_reach: 56.0,
                strike_damage: 10.0,
            },
        }
    }
}
