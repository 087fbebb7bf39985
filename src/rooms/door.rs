//! Rooms domain: doors and their geometry.

use bevy::prelude::*;

use crate::content::{Direction, DoorGeometryDef, RoomKind};
use crate::rooms::RoomId;

/// Cosmetic/behavioural tag on a door. Does not affect topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorKind {
    #[default]
    Normal,
    Boss,
    Treasure,
}

impl DoorKind {
    /// Kind for both doors of a chain edge between rooms of the given kinds.
    pub fn for_edge(a: RoomKind, b: RoomKind) -> DoorKind {
        if a == RoomKind::Boss || b == RoomKind::Boss {
            DoorKind::Boss
        } else if a == RoomKind::Treasure || b == RoomKind::Treasure {
            DoorKind::Treasure
        } else {
            DoorKind::Normal
        }
    }
}

/// A directional exit from a room
#[derive(Debug, Clone)]
pub struct Door {
    pub direction: Direction,
    pub kind: DoorKind,
    pub is_open: bool,
    /// None when the door leads nowhere
    pub target_room_id: Option<RoomId>,
    /// Player-intersection rectangle in world space
    pub bounds: Rect,
    /// Presentation only
    pub visual_offset: Vec2,
    /// Presentation only
    pub rotation_degrees: f32,
}

impl Door {
    pub fn new(
        direction: Direction,
        kind: DoorKind,
        play_area: Rect,
        geometry: &DoorGeometryDef,
    ) -> Self {
        Self {
            direction,
            kind,
            is_open: false,
            target_room_id: None,
            bounds: door_bounds(direction, play_area, geometry),
            visual_offset: kind_offset(kind, geometry),
            rotation_degrees: direction.rotation_degrees(),
        }
    }

    pub fn is_dead_end(&self) -> bool {
        self.target_room_id.is_none()
    }

    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }
}

/// Door rectangle centered on the midpoint of the given wall, pushed outwards
/// by `wall_offset`. East/West doors are the North/South door turned sideways.
pub fn door_bounds(direction: Direction, play_area: Rect, geometry: &DoorGeometryDef) -> Rect {
    let size = Vec2::new(geometry.width, geometry.height) * geometry.scale;
    let half = play_area.half_size();
    let (wall_center, size) = match direction {
        Direction::North | Direction::South => (
            play_area.center() + direction.world_offset() * half.y,
            size,
        ),
        Direction::East | Direction::West => (
            play_area.center() + direction.world_offset() * half.x,
            Vec2::new(size.y, size.x),
        ),
    };
    let center = wall_center + direction.world_offset() * geometry.wall_offset;
    Rect::from_center_size(center, size)
}

fn kind_offset(kind: DoorKind, geometry: &DoorGeometryDef) -> Vec2 {
    let (x, y) = match kind {
        DoorKind::Normal => geometry.kind_offsets.normal,
        DoorKind::Boss => geometry.kind_offsets.boss,
        DoorKind::Treasure => geometry.kind_offsets.treasure,
    };
    Vec2::new(x, y)
}
