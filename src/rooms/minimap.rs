//! Rooms domain: grid coordinates and visit tracking for the minimap.

use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::content::Direction;
use crate::rooms::RoomId;

#[derive(Debug, Default, Clone)]
pub struct MiniMap {
    /// Grid cell to room. A later room landing on an occupied cell takes it over.
    coord_to_room: HashMap<IVec2, RoomId>,
    room_coords: HashMap<RoomId, IVec2>,
    visited: HashSet<RoomId>,
}

impl MiniMap {
    /// Place the starting room at the grid origin.
    pub fn place_origin(&mut self, room_id: RoomId) {
        self.place(room_id, IVec2::ZERO);
    }

    /// Record `to` one cell away from `from` in `direction`.
    /// Returns the new coordinate, or None if `from` was never placed.
    pub fn connect(&mut self, from: RoomId, direction: Direction, to: RoomId) -> Option<IVec2> {
        let origin = *self.room_coords.get(&from)?;
        let coord = origin + direction.grid_offset();
        if let Some(previous) = self.coord_to_room.get(&coord) {
            debug!(
                "[MINIMAP] Room {} overlaps room {} at {:?}",
                to, previous, coord
            );
        }
        self.place(to, coord);
        Some(coord)
    }

    fn place(&mut self, room_id: RoomId, coord: IVec2) {
        self.coord_to_room.insert(coord, room_id);
        self.room_coords.insert(room_id, coord);
    }

    pub fn visit(&mut self, room_id: RoomId) {
        self.visited.insert(room_id);
    }

    pub fn is_visited(&self, room_id: RoomId) -> bool {
        self.visited.contains(&room_id)
    }

    pub fn visited(&self) -> &HashSet<RoomId> {
        &self.visited
    }

    pub fn coord_to_room(&self) -> &HashMap<IVec2, RoomId> {
        &self.coord_to_room
    }

    pub fn coord_of(&self, room_id: RoomId) -> Option<IVec2> {
        self.room_coords.get(&room_id).copied()
    }

    pub fn room_at(&self, coord: IVec2) -> Option<RoomId> {
        self.coord_to_room.get(&coord).copied()
    }

    /// Smallest rectangle of grid cells covering every placed room.
    pub fn extent(&self) -> Option<IRect> {
        let mut coords = self.room_coords.values();
        let first = *coords.next()?;
        Some(coords.fold(IRect::from_corners(first, first), |acc, c| {
            acc.union_point(*c)
        }))
    }
}
