//! Rooms domain: a single room, its doors and its clear state.

use bevy::prelude::*;

use crate::content::{Direction, DoorGeometryDef, RoomKind};
use crate::rooms::RoomId;
use crate::rooms::door::{Door, DoorKind};
use crate::rooms::population::{EnemyPopulation, PopulationSpawner};

pub struct Room {
    id: RoomId,
    kind: RoomKind,
    play_area: Rect,
    doors: Vec<Door>,
    cleared: bool,
    population: Option<Box<dyn EnemyPopulation>>,
}

impl std::fmt::Debug for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Room")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("doors", &self.doors)
            .field("cleared", &self.cleared)
            .field("populated", &self.population.is_some())
            .finish()
    }
}

impl Room {
    /// Safe rooms start cleared; every other kind has to be fought through.
    pub fn new(id: RoomId, kind: RoomKind, play_area: Rect) -> Self {
        Self {
            id,
            kind,
            play_area,
            doors: Vec::new(),
            cleared: !kind.has_combat(),
            population: None,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn play_area(&self) -> Rect {
        self.play_area
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn door(&self, direction: Direction) -> Option<&Door> {
        self.doors.iter().find(|d| d.direction == direction)
    }

    pub fn has_door(&self, direction: Direction) -> bool {
        self.door(direction).is_some()
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn is_populated(&self) -> bool {
        self.population.is_some()
    }

    pub fn population(&self) -> Option<&dyn EnemyPopulation> {
        self.population.as_deref()
    }

    pub fn population_mut(&mut self) -> Option<&mut (dyn EnemyPopulation + 'static)> {
        self.population.as_deref_mut()
    }

    /// Directions with no door yet.
    pub fn free_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !self.has_door(*d))
            .collect()
    }

    /// Add a door on the given wall. A room holds at most one door per wall;
    /// a second door in the same direction is a programmer error.
    pub fn add_door(&mut self, direction: Direction, kind: DoorKind, geometry: &DoorGeometryDef) {
        if self.has_door(direction) {
            debug_assert!(false, "room {} already has a {:?} door", self.id, direction);
            warn!(
                "[ROOM] Room {} already has a {:?} door, ignoring",
                self.id, direction
            );
            return;
        }

        let mut door = Door::new(direction, kind, self.play_area, geometry);
        door.is_open = self.cleared;
        self.doors.push(door);
    }

    /// Point the existing door in `direction` at `target_id`.
    /// Soft-fails when there is no such door.
    pub fn connect_door(&mut self, direction: Direction, target_id: RoomId) {
        let Some(door) = self.doors.iter_mut().find(|d| d.direction == direction) else {
            debug_assert!(false, "room {} has no {:?} door", self.id, direction);
            warn!(
                "[ROOM] Room {} has no {:?} door to connect to {}",
                self.id, direction, target_id
            );
            return;
        };
        door.target_room_id = Some(target_id);
    }

    /// Target of the door on this wall. No door and a dead-end door look the same.
    pub fn door_leads_to(&self, direction: Direction) -> Option<RoomId> {
        self.door(direction).and_then(|d| d.target_room_id)
    }

    /// Ask the combat collaborator for enemies. Skipped for safe rooms and for
    /// rooms that are already cleared or populated.
    pub fn spawn_enemies(&mut self, spawner: &mut dyn PopulationSpawner) {
        if !self.kind.has_combat() || self.cleared || self.population.is_some() {
            return;
        }
        self.population = spawner.spawn_population(self.id, self.kind);
    }

    /// Flip to cleared once no enemy is alive. Returns true only on the call
    /// that performs the flip.
    pub fn check_if_cleared(&mut self) -> bool {
        if self.cleared {
            return false;
        }

        let alive = self.population.as_ref().is_some_and(|p| p.is_alive());
        if alive {
            return false;
        }

        self.cleared = true;
        self.open_doors();
        info!("[ROOM] Room {} cleared", self.id);
        true
    }

    pub fn open_doors(&mut self) {
        for door in &mut self.doors {
            door.is_open = true;
        }
    }

    /// Cleared rooms keep their doors open for good.
    pub fn close_doors(&mut self) {
        if self.cleared {
            return;
        }
        for door in &mut self.doors {
            door.is_open = false;
        }
    }

    /// Per-frame update while this is the current room.
    /// Returns true on the frame the room becomes cleared.
    pub fn update(&mut self, dt: f32, player_position: Vec2) -> bool {
        if let Some(population) = self.population.as_mut() {
            population.update(dt, player_position);
        }
        self.check_if_cleared()
    }

    /// Open door whose bounds overlap the player. Uncleared rooms never report one.
    pub fn door_at(&self, player_bounds: Rect) -> Option<Direction> {
        if !self.cleared {
            return None;
        }
        self.doors
            .iter()
            .find(|d| d.is_open && !d.bounds.intersect(player_bounds).is_empty())
            .map(|d| d.direction)
    }
}
