//! Rooms domain: dungeon graph generation, navigation and room transitions.

use bevy::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

use crate::content::{Direction, DoorGeometryDef, RoomKind, RoomLayoutDef};
use crate::rooms::RoomId;
use crate::rooms::door::DoorKind;
use crate::rooms::minimap::MiniMap;
use crate::rooms::population::PopulationSpawner;
use crate::rooms::room::Room;
use crate::rooms::transition::{TransitionController, TransitionState, TransitionStep};

pub const SAFE_ROOM_ID: RoomId = 0;

/// A chain edge created during generation. Dead-end doors are not edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainEdge {
    pub from: RoomId,
    pub to: RoomId,
    pub direction: Direction,
}

/// Result of the transition step that the caller might want to announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The current room changed this frame.
    Entered {
        room_id: RoomId,
        entry_direction: Direction,
    },
    /// The fade-in finished this frame.
    Completed,
}

/// Owns every room, the current room, minimap tracking and the transition
/// controller. Only built through [`RoomManager::generate`], so a current
/// room always exists.
#[derive(Resource, Debug)]
pub struct RoomManager {
    rooms: HashMap<RoomId, Room>,
    edges: Vec<ChainEdge>,
    current_room_id: RoomId,
    minimap: MiniMap,
    transition: TransitionController,
    door_geometry: DoorGeometryDef,
}

impl RoomManager {
    /// Build a chain of `layout.num_rooms` rooms starting at the safe room,
    /// with optional dead-end doors hanging off any room.
    pub fn generate<R: Rng>(
        layout: &RoomLayoutDef,
        door_geometry: &DoorGeometryDef,
        transition_duration: f32,
        spawner: &mut dyn PopulationSpawner,
        rng: &mut R,
    ) -> Self {
        let play_area = layout.play_area();
        let num_rooms = layout.num_rooms.max(1);

        let mut manager = Self {
            rooms: HashMap::new(),
            edges: Vec::new(),
            current_room_id: SAFE_ROOM_ID,
            minimap: MiniMap::default(),
            transition: TransitionController::new(transition_duration),
            door_geometry: door_geometry.clone(),
        };

        manager.rooms.insert(
            SAFE_ROOM_ID,
            Room::new(SAFE_ROOM_ID, RoomKind::SafeZone, play_area),
        );
        manager.minimap.place_origin(SAFE_ROOM_ID);

        for id in 1..num_rooms {
            let kind = pick_room_kind(id, num_rooms, layout, rng);
            let mut room = Room::new(id, kind, play_area);
            room.spawn_enemies(spawner);
            manager.rooms.insert(id, room);
        }

        for id in 1..num_rooms {
            manager.chain_connect(id - 1, id, rng);
        }

        for id in 0..num_rooms {
            if rng.random_bool(layout.dead_end_chance) {
                manager.add_dead_end(id, rng);
            }
        }

        manager.minimap.visit(SAFE_ROOM_ID);

        info!(
            "[DUNGEON] Generated {} rooms, {} chain edges, {} dead ends",
            manager.rooms.len(),
            manager.edges.len(),
            manager.dead_end_count()
        );
        manager
    }

    fn chain_connect<R: Rng>(&mut self, from: RoomId, to: RoomId, rng: &mut R) {
        let mut directions = self.rooms[&from].free_directions();
        directions.shuffle(rng);
        // The origin holds at most one chain door so far, and `to` is fresh.
        let Some(&direction) = directions.first() else {
            warn!("[DUNGEON] Room {} has no free wall to reach {}", from, to);
            return;
        };

        let kind = DoorKind::for_edge(self.rooms[&from].kind(), self.rooms[&to].kind());
        let geometry = &self.door_geometry;

        if let Some(room) = self.rooms.get_mut(&from) {
            room.add_door(direction, kind, geometry);
            room.connect_door(direction, to);
        }
        if let Some(room) = self.rooms.get_mut(&to) {
            room.add_door(direction.opposite(), kind, geometry);
            room.connect_door(direction.opposite(), from);
        }

        self.minimap.connect(from, direction, to);
        self.edges.push(ChainEdge {
            from,
            to,
            direction,
        });
        debug!("[DUNGEON] Room {} --{:?}--> room {}", from, direction, to);
    }

    /// Add a door that leads nowhere on a free wall, if one is left.
    fn add_dead_end<R: Rng>(&mut self, room_id: RoomId, rng: &mut R) {
        let geometry = &self.door_geometry;
        let Some(room) = self.rooms.get_mut(&room_id) else {
            return;
        };
        let mut directions = room.free_directions();
        directions.shuffle(rng);
        let Some(&direction) = directions.first() else {
            debug!("[DUNGEON] Room {} has no free wall for a dead end", room_id);
            return;
        };
        room.add_door(direction, DoorKind::Normal, geometry);
        debug!("[DUNGEON] Room {} dead end {:?}", room_id, direction);
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn edges(&self) -> &[ChainEdge] {
        &self.edges
    }

    pub fn dead_end_count(&self) -> usize {
        self.rooms
            .values()
            .flat_map(|r| r.doors())
            .filter(|d| d.is_dead_end())
            .count()
    }

    pub fn current_room_id(&self) -> RoomId {
        self.current_room_id
    }

    pub fn current_room(&self) -> &Room {
        &self.rooms[&self.current_room_id]
    }

    /// Only the current room is ever mutated after generation.
    pub fn current_room_mut(&mut self) -> &mut Room {
        let id = self.current_room_id;
        self.rooms
            .get_mut(&id)
            .unwrap_or_else(|| unreachable!("current room {} is always generated", id))
    }

    pub fn minimap(&self) -> &MiniMap {
        &self.minimap
    }

    pub fn transition(&self) -> &TransitionController {
        &self.transition
    }

    pub fn transition_state(&self) -> TransitionState {
        self.transition.state()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }

    // -------------------------------------------------------------------------
    // Per-frame
    // -------------------------------------------------------------------------

    /// Update the current room. Returns true on the frame it becomes cleared.
    pub fn update(&mut self, dt: f32, player_position: Vec2) -> bool {
        self.current_room_mut().update(dt, player_position)
    }

    /// Direction of an open door of the current room that the player touches.
    pub fn check_player_at_door(&self, player_bounds: Rect) -> Option<Direction> {
        self.current_room().door_at(player_bounds)
    }

    /// Start a transition through the current room's door in `direction`.
    /// Nothing happens while a transition is in flight or when the door
    /// leads nowhere; returns whether a transition started.
    pub fn request_transition(&mut self, direction: Direction) -> bool {
        if self.transition.is_active() {
            debug!(
                "[TRANSITION] Ignoring {:?}: already {:?}",
                direction,
                self.transition.state()
            );
            return false;
        }

        let Some(target) = self.current_room().door_leads_to(direction) else {
            debug!(
                "[TRANSITION] Ignoring {:?}: no room behind that wall of room {}",
                direction, self.current_room_id
            );
            return false;
        };

        info!(
            "[TRANSITION] Room {} --{:?}--> room {}",
            self.current_room_id, direction, target
        );
        self.transition.begin(direction, target)
    }

    /// Advance the transition. When the fade-out completes the current room
    /// is swapped and `player_position` is moved next to the entry door.
    pub fn update_transition(
        &mut self,
        dt: f32,
        player_position: &mut Vec2,
    ) -> Option<TransitionOutcome> {
        let mut steps = Vec::new();
        self.transition.advance(dt, |step| steps.push(step));

        let mut outcome = None;
        for step in steps {
            match step {
                TransitionStep::Arrive { target, direction } => {
                    *player_position = self.enter_room(target, direction);
                    outcome = Some(TransitionOutcome::Entered {
                        room_id: target,
                        entry_direction: direction.opposite(),
                    });
                }
                TransitionStep::Finished => {
                    debug!("[TRANSITION] Finished in room {}", self.current_room_id);
                    if outcome.is_none() {
                        outcome = Some(TransitionOutcome::Completed);
                    }
                }
            }
        }
        outcome
    }

    /// Make `target` current and return where the player should stand.
    fn enter_room(&mut self, target: RoomId, travel_direction: Direction) -> Vec2 {
        debug_assert!(self.rooms.contains_key(&target), "unknown room {}", target);
        self.current_room_id = target;
        self.minimap.visit(target);

        let spawn_offset = self.door_geometry.player_spawn_offset;
        let room = self.current_room_mut();
        room.close_doors();

        let entry_wall = travel_direction.opposite();
        let play_area = room.play_area();
        let wall_point = play_area.center()
            + entry_wall.world_offset() * play_area.half_size()
            - entry_wall.world_offset() * spawn_offset;
        info!(
            "[TRANSITION] Entered room {} ({:?}) from the {:?}",
            target,
            room.kind(),
            entry_wall
        );
        wall_point
    }
}

fn pick_room_kind<R: Rng>(
    id: RoomId,
    num_rooms: u32,
    layout: &RoomLayoutDef,
    rng: &mut R,
) -> RoomKind {
    if layout.boss_room_at_end && num_rooms >= 3 && id == num_rooms - 1 {
        return RoomKind::Boss;
    }
    if layout.treasure_room_chance > 0.0 && rng.random_bool(layout.treasure_room_chance) {
        return RoomKind::Treasure;
    }
    RoomKind::Combat
}
