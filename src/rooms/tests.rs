//! Rooms domain: tests for generation, room clear state and transitions.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashSet, VecDeque};

use super::door::door_bounds;
use super::{
    DoorKind, EnemyPopulation, PopulationSpawner, Room, RoomId, RoomManager, SAFE_ROOM_ID,
    TransitionController, TransitionOutcome, TransitionState,
};
use crate::content::{Direction, DungeonConfig, RoomKind};

// -----------------------------------------------------------------------------
// Fake combat collaborator
// -----------------------------------------------------------------------------

struct FakePopulation {
    alive: bool,
}

impl EnemyPopulation for FakePopulation {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn update(&mut self, _dt: f32, _player_position: Vec2) {}

    fn take_hit(&mut self, _origin: Vec2, _reach: f32, _damage: f32) -> usize {
        let hit = usize::from(self.alive);
        self.alive = false;
        hit
    }

    fn defeat_all(&mut self) {
        self.alive = false;
    }

    fn draw(&self, _gizmos: &mut Gizmos) {}
}

#[derive(Default)]
struct FakeSpawner {
    calls: Vec<(RoomId, RoomKind)>,
}

impl PopulationSpawner for FakeSpawner {
    fn spawn_population(
        &mut self,
        room_id: RoomId,
        kind: RoomKind,
    ) -> Option<Box<dyn EnemyPopulation>> {
        self.calls.push((room_id, kind));
        Some(Box::new(FakePopulation { alive: true }))
    }
}

fn generate_with(num_rooms: u32, seed: u64, dead_end_chance: f64) -> RoomManager {
    let mut config = DungeonConfig::for_tests();
    config.room_layout.num_rooms = num_rooms;
    config.room_layout.dead_end_chance = dead_end_chance;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    RoomManager::generate(
        &config.room_layout,
        &config.doors,
        config.transition.duration_secs,
        &mut FakeSpawner::default(),
        &mut rng,
    )
}

fn generate(num_rooms: u32, seed: u64) -> RoomManager {
    generate_with(num_rooms, seed, 0.3)
}

fn combat_room(id: RoomId) -> Room {
    let config = DungeonConfig::for_tests();
    Room::new(id, RoomKind::Combat, config.room_layout.play_area())
}

/// Direction of the safe room's chain door.
fn first_chain_direction(manager: &RoomManager) -> Direction {
    manager.edges()[0].direction
}

fn drive(manager: &mut RoomManager, dt: f32, steps: usize, player: &mut Vec2) {
    for _ in 0..steps {
        manager.update_transition(dt, player);
    }
}

// -----------------------------------------------------------------------------
// Direction tests
// -----------------------------------------------------------------------------

#[test]
fn test_opposite_direction() {
    assert_eq!(Direction::North.opposite(), Direction::South);
    assert_eq!(Direction::South.opposite(), Direction::North);
    assert_eq!(Direction::East.opposite(), Direction::West);
    assert_eq!(Direction::West.opposite(), Direction::East);
}

#[test]
fn test_opposite_direction_is_symmetric() {
    for dir in Direction::ALL {
        assert_eq!(dir.opposite().opposite(), dir);
        assert_eq!(dir.grid_offset() + dir.opposite().grid_offset(), IVec2::ZERO);
    }
}

#[test]
fn test_direction_grid_offsets() {
    assert_eq!(Direction::North.grid_offset(), IVec2::new(0, -1));
    assert_eq!(Direction::South.grid_offset(), IVec2::new(0, 1));
    assert_eq!(Direction::East.grid_offset(), IVec2::new(1, 0));
    assert_eq!(Direction::West.grid_offset(), IVec2::new(-1, 0));
}

#[test]
fn test_direction_door_rotation() {
    assert_eq!(Direction::North.rotation_degrees(), 0.0);
    assert_eq!(Direction::East.rotation_degrees(), 90.0);
    assert_eq!(Direction::South.rotation_degrees(), 180.0);
    assert_eq!(Direction::West.rotation_degrees(), -90.0);
}

// -----------------------------------------------------------------------------
// Door tests
// -----------------------------------------------------------------------------

#[test]
fn test_north_door_sits_on_top_wall() {
    let config = DungeonConfig::for_tests();
    let bounds = door_bounds(
        Direction::North,
        config.room_layout.play_area(),
        &config.doors,
    );

    assert_eq!(bounds.center(), Vec2::new(0.0, 240.0));
    assert_eq!(bounds.size(), Vec2::new(64.0, 24.0));
}

#[test]
fn test_side_doors_are_turned() {
    let config = DungeonConfig::for_tests();
    let bounds = door_bounds(
        Direction::West,
        config.room_layout.play_area(),
        &config.doors,
    );

    assert_eq!(bounds.center(), Vec2::new(-400.0, 0.0));
    assert_eq!(bounds.size(), Vec2::new(24.0, 64.0));
}

#[test]
fn test_door_wall_offset_pushes_outwards() {
    let mut config = DungeonConfig::for_tests();
    config.doors.wall_offset = 10.0;
    let bounds = door_bounds(
        Direction::South,
        config.room_layout.play_area(),
        &config.doors,
    );

    assert_eq!(bounds.center(), Vec2::new(0.0, -250.0));
}

#[test]
fn test_door_kind_for_edge() {
    assert_eq!(
        DoorKind::for_edge(RoomKind::SafeZone, RoomKind::Combat),
        DoorKind::Normal
    );
    assert_eq!(
        DoorKind::for_edge(RoomKind::Combat, RoomKind::Boss),
        DoorKind::Boss
    );
    assert_eq!(
        DoorKind::for_edge(RoomKind::Treasure, RoomKind::Combat),
        DoorKind::Treasure
    );
    assert_eq!(
        DoorKind::for_edge(RoomKind::Treasure, RoomKind::Boss),
        DoorKind::Boss
    );
}

// -----------------------------------------------------------------------------
// Room tests
// -----------------------------------------------------------------------------

#[test]
fn test_safe_room_starts_cleared_with_open_doors() {
    let config = DungeonConfig::for_tests();
    let mut room = Room::new(0, RoomKind::SafeZone, config.room_layout.play_area());
    room.add_door(Direction::East, DoorKind::Normal, &config.doors);

    assert!(room.is_cleared());
    assert!(room.door(Direction::East).is_some_and(|d| d.is_open));
}

#[test]
fn test_combat_room_starts_uncleared_with_closed_doors() {
    let config = DungeonConfig::for_tests();
    let mut room = combat_room(1);
    room.add_door(Direction::North, DoorKind::Normal, &config.doors);

    assert!(!room.is_cleared());
    assert!(room.door(Direction::North).is_some_and(|d| !d.is_open));
}

#[test]
fn test_connect_door_sets_target() {
    let config = DungeonConfig::for_tests();
    let mut room = combat_room(1);
    room.add_door(Direction::South, DoorKind::Normal, &config.doors);
    assert_eq!(room.door_leads_to(Direction::South), None);

    room.connect_door(Direction::South, 2);
    assert_eq!(room.door_leads_to(Direction::South), Some(2));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "has no")]
fn test_connect_door_without_door_is_loud_in_debug() {
    let mut room = combat_room(1);
    room.connect_door(Direction::South, 2);
}

#[test]
fn test_missing_door_and_dead_end_look_the_same() {
    let config = DungeonConfig::for_tests();
    let mut room = combat_room(1);
    room.add_door(Direction::East, DoorKind::Normal, &config.doors);

    assert_eq!(room.door_leads_to(Direction::East), None);
    assert_eq!(room.door_leads_to(Direction::West), None);
}

#[test]
fn test_free_directions_shrink_as_doors_are_added() {
    let config = DungeonConfig::for_tests();
    let mut room = combat_room(1);
    assert_eq!(room.free_directions().len(), 4);

    room.add_door(Direction::East, DoorKind::Normal, &config.doors);
    room.add_door(Direction::North, DoorKind::Normal, &config.doors);

    let free = room.free_directions();
    assert_eq!(free.len(), 2);
    assert!(!free.contains(&Direction::East));
    assert!(!free.contains(&Direction::North));
}

#[test]
fn test_room_clears_when_population_dies() {
    let config = DungeonConfig::for_tests();
    let mut room = combat_room(1);
    room.add_door(Direction::North, DoorKind::Normal, &config.doors);
    room.spawn_enemies(&mut FakeSpawner::default());

    assert!(!room.check_if_cleared());
    assert!(!room.is_cleared());

    if let Some(population) = room.population_mut() {
        population.defeat_all();
    }

    assert!(room.check_if_cleared());
    assert!(room.is_cleared());
    assert!(room.doors().iter().all(|d| d.is_open));

    // Idempotent: the flip only reports once
    assert!(!room.check_if_cleared());
    assert!(room.is_cleared());
}

#[test]
fn test_cleared_room_never_closes_doors() {
    let config = DungeonConfig::for_tests();
    let mut room = combat_room(1);
    room.add_door(Direction::North, DoorKind::Normal, &config.doors);
    assert!(room.check_if_cleared());

    room.close_doors();

    assert!(room.is_cleared());
    assert!(room.doors().iter().all(|d| d.is_open));
}

#[test]
fn test_close_doors_on_uncleared_room() {
    let config = DungeonConfig::for_tests();
    let mut room = combat_room(1);
    room.add_door(Direction::North, DoorKind::Normal, &config.doors);
    room.open_doors();
    assert!(room.doors().iter().all(|d| d.is_open));

    room.close_doors();
    assert!(room.doors().iter().all(|d| !d.is_open));
}

#[test]
fn test_spawn_enemies_is_idempotent() {
    let mut spawner = FakeSpawner::default();
    let mut room = combat_room(3);

    room.spawn_enemies(&mut spawner);
    room.spawn_enemies(&mut spawner);

    assert_eq!(spawner.calls, vec![(3, RoomKind::Combat)]);
    assert!(room.is_populated());
}

#[test]
fn test_spawn_enemies_skips_safe_and_cleared_rooms() {
    let config = DungeonConfig::for_tests();
    let mut spawner = FakeSpawner::default();

    let mut safe = Room::new(0, RoomKind::SafeZone, config.room_layout.play_area());
    safe.spawn_enemies(&mut spawner);

    let mut cleared = combat_room(1);
    assert!(cleared.check_if_cleared());
    cleared.spawn_enemies(&mut spawner);

    assert!(spawner.calls.is_empty());
    assert!(!safe.is_populated());
    assert!(!cleared.is_populated());
}

#[test]
fn test_room_update_drives_population() {
    let mut room = combat_room(1);
    room.spawn_enemies(&mut FakeSpawner::default());

    assert!(!room.update(0.016, Vec2::ZERO));
    assert!(!room.update(0.016, Vec2::ZERO));
    assert!(room.population().is_some_and(|p| p.is_alive()));
}

#[test]
fn test_uncleared_room_reports_no_door_contact() {
    let config = DungeonConfig::for_tests();
    let mut room = combat_room(1);
    room.spawn_enemies(&mut FakeSpawner::default());
    room.add_door(Direction::North, DoorKind::Normal, &config.doors);
    room.connect_door(Direction::North, 2);
    room.open_doors();

    let bounds = room.door(Direction::North).map(|d| d.bounds).unwrap();
    assert_eq!(room.door_at(bounds), None);

    if let Some(population) = room.population_mut() {
        population.defeat_all();
    }
    room.check_if_cleared();
    assert_eq!(room.door_at(bounds), Some(Direction::North));
}

// -----------------------------------------------------------------------------
// Generation tests
// -----------------------------------------------------------------------------

#[test]
fn test_degenerate_room_counts_give_only_the_safe_room() {
    for num_rooms in [0, 1] {
        let manager = generate(num_rooms, 11);
        assert_eq!(manager.room_count(), 1);
        assert!(manager.edges().is_empty());
        assert_eq!(manager.current_room_id(), SAFE_ROOM_ID);
        assert_eq!(manager.current_room().kind(), RoomKind::SafeZone);
        assert!(manager.current_room().is_cleared());
    }
}

#[test]
fn test_generation_chain_is_a_connected_path() {
    for seed in 0..40 {
        for num_rooms in 1..12u32 {
            let manager = generate(num_rooms, seed);
            assert_eq!(manager.room_count(), num_rooms as usize);

            let edges = manager.edges();
            assert_eq!(edges.len(), num_rooms as usize - 1);
            for (i, edge) in edges.iter().enumerate() {
                assert_eq!(edge.from, i as RoomId);
                assert_eq!(edge.to, i as RoomId + 1);
            }

            // Walk door targets from the safe room
            let mut seen = HashSet::from([SAFE_ROOM_ID]);
            let mut queue = VecDeque::from([SAFE_ROOM_ID]);
            while let Some(id) = queue.pop_front() {
                let room = manager.room(id).unwrap();
                for target in room.doors().iter().filter_map(|d| d.target_room_id) {
                    if seen.insert(target) {
                        queue.push_back(target);
                    }
                }
            }
            assert_eq!(seen.len(), num_rooms as usize, "seed {seed}");

            // n - 1 undirected edges over n connected nodes: a tree
            let linked_doors: usize = manager
                .rooms()
                .map(|r| r.doors().iter().filter(|d| !d.is_dead_end()).count())
                .sum();
            assert_eq!(linked_doors, 2 * (num_rooms as usize - 1));
        }
    }
}

#[test]
fn test_generation_doors_are_bidirectional() {
    for seed in 0..40 {
        let manager = generate(10, seed);
        for room in manager.rooms() {
            for door in room.doors() {
                let Some(target) = door.target_room_id else {
                    continue;
                };
                let other = manager.room(target).unwrap();
                assert_eq!(
                    other.door_leads_to(door.direction.opposite()),
                    Some(room.id()),
                    "seed {seed}: room {} {:?} -> {}",
                    room.id(),
                    door.direction,
                    target
                );
            }
        }
    }
}

#[test]
fn test_generation_at_most_one_door_per_direction() {
    for seed in 0..40 {
        let manager = generate_with(10, seed, 1.0);
        for room in manager.rooms() {
            let directions: HashSet<Direction> =
                room.doors().iter().map(|d| d.direction).collect();
            assert_eq!(directions.len(), room.doors().len());
        }
    }
}

#[test]
fn test_generation_dead_ends_have_no_reverse_door() {
    for seed in 0..40 {
        let manager = generate_with(10, seed, 1.0);
        for room in manager.rooms() {
            let incoming = manager
                .rooms()
                .flat_map(|r| r.doors())
                .filter(|d| d.target_room_id == Some(room.id()))
                .count();
            let outgoing = room.doors().iter().filter(|d| !d.is_dead_end()).count();
            assert_eq!(incoming, outgoing);

            for door in room.doors().iter().filter(|d| d.is_dead_end()) {
                assert_eq!(door.kind, DoorKind::Normal);
                assert!(!door.is_open || room.is_cleared());
            }
        }
    }
}

#[test]
fn test_generation_dead_end_chance_bounds() {
    let none = generate_with(10, 5, 0.0);
    assert_eq!(none.dead_end_count(), 0);

    // A room has at most two chain doors, so a wall is always left over
    let all = generate_with(10, 5, 1.0);
    assert_eq!(all.dead_end_count(), 10);
    for room in all.rooms() {
        assert_eq!(room.doors().iter().filter(|d| d.is_dead_end()).count(), 1);
    }
}

#[test]
fn test_generation_spawns_enemies_for_combat_rooms_only() {
    let mut config = DungeonConfig::for_tests();
    config.room_layout.num_rooms = 5;
    let mut spawner = FakeSpawner::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let manager = RoomManager::generate(
        &config.room_layout,
        &config.doors,
        0.5,
        &mut spawner,
        &mut rng,
    );

    let spawned: Vec<RoomId> = spawner.calls.iter().map(|(id, _)| *id).collect();
    assert_eq!(spawned, vec![1, 2, 3, 4]);
    assert!(!manager.room(0).unwrap().is_populated());
    assert!((1..5).all(|id| manager.room(id).unwrap().is_populated()));
}

#[test]
fn test_generation_is_deterministic_per_seed() {
    let a = generate(9, 77);
    let b = generate(9, 77);
    assert_eq!(a.edges(), b.edges());
    assert_eq!(a.dead_end_count(), b.dead_end_count());
}

#[test]
fn test_generation_three_room_scenario() {
    let mut manager = generate(3, 21);

    let safe = manager.room(0).unwrap();
    assert_eq!(safe.kind(), RoomKind::SafeZone);
    assert!(safe.is_cleared());
    assert_eq!(manager.edges().len(), 2);

    // Walk into room 1 and defeat everything there
    let direction = first_chain_direction(&manager);
    assert!(manager.request_transition(direction));
    let mut player = Vec2::ZERO;
    manager.update_transition(1.5, &mut player);
    assert_eq!(manager.current_room_id(), 1);
    assert!(!manager.current_room().is_cleared());

    if let Some(population) = manager.current_room_mut().population_mut() {
        population.defeat_all();
    }
    assert!(manager.update(0.016, player));

    let room = manager.room(1).unwrap();
    assert!(room.is_cleared());
    assert!(room.doors().iter().all(|d| d.is_open));
}

#[test]
fn test_generation_boss_room_at_end() {
    let mut config = DungeonConfig::for_tests();
    config.room_layout.num_rooms = 5;
    config.room_layout.boss_room_at_end = true;
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let manager = RoomManager::generate(
        &config.room_layout,
        &config.doors,
        0.5,
        &mut FakeSpawner::default(),
        &mut rng,
    );

    let boss = manager.room(4).unwrap();
    assert_eq!(boss.kind(), RoomKind::Boss);
    let last_edge = manager.edges()[3];
    assert_eq!(
        manager
            .room(3)
            .unwrap()
            .door(last_edge.direction)
            .map(|d| d.kind),
        Some(DoorKind::Boss)
    );
    assert!((1..4).all(|id| manager.room(id).unwrap().kind() != RoomKind::Boss));
}

#[test]
fn test_generation_treasure_rooms() {
    let mut config = DungeonConfig::for_tests();
    config.room_layout.num_rooms = 4;
    config.room_layout.treasure_room_chance = 1.0;
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let manager = RoomManager::generate(
        &config.room_layout,
        &config.doors,
        0.5,
        &mut FakeSpawner::default(),
        &mut rng,
    );

    assert!((1..4).all(|id| manager.room(id).unwrap().kind() == RoomKind::Treasure));
    assert!((1..4).all(|id| !manager.room(id).unwrap().is_cleared()));
}

// -----------------------------------------------------------------------------
// Minimap tests
// -----------------------------------------------------------------------------

#[test]
fn test_minimap_coordinates_follow_chain_directions() {
    for seed in 0..20 {
        let manager = generate(8, seed);
        let minimap = manager.minimap();
        assert_eq!(minimap.coord_of(SAFE_ROOM_ID), Some(IVec2::ZERO));

        for edge in manager.edges() {
            let from = minimap.coord_of(edge.from).unwrap();
            let to = minimap.coord_of(edge.to).unwrap();
            assert_eq!(to, from + edge.direction.grid_offset());
        }

        for (coord, room_id) in minimap.coord_to_room() {
            assert_eq!(minimap.coord_of(*room_id), Some(*coord));
        }
    }
}

#[test]
fn test_minimap_visits_grow_with_transitions() {
    let mut manager = generate(4, 2);
    assert_eq!(manager.minimap().visited().len(), 1);
    assert!(manager.minimap().is_visited(SAFE_ROOM_ID));

    let direction = first_chain_direction(&manager);
    manager.request_transition(direction);
    let mut player = Vec2::ZERO;
    manager.update_transition(1.5, &mut player);

    assert!(manager.minimap().is_visited(1));
    assert!(manager.minimap().is_visited(SAFE_ROOM_ID));
    assert_eq!(manager.minimap().visited().len(), 2);
}

#[test]
fn test_minimap_extent_covers_every_room() {
    let manager = generate(8, 4);
    let extent = manager.minimap().extent().unwrap();
    for room in manager.rooms() {
        let coord = manager.minimap().coord_of(room.id()).unwrap();
        assert!(extent.contains(coord));
    }
}

// -----------------------------------------------------------------------------
// TransitionController tests
// -----------------------------------------------------------------------------

#[test]
fn test_transition_controller_phases_and_alpha() {
    let mut controller = TransitionController::new(0.5);
    assert_eq!(controller.state(), TransitionState::None);
    assert_eq!(controller.overlay_alpha(), 0);

    assert!(controller.begin(Direction::East, 1));
    assert_eq!(controller.state(), TransitionState::FadingOut);

    let mut steps = Vec::new();
    controller.advance(0.25, |s| steps.push(s));
    assert_eq!(controller.state(), TransitionState::FadingOut);
    assert_eq!(controller.overlay_alpha(), 128);

    controller.advance(0.25, |s| steps.push(s));
    assert_eq!(controller.state(), TransitionState::Moving);
    assert_eq!(controller.progress(), 0.0);
    assert_eq!(steps.len(), 1);

    controller.advance(0.5, |s| steps.push(s));
    assert_eq!(controller.state(), TransitionState::FadingIn);
    assert_eq!(controller.overlay_alpha(), 255);

    controller.advance(0.375, |s| steps.push(s));
    assert_eq!(controller.overlay_alpha(), 64);

    controller.advance(0.125, |s| steps.push(s));
    assert_eq!(controller.state(), TransitionState::None);
    assert_eq!(controller.overlay_alpha(), 0);
    assert_eq!(controller.direction(), None);
    assert_eq!(steps.len(), 2);
}

#[test]
fn test_transition_controller_rejects_second_begin() {
    let mut controller = TransitionController::new(0.5);
    assert!(controller.begin(Direction::East, 1));
    controller.advance(0.125, |_| {});

    assert!(!controller.begin(Direction::West, 2));
    assert_eq!(controller.direction(), Some(Direction::East));
    assert_eq!(controller.target(), Some(1));
    assert_eq!(controller.progress(), 0.25);
}

#[test]
fn test_transition_controller_idle_advance_is_noop() {
    let mut controller = TransitionController::new(0.5);
    let mut called = false;
    controller.advance(10.0, |_| called = true);
    assert!(!called);
    assert_eq!(controller.state(), TransitionState::None);
}

// -----------------------------------------------------------------------------
// RoomManager transition tests
// -----------------------------------------------------------------------------

#[test]
fn test_request_transition_without_door_is_ignored() {
    let mut manager = generate_with(3, 6, 0.0);
    let chain = first_chain_direction(&manager);
    let no_door = Direction::ALL
        .into_iter()
        .find(|d| !manager.current_room().has_door(*d))
        .unwrap();
    assert_ne!(no_door, chain);

    assert!(!manager.request_transition(no_door));
    assert_eq!(manager.transition_state(), TransitionState::None);
    assert_eq!(manager.current_room_id(), SAFE_ROOM_ID);
}

#[test]
fn test_request_transition_through_dead_end_is_ignored() {
    let mut manager = generate_with(1, 6, 1.0);
    let dead_end = manager.current_room().doors()[0].direction;

    assert!(!manager.request_transition(dead_end));
    assert!(!manager.is_transitioning());
}

#[test]
fn test_single_transition_in_flight() {
    let mut manager = generate(5, 9);
    let direction = first_chain_direction(&manager);
    let mut player = Vec2::ZERO;

    assert!(manager.request_transition(direction));
    manager.update_transition(0.125, &mut player);
    let progress = manager.transition().progress();

    assert!(!manager.request_transition(direction));
    assert!(!manager.request_transition(direction.opposite()));
    assert_eq!(manager.transition().direction(), Some(direction));
    assert_eq!(manager.transition().progress(), progress);
    assert_eq!(manager.transition_state(), TransitionState::FadingOut);
}

#[test]
fn test_transition_completes_after_three_durations() {
    let mut manager = generate(5, 12);
    let direction = first_chain_direction(&manager);
    let mut player = Vec2::ZERO;

    assert!(manager.request_transition(direction));
    // 0.125 is a quarter of the 0.5s phase: twelve steps cover three phases
    drive(&mut manager, 0.125, 11, &mut player);
    assert_eq!(manager.transition_state(), TransitionState::FadingIn);

    drive(&mut manager, 0.125, 1, &mut player);
    assert_eq!(manager.transition_state(), TransitionState::None);
    assert_eq!(manager.current_room_id(), 1);
    assert_eq!(manager.transition().overlay_alpha(), 0);
}

#[test]
fn test_transition_swaps_room_when_fade_out_ends() {
    let mut manager = generate(5, 13);
    let direction = first_chain_direction(&manager);
    let mut player = Vec2::ZERO;
    manager.request_transition(direction);

    drive(&mut manager, 0.125, 3, &mut player);
    assert_eq!(manager.current_room_id(), SAFE_ROOM_ID);

    let outcome = manager.update_transition(0.125, &mut player);
    assert_eq!(
        outcome,
        Some(TransitionOutcome::Entered {
            room_id: 1,
            entry_direction: direction.opposite(),
        })
    );
    assert_eq!(manager.current_room_id(), 1);
    assert_eq!(manager.transition_state(), TransitionState::Moving);
    assert_eq!(manager.transition().overlay_alpha(), 255);
}

#[test]
fn test_transition_places_player_inside_entry_wall() {
    let config = DungeonConfig::for_tests();
    let mut manager = generate(5, 14);
    let direction = first_chain_direction(&manager);
    let mut player = Vec2::new(123.0, 45.0);

    manager.request_transition(direction);
    manager.update_transition(0.5, &mut player);

    let area = config.room_layout.play_area();
    let entry = direction.opposite();
    let expected = entry.world_offset() * area.half_size()
        - entry.world_offset() * config.doors.player_spawn_offset;
    assert_eq!(player, expected);

    // The player is not standing in the door it came through
    let entry_door = manager.current_room().door(entry).unwrap();
    let player_bounds = Rect::from_center_size(
        player,
        Vec2::new(config.player.width, config.player.height),
    );
    assert!(entry_door.bounds.intersect(player_bounds).is_empty());
}

#[test]
fn test_transition_closes_doors_of_uncleared_target() {
    let mut manager = generate(5, 15);
    let direction = first_chain_direction(&manager);
    let mut player = Vec2::ZERO;

    manager.request_transition(direction);
    manager.update_transition(1.5, &mut player);

    let room = manager.current_room();
    assert!(!room.is_cleared());
    assert!(room.doors().iter().all(|d| !d.is_open));
}

#[test]
fn test_returning_to_cleared_room_keeps_doors_open() {
    let mut manager = generate(5, 16);
    let direction = first_chain_direction(&manager);
    let mut player = Vec2::ZERO;

    manager.request_transition(direction);
    manager.update_transition(1.5, &mut player);
    if let Some(population) = manager.current_room_mut().population_mut() {
        population.defeat_all();
    }
    assert!(manager.update(0.016, player));

    assert!(manager.request_transition(direction.opposite()));
    manager.update_transition(1.5, &mut player);

    assert_eq!(manager.current_room_id(), SAFE_ROOM_ID);
    assert!(manager.current_room().doors().iter().all(|d| d.is_open));
}

#[test]
fn test_arrival_in_cleared_room_does_not_touch_entry_door() {
    let mut config = DungeonConfig::for_tests();
    config.room_layout.num_rooms = 5;
    // Tightest clearance the config validator accepts
    config.doors.player_spawn_offset = 26.5;
    let player_size = Vec2::new(config.player.width, config.player.height);

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut manager = RoomManager::generate(
            &config.room_layout,
            &config.doors,
            config.transition.duration_secs,
            &mut FakeSpawner::default(),
            &mut rng,
        );
        let direction = first_chain_direction(&manager);
        let mut player = Vec2::ZERO;

        manager.request_transition(direction);
        manager.update_transition(1.5, &mut player);
        if let Some(population) = manager.current_room_mut().population_mut() {
            population.defeat_all();
        }
        assert!(manager.update(0.016, player));

        // Back through the now open door into the cleared safe room
        assert!(manager.request_transition(direction.opposite()));
        manager.update_transition(0.5, &mut player);
        assert_eq!(manager.current_room_id(), SAFE_ROOM_ID);
        let bounds = Rect::from_center_size(player, player_size);
        assert_eq!(manager.check_player_at_door(bounds), None, "seed {seed}");

        // Same for the cleared room 1 on the way back in
        manager.update_transition(1.0, &mut player);
        assert!(manager.request_transition(direction));
        manager.update_transition(0.5, &mut player);
        assert_eq!(manager.current_room_id(), 1);
        let bounds = Rect::from_center_size(player, player_size);
        assert_eq!(manager.check_player_at_door(bounds), None, "seed {seed}");
    }
}

// -----------------------------------------------------------------------------
// Door gating tests
// -----------------------------------------------------------------------------

#[test]
fn test_player_at_open_door_in_safe_room() {
    let manager = generate(3, 17);
    let direction = first_chain_direction(&manager);
    let bounds = manager.current_room().door(direction).unwrap().bounds;

    assert_eq!(manager.check_player_at_door(bounds), Some(direction));
    assert_eq!(
        manager.check_player_at_door(Rect::from_center_size(Vec2::ZERO, Vec2::splat(28.0))),
        None
    );
}

#[test]
fn test_uncleared_room_gates_every_door() {
    let mut manager = generate_with(4, 18, 1.0);
    let direction = first_chain_direction(&manager);
    let mut player = Vec2::ZERO;
    manager.request_transition(direction);
    manager.update_transition(1.5, &mut player);
    assert!(!manager.current_room().is_cleared());

    let door_bounds: Vec<Rect> = manager
        .current_room()
        .doors()
        .iter()
        .map(|d| d.bounds)
        .collect();
    for bounds in door_bounds {
        assert_eq!(manager.check_player_at_door(bounds), None);
    }
}
