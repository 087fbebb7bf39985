//! Rooms domain: dungeon setup and per-frame room/transition systems.

use bevy::ecs::message::MessageWriter;
use bevy::math::Isometry2d;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::RosterSpawner;
use crate::content::DungeonConfig;
use crate::core::RunConfig;
use crate::movement::{Player, PlayerSize};
use crate::rooms::door::{Door, DoorKind};
use crate::rooms::events::{RoomClearedEvent, RoomEnteredEvent, TransitionStartedEvent};
use crate::rooms::graph::{RoomManager, TransitionOutcome};

/// Build the dungeon once the config is loaded.
pub(crate) fn generate_dungeon(
    mut commands: Commands,
    config: Res<DungeonConfig>,
    mut run_config: ResMut<RunConfig>,
) {
    if let Some(seed) = config.seed {
        run_config.seed = seed;
    }
    let seed = run_config.seed;

    let layout = &config.room_layout;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    // Enemy rolls get their own stream so layout stays stable when spawn tuning changes
    let mut spawner = RosterSpawner::new(
        config.spawn.clone(),
        layout.play_area(),
        seed.wrapping_add(1),
    );

    let manager = RoomManager::generate(
        layout,
        &config.doors,
        config.transition.duration_secs,
        &mut spawner,
        &mut rng,
    );

    info!(
        "[DUNGEON] Seed {}: starting in room {}",
        seed,
        manager.current_room_id()
    );
    commands.insert_resource(manager);
}

/// Advance an active transition, moving the player when the room swaps.
pub(crate) fn advance_transition(
    time: Res<Time>,
    mut rooms: ResMut<RoomManager>,
    mut player_query: Query<&mut Transform, With<Player>>,
    mut entered_events: MessageWriter<RoomEnteredEvent>,
) {
    if !rooms.is_transitioning() {
        return;
    }

    let Ok(mut transform) = player_query.single_mut() else {
        return;
    };

    let mut position = transform.translation.truncate();
    let outcome = rooms.update_transition(time.delta_secs(), &mut position);
    transform.translation.x = position.x;
    transform.translation.y = position.y;

    if let Some(TransitionOutcome::Entered {
        room_id,
        entry_direction,
    }) = outcome
    {
        entered_events.write(RoomEnteredEvent {
            room_id,
            entry_direction,
        });
    }
}

/// Run the current room's enemies and report the frame it gets cleared.
/// Skipped while a transition is running.
pub(crate) fn update_current_room(
    time: Res<Time>,
    mut rooms: ResMut<RoomManager>,
    player_query: Query<&Transform, With<Player>>,
    mut cleared_events: MessageWriter<RoomClearedEvent>,
) {
    if rooms.is_transitioning() {
        return;
    }

    let Ok(transform) = player_query.single() else {
        return;
    };

    if rooms.update(time.delta_secs(), transform.translation.truncate()) {
        cleared_events.write(RoomClearedEvent {
            room_id: rooms.current_room_id(),
        });
    }
}

/// Walking into an open door starts a transition to the room behind it.
pub(crate) fn detect_door_contact(
    mut rooms: ResMut<RoomManager>,
    player_query: Query<(&Transform, &PlayerSize), With<Player>>,
    mut started_events: MessageWriter<TransitionStartedEvent>,
) {
    if rooms.is_transitioning() {
        return;
    }

    let Ok((transform, size)) = player_query.single() else {
        return;
    };

    let bounds = size.bounds_at(transform.translation.truncate());
    let Some(direction) = rooms.check_player_at_door(bounds) else {
        return;
    };

    let from_room = rooms.current_room_id();
    if rooms.request_transition(direction) {
        if let Some(to_room) = rooms.transition().target() {
            started_events.write(TransitionStartedEvent {
                from_room,
                to_room,
                direction,
            });
        }
    }
}

pub(crate) fn draw_current_room(rooms: Res<RoomManager>, mut gizmos: Gizmos) {
    let room = rooms.current_room();
    let area = room.play_area();

    let wall_color = if room.is_cleared() {
        Color::srgb(0.55, 0.55, 0.6)
    } else {
        Color::srgb(0.7, 0.35, 0.3)
    };
    gizmos.rect_2d(
        Isometry2d::from_translation(area.center()),
        area.size(),
        wall_color,
    );

    for door in room.doors() {
        gizmos.rect_2d(
            Isometry2d::from_translation(door.center() + door.visual_offset),
            door.bounds.size(),
            door_color(door),
        );
    }

    if let Some(population) = room.population() {
        population.draw(&mut gizmos);
    }
}

fn door_color(door: &Door) -> Color {
    if door.is_dead_end() {
        return Color::srgb(0.3, 0.3, 0.3);
    }
    if !door.is_open {
        return Color::srgb(0.6, 0.15, 0.15);
    }
    match door.kind {
        DoorKind::Normal => Color::srgb(0.35, 0.8, 0.45),
        DoorKind::Boss => Color::srgb(0.85, 0.25, 0.6),
        DoorKind::Treasure => Color::srgb(0.95, 0.8, 0.25),
    }
}
