//! UI domain: minimap panel built from visited room coordinates.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::rooms::{RoomClearedEvent, RoomEnteredEvent, RoomId, RoomManager};

const CELL_SIZE: f32 = 14.0;
const CELL_GAP: f32 = 4.0;
const PANEL_PADDING: f32 = 16.0;

/// Marker for the minimap container
#[derive(Component)]
pub struct MiniMapPanel;

/// Marker for one room cell on the minimap
#[derive(Component)]
pub struct MiniMapCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellStyle {
    Current,
    Cleared,
    Visited,
}

impl CellStyle {
    fn color(self) -> Color {
        match self {
            CellStyle::Current => Color::srgb(0.95, 0.85, 0.35),
            CellStyle::Cleared => Color::srgb(0.45, 0.7, 0.5),
            CellStyle::Visited => Color::srgb(0.7, 0.4, 0.35),
        }
    }
}

/// A cell to draw, in pixels from the panel's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CellView {
    pub room_id: RoomId,
    pub offset: Vec2,
    pub style: CellStyle,
}

/// Cells for every visited room, laid out on the generation grid.
/// Grid y grows downwards, same as UI space. Rooms sharing a cell are drawn
/// in id order, so the later room ends up on top.
pub(crate) fn minimap_cells(rooms: &RoomManager) -> Vec<CellView> {
    let minimap = rooms.minimap();
    let Some(extent) = minimap.extent() else {
        return Vec::new();
    };

    let mut cells: Vec<CellView> = minimap
        .visited()
        .iter()
        .filter_map(|room_id| {
            let coord = minimap.coord_of(*room_id)?;
            let style = if *room_id == rooms.current_room_id() {
                CellStyle::Current
            } else if rooms.room(*room_id).is_some_and(|r| r.is_cleared()) {
                CellStyle::Cleared
            } else {
                CellStyle::Visited
            };
            Some(CellView {
                room_id: *room_id,
                offset: (coord - extent.min).as_vec2() * (CELL_SIZE + CELL_GAP),
                style,
            })
        })
        .collect();
    cells.sort_by_key(|c| c.room_id);
    cells
}

pub(crate) fn spawn_minimap_panel(mut commands: Commands) {
    commands.spawn((
        MiniMapPanel,
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(PANEL_PADDING),
            top: Val::Px(PANEL_PADDING),
            ..default()
        },
    ));
}

/// Rebuild the cells when the dungeon appears, a room is entered or a room is cleared.
pub(crate) fn rebuild_minimap(
    mut commands: Commands,
    rooms: Res<RoomManager>,
    mut entered_events: MessageReader<RoomEnteredEvent>,
    mut cleared_events: MessageReader<RoomClearedEvent>,
    mut built: Local<bool>,
    panel_query: Query<Entity, With<MiniMapPanel>>,
    cell_query: Query<Entity, With<MiniMapCell>>,
) {
    let changed = entered_events.read().count() + cleared_events.read().count() > 0;
    if *built && !changed {
        return;
    }
    *built = true;

    let Ok(panel) = panel_query.single() else {
        return;
    };

    for entity in &cell_query {
        commands.entity(entity).despawn();
    }

    let cells = minimap_cells(&rooms);
    let size = cells
        .iter()
        .fold(Vec2::ZERO, |acc, c| acc.max(c.offset + CELL_SIZE));

    commands
        .entity(panel)
        .insert(Node {
            position_type: PositionType::Absolute,
            right: Val::Px(PANEL_PADDING),
            top: Val::Px(PANEL_PADDING),
            width: Val::Px(size.x),
            height: Val::Px(size.y),
            ..default()
        })
        .with_children(|parent| {
            for cell in &cells {
                parent.spawn((
                    MiniMapCell,
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(cell.offset.x),
                        top: Val::Px(cell.offset.y),
                        width: Val::Px(CELL_SIZE),
                        height: Val::Px(CELL_SIZE),
                        ..default()
                    },
                    BackgroundColor(cell.style.color()),
                ));
            }
        });
}
