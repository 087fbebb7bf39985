//! Rooms domain: events for room clears and transitions.

use bevy::ecs::message::Message;

use crate::content::Direction;
use crate::rooms::RoomId;

#[derive(Debug)]
pub struct RoomClearedEvent {
    pub room_id: RoomId,
}

impl Message for RoomClearedEvent {}

#[derive(Debug)]
pub struct TransitionStartedEvent {
    pub from_room: RoomId,
    pub to_room: RoomId,
    pub direction: Direction,
}

impl Message for TransitionStartedEvent {}

#[derive(Debug)]
pub struct RoomEnteredEvent {
    pub room_id: RoomId,
    /// Wall of the new room the player came through
    pub entry_direction: Direction,
}

impl Message for RoomEnteredEvent {}
