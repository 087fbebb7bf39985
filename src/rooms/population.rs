//! Rooms domain: seam to the combat collaborator that owns enemy populations.

use bevy::prelude::*;

use crate::content::RoomKind;
use crate::rooms::RoomId;

/// The enemies hosted by one room. Rooms only care whether any member is
/// still alive; everything else is the combat domain's business.
pub trait EnemyPopulation: Send + Sync {
    fn is_alive(&self) -> bool;

    fn update(&mut self, dt: f32, player_position: Vec2);

    /// Apply a player strike. Returns how many members were hit.
    fn take_hit(&mut self, origin: Vec2, reach: f32, damage: f32) -> usize;

    /// Kill every member outright.
    fn defeat_all(&mut self);

    fn draw(&self, gizmos: &mut Gizmos);
}

/// Builds populations during dungeon generation.
pub trait PopulationSpawner {
    /// May return None when the room ends up with nobody in it.
    fn spawn_population(
        &mut self,
        room_id: RoomId,
        kind: RoomKind,
    ) -> Option<Box<dyn EnemyPopulation>>;
}
