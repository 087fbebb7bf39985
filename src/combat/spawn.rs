//! Combat domain: rolling enemy rosters for freshly generated rooms.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::components::{Enemy, EnemyKind};
use crate::combat::roster::EnemyRoster;
use crate::content::{RoomKind, SpawnChancesDef};
use crate::rooms::{EnemyPopulation, PopulationSpawner, RoomId};

/// Enemies never spawn closer than this to a wall.
const WALL_MARGIN: f32 = 48.0;

pub struct RosterSpawner {
    chances: SpawnChancesDef,
    play_area: Rect,
    rng: ChaCha8Rng,
}

impl RosterSpawner {
    pub fn new(chances: SpawnChancesDef, play_area: Rect, seed: u64) -> Self {
        Self {
            chances,
            play_area,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn chance_for(&self, kind: EnemyKind) -> f64 {
        match kind {
            EnemyKind::Slime => self.chances.slime_chance,
            EnemyKind::Skeleton => self.chances.skeleton_chance,
            EnemyKind::Brute => self.chances.brute_chance,
        }
    }

    fn random_position(&mut self) -> Vec2 {
        let inner = self.play_area.inflate(-WALL_MARGIN);
        if inner.is_empty() {
            return self.play_area.center();
        }
        Vec2::new(
            self.rng.random_range(inner.min.x..inner.max.x),
            self.rng.random_range(inner.min.y..inner.max.y),
        )
    }

    /// Roll how many of `kind` to place: one coin flip per slot.
    fn roll_count(&mut self, kind: EnemyKind, slots: u32, scale: f64) -> usize {
        let chance = (self.chance_for(kind) * scale).clamp(0.0, 1.0);
        (0..slots).filter(|_| self.rng.random_bool(chance)).count()
    }

    /// Roll the enemy kinds for a room of the given kind.
    pub fn roll_kinds(&mut self, room_kind: RoomKind) -> Vec<EnemyKind> {
        let (slots, scale) = match room_kind {
            RoomKind::SafeZone => return Vec::new(),
            RoomKind::Combat | RoomKind::Boss => (self.chances.max_per_kind, 1.0),
            RoomKind::Treasure => (self.chances.max_per_kind.min(1), 0.5),
        };

        let mut kinds = Vec::new();
        if room_kind == RoomKind::Boss {
            kinds.push(EnemyKind::Brute);
        }
        for kind in EnemyKind::ALL {
            let count = self.roll_count(kind, slots, scale);
            kinds.extend(std::iter::repeat_n(kind, count));
        }
        if kinds.is_empty() {
            kinds.push(EnemyKind::Slime);
        }
        kinds
    }
}

impl PopulationSpawner for RosterSpawner {
    fn spawn_population(
        &mut self,
        room_id: RoomId,
        kind: RoomKind,
    ) -> Option<Box<dyn EnemyPopulation>> {
        let kinds = self.roll_kinds(kind);
        if kinds.is_empty() {
            return None;
        }

        let enemies: Vec<Enemy> = kinds
            .into_iter()
            .map(|k| Enemy::new(k, self.random_position()))
            .collect();
        debug!(
            "[COMBAT] Room {} ({:?}) spawned {} enemies",
            room_id,
            kind,
            enemies.len()
        );
        Some(Box::new(EnemyRoster::new(enemies, self.play_area)))
    }
}
