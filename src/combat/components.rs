//! Combat domain: health and enemy kinds.

use bevy::prelude::*;

/// Hit points for anything that can be defeated
#[derive(Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Slime,
    Skeleton,
    Brute,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Slime, EnemyKind::Skeleton, EnemyKind::Brute];

    pub fn max_health(self) -> f32 {
        match self {
            EnemyKind::Slime => 20.0,
            EnemyKind::Skeleton => 30.0,
            EnemyKind::Brute => 80.0,
        }
    }

    /// Chase speed in world units per second
    pub fn speed(self) -> f32 {
        match self {
            EnemyKind::Slime => 60.0,
            EnemyKind::Skeleton => 100.0,
            EnemyKind::Brute => 45.0,
        }
    }

    pub fn radius(self) -> f32 {
        match self {
            EnemyKind::Slime => 12.0,
            EnemyKind::Skeleton => 14.0,
            EnemyKind::Brute => 24.0,
        }
    }

    pub fn color(self) -> Color {
        match self {
            EnemyKind::Slime => Color::srgb(0.4, 0.85, 0.4),
            EnemyKind::Skeleton => Color::srgb(0.85, 0.85, 0.75),
            EnemyKind::Brute => Color::srgb(0.85, 0.3, 0.25),
        }
    }
}

/// A single enemy owned by a room's roster
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub position: Vec2,
    pub health: Health,
}

impl Enemy {
    pub fn new(kind: EnemyKind, position: Vec2) -> Self {
        Self {
            kind,
            position,
            health: Health::new(kind.max_health()),
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_dead()
    }
}
