//! Combat domain: the enemies of one room, seen by rooms as a population.

use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::combat::components::Enemy;
use crate::rooms::EnemyPopulation;

/// Enemies stop closing in once they touch the player.
const CONTACT_DISTANCE: f32 = 16.0;

#[derive(Debug, Clone)]
pub struct EnemyRoster {
    enemies: Vec<Enemy>,
    play_area: Rect,
}

impl EnemyRoster {
    pub fn new(enemies: Vec<Enemy>, play_area: Rect) -> Self {
        Self { enemies, play_area }
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn alive_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }
}

impl EnemyPopulation for EnemyRoster {
    fn is_alive(&self) -> bool {
        self.enemies.iter().any(Enemy::is_alive)
    }

    fn update(&mut self, dt: f32, player_position: Vec2) {
        for enemy in self.enemies.iter_mut().filter(|e| e.is_alive()) {
            let to_player = player_position - enemy.position;
            let distance = to_player.length();
            let stop_at = enemy.kind.radius() + CONTACT_DISTANCE;
            if distance <= stop_at {
                continue;
            }

            let step = (enemy.kind.speed() * dt).min(distance - stop_at);
            let margin = Vec2::splat(enemy.kind.radius());
            enemy.position = (enemy.position + to_player / distance * step)
                .clamp(self.play_area.min + margin, self.play_area.max - margin);
        }
    }

    fn take_hit(&mut self, origin: Vec2, reach: f32, damage: f32) -> usize {
        let mut hits = 0;
        for enemy in self.enemies.iter_mut().filter(|e| e.is_alive()) {
            if enemy.position.distance(origin) <= reach + enemy.kind.radius() {
                enemy.health.take_damage(damage);
                hits += 1;
                if !enemy.is_alive() {
                    debug!("[COMBAT] {:?} defeated", enemy.kind);
                }
            }
        }
        hits
    }

    fn defeat_all(&mut self) {
        for enemy in &mut self.enemies {
            let remaining = enemy.health.current;
            enemy.health.take_damage(remaining);
        }
    }

    fn draw(&self, gizmos: &mut Gizmos) {
        for enemy in self.enemies.iter().filter(|e| e.is_alive()) {
            let color = enemy
                .kind
                .color()
                .with_alpha(0.35 + 0.65 * enemy.health.percent());
            gizmos.circle_2d(
                Isometry2d::from_translation(enemy.position),
                enemy.kind.radius(),
                color,
            );
        }
    }
}
