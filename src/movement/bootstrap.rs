//! Movement domain: player bootstrap from the dungeon config.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::DungeonConfig;
use crate::movement::{GameLayer, MovementState, MovementTuning, Player, PlayerSize};

/// Spawn the player in the middle of the safe room.
pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<DungeonConfig>,
    existing_player: Query<Entity, With<Player>>,
    mut tuning: ResMut<MovementTuning>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    *tuning = MovementTuning::from_def(&config.player);
    let size = Vec2::new(config.player.width, config.player.height);

    info!(
        "Spawning player: speed={}, reach={}, damage={}",
        tuning.max_speed, tuning.strike_reach, tuning.strike_damage
    );

    commands.spawn((
        (Player, PlayerSize(size), MovementState::default()),
        Sprite::from_color(Color::srgb(0.9, 0.9, 0.9), size),
        Transform::from_xyz(0.0, 0.0, 10.0),
        (
            RigidBody::Kinematic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Default]),
        ),
    ));
}
