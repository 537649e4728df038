//! Entity factories
//!
//! Only the random draws vary between spawns; positions, headings and speeds
//! are otherwise fixed formulas.

use glam::Vec2;
use rand::Rng;

use super::geometry::direction_to;
use super::state::{City, EnemyMissile, Explosion, PlayerMissile};
use crate::consts::*;

/// Spawn an enemy missile on the top edge, aimed at a random city
///
/// With no cities left to aim at, the missile falls straight down.
pub fn spawn_enemy_missile<R: Rng + ?Sized>(
    cities: &[City],
    playfield_width: f32,
    rng: &mut R,
) -> EnemyMissile {
    let start = Vec2::new(rng.random_range(0.0..=playfield_width), 0.0);

    let direction = if cities.is_empty() {
        Vec2::Y
    } else {
        let city = cities[rng.random_range(0..cities.len())];
        direction_to(start, city.position)
    };

    let speed = rng.random_range(ENEMY_SPEED_MIN..=ENEMY_SPEED_MAX);

    EnemyMissile {
        initial_position: start,
        position: start,
        direction,
        speed,
    }
}

/// Launch an interceptor from `origin` toward the clicked point
pub fn spawn_player_missile(click: Vec2, origin: Vec2) -> PlayerMissile {
    PlayerMissile {
        origin,
        position: origin,
        direction: direction_to(origin, click),
        speed: PLAYER_MISSILE_SPEED,
        target: click,
    }
}

/// New blast at `position`
pub fn spawn_explosion(position: Vec2) -> Explosion {
    Explosion {
        position,
        radius: EXPLOSION_START_RADIUS,
    }
}
