//! Collision predicates
//!
//! Plain containment tests evaluated at the start of a tick. There is no
//! swept collision: a fast missile can step over a small blast.

use glam::Vec2;

use super::state::{EnemyMissile, Explosion, PlayerMissile};

/// Whether `point` lies inside the blast (boundary inclusive)
#[inline]
pub fn in_blast(point: Vec2, blast: &Explosion) -> bool {
    point.distance_squared(blast.position) <= blast.radius * blast.radius
}

/// Whether `point` lies inside any of the blasts
pub fn in_any_blast(point: Vec2, blasts: &[Explosion]) -> bool {
    blasts.iter().any(|blast| in_blast(point, blast))
}

/// Whether an enemy missile has dropped below the playfield floor
#[inline]
pub fn escaped_playfield(missile: &EnemyMissile, playfield_height: f32) -> bool {
    missile.position.y > playfield_height
}

/// Whether an interceptor has climbed to (or past) its target's altitude
#[inline]
pub fn interceptor_arrived(missile: &PlayerMissile) -> bool {
    missile.position.y <= missile.target.y
}
