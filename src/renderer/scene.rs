//! Scene assembly: one simulation snapshot in, one triangle list out
//!
//! Draw order matches layering on screen: terrain, cities, enemy missiles,
//! interceptors, then blasts on top. The snapshot is only read.

use glam::Vec2;

use super::shapes::{circle, line, rect};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{City, EnemyMissile, Explosion, GameState, PlayerMissile};

/// Width of missile trails (logical units)
pub const TRAIL_WIDTH: f32 = 1.0;
/// Radius of the bright dot at a missile's head
pub const MISSILE_HEAD_RADIUS: f32 = 1.0;
/// Segments for missile heads (too small to benefit from more)
const MISSILE_HEAD_SEGMENTS: u32 = 6;

/// Build all vertices for a frame
pub fn build_scene(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let mut vertices = terrain();

    for city in &state.cities {
        vertices.extend(city_shape(city));
    }
    for missile in &state.enemy_missiles {
        vertices.extend(enemy_missile_shape(missile, settings.trails));
    }
    for missile in &state.player_missiles {
        vertices.extend(player_missile_shape(missile, settings.trails));
    }
    let segments = settings.quality.circle_segments();
    for blast in &state.explosions {
        vertices.extend(explosion_shape(blast, segments));
    }

    vertices
}

/// Ground strip along the bottom edge
pub fn terrain() -> Vec<Vertex> {
    rect(
        Vec2::new(0.0, HEIGHT - GROUND_HEIGHT),
        Vec2::new(WIDTH, GROUND_HEIGHT),
        colors::TERRAIN,
    )
}

/// City block sitting on top of its position
pub fn city_shape(city: &City) -> Vec<Vertex> {
    let top_left = city.position - Vec2::new(CITY_WIDTH / 2.0, CITY_HEIGHT);
    rect(top_left, Vec2::new(CITY_WIDTH, CITY_HEIGHT), colors::CITY)
}

pub fn enemy_missile_shape(missile: &EnemyMissile, trails: bool) -> Vec<Vertex> {
    missile_shape(
        missile.initial_position,
        missile.position,
        colors::ENEMY_TRAIL,
        trails,
    )
}

pub fn player_missile_shape(missile: &PlayerMissile, trails: bool) -> Vec<Vertex> {
    missile_shape(missile.origin, missile.position, colors::PLAYER_TRAIL, trails)
}

pub fn explosion_shape(blast: &Explosion, segments: u32) -> Vec<Vertex> {
    circle(blast.position, blast.radius, colors::EXPLOSION, segments)
}

fn missile_shape(start: Vec2, head: Vec2, trail_color: [f32; 4], trails: bool) -> Vec<Vertex> {
    let mut vertices = if trails {
        line(start, head, TRAIL_WIDTH, trail_color)
    } else {
        Vec::new()
    };
    vertices.extend(circle(
        head,
        MISSILE_HEAD_RADIUS,
        colors::MISSILE_HEAD,
        MISSILE_HEAD_SEGMENTS,
    ));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::QualityPreset;
    use crate::sim::{spawn_explosion, spawn_player_missile};

    const HEAD_VERTS: usize = (MISSILE_HEAD_SEGMENTS * 3) as usize;

    fn enemy() -> EnemyMissile {
        EnemyMissile {
            initial_position: Vec2::new(100.0, 0.0),
            position: Vec2::new(110.0, 50.0),
            direction: Vec2::new(0.2, 1.0).normalize(),
            speed: 5.0,
        }
    }

    #[test]
    fn test_empty_battlefield() {
        let state = GameState::new();
        let verts = build_scene(&state, &Settings::default());
        // Terrain plus four cities
        assert_eq!(verts.len(), 6 + 4 * 6);
        assert!(verts[..6].iter().all(|v| v.color == colors::TERRAIN));
        assert!(verts[6..].iter().all(|v| v.color == colors::CITY));
    }

    #[test]
    fn test_city_sits_on_ground() {
        let verts = city_shape(&City {
            position: Vec2::new(60.0, 440.0),
        });
        let max_y = verts.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        let min_x = verts.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        assert_eq!(max_y, 440.0);
        assert_eq!(min_x, 40.0);
    }

    #[test]
    fn test_missiles_and_blasts() {
        let mut state = GameState::new();
        state.enemy_missiles.push(enemy());
        let mut interceptor =
            spawn_player_missile(Vec2::new(400.0, 100.0), Vec2::new(400.0, 440.0));
        interceptor.position = Vec2::new(400.0, 300.0);
        state.player_missiles.push(interceptor);
        state.explosions.push(spawn_explosion(Vec2::new(200.0, 200.0)));

        let settings = Settings {
            quality: QualityPreset::Low,
            ..Settings::default()
        };
        let verts = build_scene(&state, &settings);
        let expected = 30 + 2 * (6 + HEAD_VERTS) + 12 * 3;
        assert_eq!(verts.len(), expected);

        // Blasts are drawn last
        assert!(verts[verts.len() - 36..].iter().all(|v| v.color == colors::EXPLOSION));
    }

    #[test]
    fn test_trails_can_be_disabled() {
        let settings = Settings {
            trails: false,
            ..Settings::default()
        };
        let verts = enemy_missile_shape(&enemy(), settings.trails);
        assert_eq!(verts.len(), HEAD_VERTS);
        assert!(verts.iter().all(|v| v.color == colors::MISSILE_HEAD));
    }

    #[test]
    fn test_fresh_missile_has_no_trail() {
        let mut missile = enemy();
        missile.position = missile.initial_position;
        assert_eq!(enemy_missile_shape(&missile, true).len(), HEAD_VERTS);
    }

    #[test]
    fn test_scene_leaves_snapshot_untouched() {
        let mut state = GameState::new();
        state.enemy_missiles.push(enemy());
        let before = state.clone();
        let _ = build_scene(&state, &Settings::default());
        assert_eq!(state, before);
    }
}
