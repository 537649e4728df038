//! Game state and core simulation types
//!
//! Every entity is a plain value; a transition clones what survives into a
//! fresh `GameState` and never touches the snapshot it was given.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A defended city. Enemy missiles aim at it; nothing collides with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub position: Vec2,
}

/// An incoming enemy missile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyMissile {
    /// Spawn point (start of the trail)
    pub initial_position: Vec2,
    pub position: Vec2,
    /// Unit heading toward the targeted city, fixed at spawn
    pub direction: Vec2,
    /// Units per second
    pub speed: f32,
}

impl EnemyMissile {
    /// Same missile moved along its heading for `dt` seconds
    pub fn advanced(&self, dt: f32) -> Self {
        Self {
            position: self.position + self.direction * self.speed * dt,
            ..*self
        }
    }
}

/// A player interceptor flying toward the clicked point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerMissile {
    /// Launch point (start of the trail)
    pub origin: Vec2,
    pub position: Vec2,
    pub direction: Vec2,
    pub speed: f32,
    /// Where the interceptor detonates
    pub target: Vec2,
}

impl PlayerMissile {
    /// Same interceptor moved along its heading for `dt` seconds
    pub fn advanced(&self, dt: f32) -> Self {
        Self {
            position: self.position + self.direction * self.speed * dt,
            ..*self
        }
    }
}

/// An expanding blast. Enemy missiles inside it are destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub position: Vec2,
    pub radius: f32,
}

impl Explosion {
    /// Same blast grown for `dt` seconds
    pub fn aged(&self, dt: f32) -> Self {
        Self {
            radius: self.radius + EXPLOSION_GROWTH_RATE * dt,
            ..*self
        }
    }

    /// Whether the blast has outgrown its lifetime
    pub fn expired(&self) -> bool {
        self.radius > EXPLOSION_MAX_RADIUS
    }
}

/// Complete simulation snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Defended cities (fixed for the session)
    pub cities: Vec<City>,
    /// Enemy missiles in spawn order
    pub enemy_missiles: Vec<EnemyMissile>,
    /// Interceptors in launch order
    pub player_missiles: Vec<PlayerMissile>,
    /// Active blasts, oldest first
    pub explosions: Vec<Explosion>,
    /// Seconds until the scheduler spawns the next enemy missile
    pub time_to_next_spawn: f32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh session: four cities on the ground line, nothing in flight
    pub fn new() -> Self {
        let cities = CITY_XS
            .iter()
            .map(|&x| City {
                position: Vec2::new(x, HEIGHT - GROUND_HEIGHT),
            })
            .collect();
        Self::with_cities(cities)
    }

    /// Fresh session defending the given cities
    pub fn with_cities(cities: Vec<City>) -> Self {
        Self {
            cities,
            enemy_missiles: Vec::new(),
            player_missiles: Vec::new(),
            explosions: Vec::new(),
            time_to_next_spawn: SPAWN_INTERVAL,
        }
    }

    /// Whether the scheduler should spawn an enemy missile now
    pub fn spawn_due(&self) -> bool {
        self.time_to_next_spawn <= 0.0
    }

    /// Number of moving entities (missiles of both sides)
    pub fn missiles_in_flight(&self) -> usize {
        self.enemy_missiles.len() + self.player_missiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.cities.len(), 4);
        assert!(state.cities.iter().all(|c| c.position.y == 440.0));
        assert_eq!(state.missiles_in_flight(), 0);
        assert!(state.explosions.is_empty());
        assert_eq!(state.time_to_next_spawn, 3.0);
        assert!(!state.spawn_due());
    }

    #[test]
    fn test_missiles_in_flight_counts_both_sides() {
        let mut state = GameState::new();
        state.enemy_missiles.push(EnemyMissile {
            initial_position: Vec2::new(50.0, 0.0),
            position: Vec2::new(50.0, 0.0),
            direction: Vec2::Y,
            speed: 5.0,
        });
        state.player_missiles.push(PlayerMissile {
            origin: Vec2::new(400.0, 440.0),
            position: Vec2::new(400.0, 440.0),
            direction: Vec2::NEG_Y,
            speed: 30.0,
            target: Vec2::new(400.0, 100.0),
        });
        state.explosions.push(Explosion {
            position: Vec2::new(10.0, 10.0),
            radius: 1.0,
        });
        assert_eq!(state.missiles_in_flight(), 2);
    }

    #[test]
    fn test_explosion_aging() {
        let blast = Explosion {
            position: Vec2::new(10.0, 10.0),
            radius: 1.0,
        };
        let aged = blast.aged(0.5);
        assert!((aged.radius - 7.0).abs() < 1e-6);
        assert_eq!(aged.position, blast.position);
        assert_eq!(blast.radius, 1.0);
        assert!(!aged.expired());
        assert!(aged.aged(2.0).expired());
    }

    #[test]
    fn test_serde_roundtrip_keeps_snapshot() {
        let mut state = GameState::new();
        state.explosions.push(Explosion {
            position: Vec2::new(200.0, 300.0),
            radius: 4.5,
        });
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
