//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Every transition derives a fresh `GameState` from a borrowed one
//! - Randomness only through an injected `rand::Rng`
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{escaped_playfield, in_blast, interceptor_arrived};
pub use geometry::{direction_to, magnitude, normalize, vector_to};
pub use spawn::{spawn_enemy_missile, spawn_explosion, spawn_player_missile};
pub use state::{City, EnemyMissile, Explosion, GameState, PlayerMissile};
pub use tick::{SimEvent, advance, transition};
