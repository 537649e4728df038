//! Missile Command - defend the cities from incoming missiles
//!
//! Core modules:
//! - `sim`: Pure simulation (entities, spawning, collisions, state transitions)
//! - `clock`: Frame clock and scheduler that feed events into the simulation
//! - `renderer`: WebGPU rendering of simulation snapshots
//! - `platform`: Browser/native platform abstraction (pointer input)
//! - `settings`: Presentation preferences

pub mod clock;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use clock::{FrameClock, Scheduler};
pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical playfield dimensions (canvas units, y grows downward)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 450.0;

    /// Height of the terrain strip along the bottom edge
    pub const GROUND_HEIGHT: f32 = 10.0;

    /// Seconds between enemy missile spawns
    pub const SPAWN_INTERVAL: f32 = 3.0;

    /// Enemy missile speed range (units/sec, inclusive)
    pub const ENEMY_SPEED_MIN: f32 = 3.0;
    pub const ENEMY_SPEED_MAX: f32 = 10.0;

    /// Interceptor speed (units/sec)
    pub const PLAYER_MISSILE_SPEED: f32 = 30.0;

    /// Blast radius at creation
    pub const EXPLOSION_START_RADIUS: f32 = 1.0;
    /// Blast growth (units/sec)
    pub const EXPLOSION_GROWTH_RATE: f32 = 12.0;
    /// Blasts larger than this are retired
    pub const EXPLOSION_MAX_RADIUS: f32 = 30.0;

    /// Horizontal positions of the defended cities
    pub const CITY_XS: [f32; 4] = [60.0, 160.0, 450.0, 600.0];
    /// City footprint (drawn above the city position)
    pub const CITY_WIDTH: f32 = 40.0;
    pub const CITY_HEIGHT: f32 = 20.0;
}

/// Interceptor launch point: center of the ground line
#[inline]
pub fn launch_origin() -> Vec2 {
    Vec2::new(consts::WIDTH / 2.0, consts::HEIGHT - consts::GROUND_HEIGHT)
}

/// Logical playfield size as a vector
#[inline]
pub fn playfield() -> Vec2 {
    Vec2::new(consts::WIDTH, consts::HEIGHT)
}
