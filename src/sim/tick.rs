//! Simulation state transitions
//!
//! `transition` is the only way a `GameState` changes. It borrows the current
//! snapshot and returns the next one, so a snapshot handed to the renderer
//! stays valid while the next frame is computed.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{escaped_playfield, in_any_blast, interceptor_arrived};
use super::spawn::{spawn_enemy_missile, spawn_explosion, spawn_player_missile};
use super::state::{Explosion, GameState};
use crate::consts::*;
use crate::launch_origin;

/// Events that drive the simulation
///
/// Tagged so events coming from the page (or a replay file) can be decoded
/// directly; any unrecognized `type` decodes to `Unknown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SimEvent {
    /// Advance time by `dt` seconds
    Advance { dt: f32 },
    /// Spawn one enemy missile and restart the spawn countdown
    SpawnEnemy,
    /// Launch an interceptor toward `target` (logical coordinates)
    SpawnPlayerMissile { target: Vec2 },
    /// Anything else; applying it leaves the state unchanged
    #[serde(other)]
    Unknown,
}

/// Apply one event to `state`, producing the next snapshot
pub fn transition<R: Rng + ?Sized>(
    state: &GameState,
    event: &SimEvent,
    rng: &mut R,
) -> GameState {
    match event {
        SimEvent::Advance { dt } => advance(state, *dt),

        SimEvent::SpawnEnemy => {
            let missile = spawn_enemy_missile(&state.cities, WIDTH, rng);
            log::debug!(
                "Enemy missile spawned at x={:.1}, speed={:.2}",
                missile.position.x,
                missile.speed
            );

            let mut next = state.clone();
            next.enemy_missiles.push(missile);
            next.time_to_next_spawn = SPAWN_INTERVAL;
            next
        }

        SimEvent::SpawnPlayerMissile { target } => {
            let missile = spawn_player_missile(*target, launch_origin());
            log::debug!("Interceptor launched toward ({:.1}, {:.1})", target.x, target.y);

            let mut next = state.clone();
            next.player_missiles.push(missile);
            next
        }

        SimEvent::Unknown => state.clone(),
    }
}

/// Advance the simulation by `dt` seconds
///
/// Order within a tick is fixed:
/// 1. interceptors that reached their target altitude detonate, the rest move
/// 2. enemy missiles below the floor escape; those inside a blast that existed
///    before this tick detonate; the rest move
/// 3. existing blasts grow and the oversized ones are retired
/// 4. blasts created in steps 1-2 are appended at their starting radius
/// 5. the spawn countdown runs down by `dt`
pub fn advance(state: &GameState, dt: f32) -> GameState {
    // Negative or NaN intervals never rewind the simulation
    let dt = dt.max(0.0);

    let mut new_explosions: Vec<Explosion> = Vec::new();

    let player_missiles = state
        .player_missiles
        .iter()
        .filter_map(|missile| {
            if interceptor_arrived(missile) {
                new_explosions.push(spawn_explosion(missile.target));
                None
            } else {
                Some(missile.advanced(dt))
            }
        })
        .collect();

    let mut escaped = 0usize;
    let enemy_missiles = state
        .enemy_missiles
        .iter()
        .filter_map(|missile| {
            if escaped_playfield(missile, HEIGHT) {
                escaped += 1;
                None
            } else if in_any_blast(missile.position, &state.explosions) {
                new_explosions.push(spawn_explosion(missile.position));
                None
            } else {
                Some(missile.advanced(dt))
            }
        })
        .collect();

    let mut explosions: Vec<Explosion> = state
        .explosions
        .iter()
        .map(|blast| blast.aged(dt))
        .filter(|blast| !blast.expired())
        .collect();

    if !new_explosions.is_empty() {
        log::debug!("{} new explosion(s)", new_explosions.len());
    }
    if escaped > 0 {
        log::debug!("{} enemy missile(s) escaped past the floor", escaped);
    }

    explosions.extend(new_explosions);

    let next = GameState {
        cities: state.cities.clone(),
        enemy_missiles,
        player_missiles,
        explosions,
        time_to_next_spawn: state.time_to_next_spawn - dt,
    };

    log::trace!(
        "tick dt={:.4}: {} enemy, {} interceptor, {} blast(s), next spawn in {:.2}s",
        dt,
        next.enemy_missiles.len(),
        next.player_missiles.len(),
        next.explosions.len(),
        next.time_to_next_spawn
    );

    next
}
