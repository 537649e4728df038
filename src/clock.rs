//! Frame clock and scheduler
//!
//! Turns display-refresh callbacks into simulation events. The scheduler owns
//! the only writable `GameState`; everything else borrows the snapshot it
//! returns.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::sim::{GameState, SimEvent, transition};

/// Derives elapsed seconds from consecutive frame timestamps
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Timestamp (ms) of the previous frame, `None` before the first one
    previous: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp in milliseconds
    ///
    /// The first call only sets the baseline and returns `None`. Later calls
    /// return seconds since the previous call, never negative.
    pub fn tick(&mut self, timestamp_ms: f64) -> Option<f32> {
        let previous = self.previous.replace(timestamp_ms);
        previous.map(|prev| ((timestamp_ms - prev).max(0.0) / 1000.0) as f32)
    }

    /// Forget the baseline; the next tick starts fresh
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

/// Rolling frame-rate estimate over the last 60 frames
#[derive(Debug, Clone)]
struct FpsCounter {
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    fn record(&mut self, time: f64) {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();

        // Oldest slot is the one we write next
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                // Newest and oldest slots are len - 1 intervals apart
                let intervals = (self.frame_times.len() - 1) as f64;
                self.fps = (intervals * 1000.0 / elapsed).round() as u32;
            }
        }
    }
}

/// Owns the simulation and feeds it events in arrival order
#[derive(Debug, Clone)]
pub struct Scheduler {
    state: GameState,
    rng: Pcg32,
    clock: FrameClock,
    seed: u64,
    frames: u64,
    fps: FpsCounter,
}

impl Scheduler {
    /// New session seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_state(GameState::new(), seed)
    }

    /// Resume from an existing snapshot
    fn with_state(state: GameState, seed: u64) -> Self {
        Self {
            state,
            rng: Pcg32::seed_from_u64(seed),
            clock: FrameClock::new(),
            seed,
            frames: 0,
            fps: FpsCounter::default(),
        }
    }

    /// Current snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Frames processed since the session started
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frame rate over the last 60 frames (0 until enough frames were seen)
    pub fn fps(&self) -> u32 {
        self.fps.fps
    }

    /// Apply a single event and replace the current snapshot
    pub fn apply(&mut self, event: &SimEvent) -> &GameState {
        self.state = transition(&self.state, event, &mut self.rng);
        &self.state
    }

    /// Handle one display-refresh callback
    ///
    /// Advances by the time since the previous frame (nothing on the very
    /// first frame), then spawns an enemy missile if the countdown ran out.
    pub fn frame(&mut self, timestamp_ms: f64) -> &GameState {
        self.frames += 1;
        self.fps.record(timestamp_ms);

        if let Some(dt) = self.clock.tick(timestamp_ms) {
            self.apply(&SimEvent::Advance { dt });
        }

        if self.state.spawn_due() {
            self.apply(&SimEvent::SpawnEnemy);
        }

        &self.state
    }

    /// Launch an interceptor toward a point in logical coordinates
    pub fn click(&mut self, target: Vec2) -> &GameState {
        self.apply(&SimEvent::SpawnPlayerMissile { target })
    }

    /// Start a fresh session with a new seed
    pub fn restart(&mut self, seed: u64) {
        log::info!("Restarting session with seed {}", seed);
        *self = Self::new(seed);
    }
}
