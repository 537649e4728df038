//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (pointer coordinates into the logical playfield)
//!
//! Frame timing lives in `crate::clock`; the browser only supplies timestamps.

pub mod input;

pub use input::{DisplayRect, to_logical};
