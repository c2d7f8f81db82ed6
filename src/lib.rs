//! Frog Crossing - a road and river crossing arcade game
//!
//! Core modules:
//! - `sim`: Pure state-transition engine (entities, collisions, scoring)
//! - `ui`: HUD values derived from a state snapshot
//! - `platform`: Keyboard mapping and session lifecycle for the adapter
//! - `renderer`: SVG sprite updates (browser only)
//! - `tuning`: Data-driven lane table and game balance
//! - `settings`: Adapter preferences (tick cadence, key bindings)

pub mod error;
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::ConfigError;
pub use settings::{KeyBindings, Settings};
pub use sim::{Event, GameState, init, init_with, step, step_with};
pub use tuning::Tuning;

/// Board layout constants
///
/// These match the background art, so they are not part of [`Tuning`].
pub mod consts {
    /// Board dimensions
    pub const CANVAS_WIDTH: f32 = 532.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Frog spawn point and sprite
    pub const FROG_START_X: f32 = 251.0;
    pub const FROG_START_Y: f32 = 438.0;
    pub const FROG_WIDTH: f32 = 30.0;
    pub const FROG_HEIGHT: f32 = 30.0;
    pub const FROG_IMG: &str = "../assets/froggerUp.png";

    /// Road band (inclusive)
    pub const GROUND_START_Y: f32 = 286.0;
    pub const GROUND_END_Y: f32 = 454.0;

    /// River band (inclusive)
    pub const WATER_START_Y: f32 = 70.0;
    pub const WATER_END_Y: f32 = 240.0;

    /// Riverbank strip inside the river band where the frog can stand
    pub const SAFE_ZONE_START_Y: f32 = 228.0;
    pub const SAFE_ZONE_END_Y: f32 = 268.0;

    /// Frog must be at or above this row to land in a goal
    pub const GOAL_ROW_Y: f32 = 60.0;

    /// The five goal slots across the top bank, as inclusive x ranges
    pub const GOAL_WINDOWS: [(f32, f32); 5] = [
        (10.0, 58.0),
        (120.0, 152.0),
        (225.0, 263.0),
        (335.0, 368.0),
        (440.0, 478.0),
    ];

    /// Vehicle sprites carry transparent padding, so hazard checks only
    /// use this fraction of the body's extent on the vertical axis.
    pub const HAZARD_SLACK: f32 = 0.5;

    /// Tick at which every session's entities are created
    pub const START_TIME: u64 = 0;
}

/// Inclusive range test: `start <= value <= end`
#[inline]
pub fn within(start: f32, end: f32, value: f32) -> bool {
    value >= start && value <= end
}
