//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One event in, one new state out
//! - Fixed lane tables, no randomness
//! - Stable iteration order (lane-table order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{Footing, footing, goal_window, is_win};
pub use entity::{Body, Footprint, ViewType, make_entity, make_frog};
pub use state::{Event, GamePhase, GameState};
pub use tick::{init, init_with, step, step_with};
pub use vector::{translate_wrapped, wrap_horizontal};
