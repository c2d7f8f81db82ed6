//! HUD and overlay state derived from a game snapshot

pub mod hud;

pub use hud::{MarkerChange, banner_visible, goal_marker_changes, highscore_text, score_text, sprites};
