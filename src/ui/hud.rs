//! Everything the view needs besides sprite positions
//!
//! Goal markers are sticky: once a slot is shown it stays shown until the
//! difficulty step clears the board of markers.

use crate::consts::GOAL_WINDOWS;
use crate::sim::{Body, GameState, goal_window};

/// What to do with one goal marker after a state update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerChange {
    Show,
    Hide,
    Keep,
}

pub fn score_text(state: &GameState) -> String {
    format!("Score: {}", state.score)
}

pub fn highscore_text(state: &GameState) -> String {
    format!("HighScore: {}", state.highscore)
}

/// The game-over banner
pub fn banner_visible(state: &GameState) -> bool {
    state.game_ends
}

/// Marker updates for the five goal slots.
///
/// Only the state produced by a goal changes anything. The reached slot is
/// shown while the win count is at most 4; with a count of 5 every other
/// slot is hidden.
pub fn goal_marker_changes(state: &GameState) -> [MarkerChange; GOAL_WINDOWS.len()] {
    let mut changes = [MarkerChange::Keep; GOAL_WINDOWS.len()];
    if !state.win {
        return changes;
    }

    let reached = goal_window(state.frog.pos.x, state.frog.pos.y).filter(|_| state.win_count <= 4);
    for (i, change) in changes.iter_mut().enumerate() {
        *change = if reached == Some(i) {
            MarkerChange::Show
        } else if state.win_count == 5 {
            MarkerChange::Hide
        } else {
            MarkerChange::Keep
        };
    }
    changes
}

/// Bodies to draw, back to front: vehicles, floats, then the frog
pub fn sprites(state: &GameState) -> impl Iterator<Item = &Body> {
    state
        .cars
        .iter()
        .chain(&state.floats)
        .chain(std::iter::once(&state.frog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Event, init, step};
    use glam::Vec2;

    const UP: Event = Event::Move {
        dx: 0.0,
        ground_dy: -8.0,
        water_dy: -32.0,
    };

    fn frog_at(x: f32, y: f32) -> GameState {
        let state = init();
        GameState {
            frog: state.frog.clone().at(Vec2::new(x, y)),
            ..state
        }
    }

    #[test]
    fn test_texts() {
        let state = GameState {
            score: 30,
            highscore: 250,
            ..init()
        };
        assert_eq!(score_text(&state), "Score: 30");
        assert_eq!(highscore_text(&state), "HighScore: 250");
        assert!(!banner_visible(&state));
    }

    #[test]
    fn test_no_changes_without_win() {
        let state = step(init(), UP);
        assert_eq!(goal_marker_changes(&state), [MarkerChange::Keep; 5]);
    }

    #[test]
    fn test_reached_slot_is_shown() {
        let state = step(frog_at(230.0, 55.0), UP);
        assert!(state.win);
        let changes = goal_marker_changes(&state);
        assert_eq!(changes[2], MarkerChange::Show);
        assert_eq!(changes.iter().filter(|c| **c == MarkerChange::Keep).count(), 4);
    }

    #[test]
    fn test_fifth_win_hides_markers() {
        let state = GameState {
            win: true,
            win_count: 5,
            ..frog_at(30.0, 40.0)
        };
        assert_eq!(goal_marker_changes(&state), [MarkerChange::Hide; 5]);
    }

    #[test]
    fn test_sprites_draw_frog_last() {
        let state = init();
        let ids: Vec<_> = sprites(&state).map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), state.cars.len() + state.floats.len() + 1);
        assert_eq!(ids.first(), Some(&"slowCar0"));
        assert_eq!(ids.last(), Some(&"frog"));
    }
}
