//! Game state and input events
//!
//! A `GameState` is an immutable snapshot: the engine consumes one and
//! produces the next, so any snapshot can be handed to the renderer as is.

use serde::{Deserialize, Serialize};

use super::entity::{Body, make_frog, starting_cars, starting_floats};
use crate::consts::START_TIME;
use crate::tuning::Tuning;

/// Coarse phase of a session, derived from `GameState::game_ends`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks and moves are processed
    Playing,
    /// Frog was run over or drowned; only a restart does anything
    Ended,
}

/// One input to the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    /// Timer pulse carrying the number of ticks since the session started
    Tick { elapsed: u64 },
    /// A hop. The vertical step depends on the lane the frog is in, so
    /// both candidates travel with the event.
    Move {
        dx: f32,
        ground_dy: f32,
        water_dy: f32,
    },
    Restart,
}

impl Event {
    pub fn tick(elapsed: u64) -> Self {
        Event::Tick { elapsed }
    }
}

/// Complete game state for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub frog: Body,
    /// Road vehicles
    pub cars: Vec<Body>,
    /// Logs, turtles and lily pads
    pub floats: Vec<Body>,
    pub score: u64,
    /// Best score this session; never decreases, survives restarts
    pub highscore: u64,
    /// Goals reached since the counter was last cleared
    pub win_count: u32,
    /// Set only in the state produced by the move that reached a goal
    pub win: bool,
    /// Elapsed count of the last processed tick
    pub game_time: u64,
    pub game_ends: bool,
    /// Set only in the state produced by a restart
    pub is_restart: bool,
}

impl GameState {
    /// Fresh session laid out from the given lane table
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            frog: make_frog(),
            cars: starting_cars(tuning),
            floats: starting_floats(tuning),
            score: 0,
            highscore: 0,
            win_count: 0,
            win: false,
            game_time: START_TIME,
            game_ends: false,
            is_restart: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_ends {
            GamePhase::Ended
        } else {
            GamePhase::Playing
        }
    }
}
