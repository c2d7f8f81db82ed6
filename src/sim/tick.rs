//! State transitions
//!
//! `step` folds one event into a state and returns the next state. It never
//! fails and never touches rendering or input APIs.

use std::sync::LazyLock;

use glam::Vec2;

use super::collision::{Footing, footing, is_win};
use super::entity::Body;
use super::state::{Event, GameState};
use super::vector::translate_wrapped;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::within;

static DEFAULT_TUNING: LazyLock<Tuning> = LazyLock::new(Tuning::default);

/// Starting state with the default lane table
pub fn init() -> GameState {
    init_with(&DEFAULT_TUNING)
}

pub fn init_with(tuning: &Tuning) -> GameState {
    GameState::new(tuning)
}

/// Apply one event using the default tuning
pub fn step(state: GameState, event: Event) -> GameState {
    step_with(&DEFAULT_TUNING, state, event)
}

/// Apply one event.
///
/// `Restart` is accepted in any state. Once the session has ended, ticks
/// and moves leave the state untouched.
pub fn step_with(tuning: &Tuning, state: GameState, event: Event) -> GameState {
    match event {
        Event::Restart => restart(tuning, state),
        _ if state.game_ends => state,
        Event::Tick { elapsed } => tick(tuning, state, elapsed),
        Event::Move {
            dx,
            ground_dy,
            water_dy,
        } => hop(tuning, state, dx, ground_dy, water_dy),
    }
}

fn hop(tuning: &Tuning, state: GameState, dx: f32, ground_dy: f32, water_dy: f32) -> GameState {
    let in_water = within(WATER_START_Y, WATER_END_Y, state.frog.pos.y);
    let dy = if in_water { water_dy } else { ground_dy };
    let pos = translate_wrapped(state.frog.pos, Vec2::new(dx, dy));

    let win = is_win(pos.x, pos.y);
    let score = if win {
        state.score + tuning.scoring.goal
    } else if dy < 0.0 {
        state.score + tuning.scoring.per_move
    } else {
        state.score
    };
    let win_count = if win {
        log::debug!("Goal reached at ({}, {})", pos.x, pos.y);
        state.win_count + 1
    } else {
        state.win_count
    };

    GameState {
        frog: state.frog.at(pos),
        score,
        win,
        win_count,
        is_restart: false,
        ..state
    }
}

fn tick(tuning: &Tuning, state: GameState, elapsed: u64) -> GameState {
    let frog = if state.win {
        state.frog.at(Vec2::new(FROG_START_X, FROG_START_Y))
    } else {
        state.frog.advanced()
    };

    let speed_up = state.win_count == tuning.difficulty.threshold;
    if speed_up {
        log::debug!("Difficulty step at tick {}", elapsed);
    }
    let lane_step = |bodies: Vec<Body>| -> Vec<Body> {
        bodies
            .into_iter()
            .map(|b| {
                if speed_up {
                    b.sped_up(tuning.difficulty.speed_step)
                } else {
                    b
                }
            })
            .map(Body::advanced)
            .collect()
    };
    let cars = lane_step(state.cars);
    let floats = lane_step(state.floats);

    // A single goal also clears the counter on the following tick, so the
    // threshold is only reachable if win counts are injected directly.
    let win_count = match state.win_count {
        n if speed_up || n == 1 => 0,
        n => n,
    };

    let moved = GameState {
        frog,
        cars,
        floats,
        win: false,
        win_count,
        game_time: elapsed,
        is_restart: false,
        ..state
    };
    settle(moved)
}

/// Reclassify the frog after everything has moved
fn settle(state: GameState) -> GameState {
    let footing = footing(&state.frog, &state.cars, &state.floats);
    let carry = match footing {
        Footing::Carried { speed } => speed,
        _ => 0.0,
    };
    if footing.is_fatal() {
        log::debug!("Game over ({:?}) with score {}", footing, state.score);
    }

    GameState {
        frog: state.frog.with_speed(carry),
        highscore: state.highscore.max(state.score),
        game_ends: footing.is_fatal(),
        ..state
    }
}

fn restart(tuning: &Tuning, state: GameState) -> GameState {
    GameState {
        highscore: state.highscore.max(state.score),
        is_restart: true,
        ..init_with(tuning)
    }
}
