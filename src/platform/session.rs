//! Session lifecycle
//!
//! The engine only reports `game_ends` and `is_restart`; the session decides
//! which events reach it. After a game over only the restart key gets
//! through, and a restart opens the full feed again.

use crate::sim::{Event, GameState, init_with, step_with};
use crate::tuning::Tuning;

/// Which events are currently forwarded to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// Timer, moves and restart
    Live,
    /// Restart only
    RestartOnly,
}

/// One player's run of games
#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    state: GameState,
    feed: Feed,
    /// Timer pulses sent since the feed last went live
    ticks: u64,
}

impl Session {
    pub fn new(tuning: Tuning) -> Self {
        let state = init_with(&tuning);
        Self {
            tuning,
            state,
            feed: Feed::Live,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn feed(&self) -> Feed {
        self.feed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Next timer pulse. The count starts again from zero after a restart.
    pub fn next_tick(&mut self) -> Event {
        let event = Event::tick(self.ticks);
        self.ticks += 1;
        event
    }

    /// Forward an event if the feed allows it and return the current state
    pub fn dispatch(&mut self, event: Event) -> &GameState {
        if self.feed == Feed::RestartOnly && event != Event::Restart {
            return &self.state;
        }

        self.state = step_with(&self.tuning, self.state.clone(), event);

        if self.state.game_ends && self.feed == Feed::Live {
            log::info!(
                "Game over: score {}, highscore {}",
                self.state.score,
                self.state.highscore
            );
            self.feed = Feed::RestartOnly;
        } else if self.state.is_restart {
            log::info!("Restarted (highscore {})", self.state.highscore);
            self.feed = Feed::Live;
            self.ticks = 0;
        }

        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn drowning_session() -> Session {
        let mut session = Session::new(Tuning::default());
        session.state = GameState {
            floats: Vec::new(),
            frog: session.state.frog.clone().at(Vec2::new(100.0, 150.0)),
            ..session.state.clone()
        };
        session
    }

    #[test]
    fn test_ticks_count_up() {
        let mut session = Session::new(Tuning::default());
        assert_eq!(session.next_tick(), Event::tick(0));
        assert_eq!(session.next_tick(), Event::tick(1));

        let tick = session.next_tick();
        assert_eq!(session.dispatch(tick).game_time, 2);
        assert_eq!(session.feed(), Feed::Live);
    }

    #[test]
    fn test_game_over_suspends_feed() {
        let mut session = drowning_session();
        let tick = session.next_tick();
        assert!(session.dispatch(tick).game_ends);
        assert_eq!(session.feed(), Feed::RestartOnly);

        let frozen = session.state().clone();
        session.dispatch(Event::tick(5));
        session.dispatch(Event::Move {
            dx: 8.0,
            ground_dy: 0.0,
            water_dy: 0.0,
        });
        assert_eq!(session.state(), &frozen);
    }

    #[test]
    fn test_restart_resumes_feed() {
        let mut session = drowning_session();
        session.next_tick();
        session.next_tick();
        let tick = session.next_tick();
        session.dispatch(tick);
        assert_eq!(session.feed(), Feed::RestartOnly);

        let state = session.dispatch(Event::Restart);
        assert!(state.is_restart);
        assert!(!state.game_ends);
        assert_eq!(session.feed(), Feed::Live);
        assert_eq!(session.next_tick(), Event::tick(0));
    }
}
