//! Keyboard to event mapping

use crate::settings::{KeyBindings, Settings};
use crate::sim::Event;
use crate::tuning::Tuning;

/// Turns `keydown` codes into engine events
#[derive(Debug, Clone)]
pub struct InputMapper {
    keys: KeyBindings,
    ground: f32,
    water: f32,
}

impl InputMapper {
    pub fn new(settings: &Settings, tuning: &Tuning) -> Self {
        Self {
            keys: settings.keys.clone(),
            ground: tuning.steps.ground,
            water: tuning.steps.water,
        }
    }

    /// Map a key press. Auto-repeat presses are dropped so holding a key
    /// hops once.
    pub fn map_key(&self, code: &str, repeat: bool) -> Option<Event> {
        if repeat {
            return None;
        }
        let hop = |dx: f32, ground_dy: f32, water_dy: f32| Event::Move {
            dx,
            ground_dy,
            water_dy,
        };

        let keys = &self.keys;
        if code == keys.left {
            Some(hop(-self.ground, 0.0, 0.0))
        } else if code == keys.right {
            Some(hop(self.ground, 0.0, 0.0))
        } else if code == keys.up {
            Some(hop(0.0, -self.ground, -self.water))
        } else if code == keys.down {
            Some(hop(0.0, self.ground, self.water))
        } else if code == keys.restart {
            Some(Event::Restart)
        } else {
            None
        }
    }
}
