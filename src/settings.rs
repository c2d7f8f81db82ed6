//! Adapter preferences
//!
//! Timer cadence and key bindings. None of this reaches the engine; the
//! platform layer turns it into events.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// `KeyboardEvent.code` values for each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
    pub restart: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: "ArrowLeft".into(),
            right: "ArrowRight".into(),
            up: "ArrowUp".into(),
            down: "ArrowDown".into(),
            restart: "KeyR".into(),
        }
    }
}

impl KeyBindings {
    fn all(&self) -> [&str; 5] {
        [
            self.left.as_str(),
            self.right.as_str(),
            self.up.as_str(),
            self.down.as_str(),
            self.restart.as_str(),
        ]
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between timer ticks
    pub tick_interval_ms: u32,
    pub keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            keys: KeyBindings::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick interval must be non-zero".into()));
        }
        let keys = self.keys.all();
        if keys.iter().any(|k| k.is_empty()) {
            return Err(ConfigError::Invalid("key bindings must not be empty".into()));
        }
        for (i, key) in keys.iter().enumerate() {
            if keys[i + 1..].contains(key) {
                return Err(ConfigError::Invalid(format!("{key} is bound twice")));
            }
        }
        Ok(())
    }
}
