//! Platform abstraction layer
//!
//! Everything between the browser and the engine that can be tested
//! without a browser:
//! - Key codes to events
//! - Session lifecycle (when the event feed is live)

pub mod input;
pub mod session;

pub use input::InputMapper;
pub use session::{Feed, Session};
