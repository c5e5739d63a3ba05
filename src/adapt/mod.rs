pub mod classify;
pub mod content;
pub mod engine;
pub mod interaction;
pub mod probe;
pub mod score;
pub mod tiers;
pub mod types;

pub use engine::{AdaptEngine, DeviceSnapshot};
pub use types::*;
