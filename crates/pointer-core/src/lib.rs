//! Wearable gyroscope to cursor transform.
//!
//! Turns an armband's orientation and angular-velocity stream into integral
//! per-frame screen deltas through a sigmoid pointer-acceleration curve, with
//! sub-pixel motion carried between frames.

pub mod accumulator;
pub mod config;
pub mod constants;
pub mod error;
pub mod gain;
pub mod math;
pub mod mover;
pub mod param;
pub mod session;

pub use accumulator::*;
pub use config::*;
pub use constants::*;
pub use error::ConfigError;
pub use mover::*;
pub use param::*;
pub use session::*;
