//! Sigmoid pointer-acceleration curve.
//!
//! Maps angular speed (rad/s) to a gain in px/rad. The logistic shape keeps
//! the gain bounded at both ends: near `gain_min` for slow, precise motion and
//! near `gain_max` for fast sweeps, with no runaway at high speed.

use crate::config::MotionConfig;
use glam::Vec2;

/// Gain in px/rad for a given angular speed.
///
/// - `inflection_ratio`: where the inflection point sits within the speed
///   range (the sensitivity parameter's output).
/// - `slope`: steepness at the inflection point (the acceleration parameter's
///   output).
#[inline]
pub fn gain(speed: f32, inflection_ratio: f32, slope: f32, config: &MotionConfig) -> f32 {
    let inflection_speed = inflection_ratio * config.speed_range() + config.speed_min;
    // mm/rad
    let cd_gain = config.gain_min
        + (config.gain_max - config.gain_min)
            / (1.0 + (-slope * (speed - inflection_speed)).exp());
    cd_gain * config.pixel_density
}

/// Magnitude of the 2D motion; gain depends on it, not on direction.
#[inline]
pub fn speed(raw: Vec2) -> f32 {
    raw.length()
}
