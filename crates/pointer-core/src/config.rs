//! Fixed physical constants of the pointer transform, injected at construction.
//!
//! [`MotionConfig::default`] reproduces the tuned constants in
//! [`constants`](crate::constants). Other frame rates or pixel densities can be
//! used to drive the transform at a different cadence, e.g. in tests.

use crate::constants::*;
use crate::error::{ConfigError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// px/mm scale applied to the gain curve.
    pub pixel_density: f32,
    /// Output frames per second; each update covers `1 / frame_rate` seconds.
    pub frame_rate: f32,
    /// Angular speed range (rad/s) the inflection point moves within.
    pub speed_min: f32,
    pub speed_max: f32,
    /// Gain bounds (mm/rad) the sigmoid saturates to at low and high speed.
    pub gain_min: f32,
    pub gain_max: f32,
    /// Inflection point as a ratio of the speed range.
    pub inflection_ratio_min: f32,
    pub inflection_ratio_max: f32,
    /// Slope at the inflection point, before dividing by the speed range.
    pub slope_scale_min: f32,
    pub slope_scale_max: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            pixel_density: PIXEL_DENSITY,
            frame_rate: FRAME_RATE,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            gain_min: GAIN_MIN,
            gain_max: GAIN_MAX,
            inflection_ratio_min: INFLECTION_RATIO_MIN,
            inflection_ratio_max: INFLECTION_RATIO_MAX,
            slope_scale_min: SLOPE_SCALE_MIN,
            slope_scale_max: SLOPE_SCALE_MAX,
        }
    }
}

impl MotionConfig {
    pub fn with_frame_rate(mut self, frame_rate: f32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_pixel_density(mut self, pixel_density: f32) -> Self {
        self.pixel_density = pixel_density;
        self
    }

    /// Seconds covered by one update.
    #[inline]
    pub fn frame_duration(&self) -> f32 {
        1.0 / self.frame_rate
    }

    #[inline]
    pub fn speed_range(&self) -> f32 {
        self.speed_max - self.speed_min
    }

    pub fn slope_min(&self) -> f32 {
        self.slope_scale_min / self.speed_range()
    }

    pub fn slope_max(&self) -> f32 {
        self.slope_scale_max / self.speed_range()
    }

    /// Lower and upper bounds of the gain curve in px/rad.
    pub fn gain_bounds_px(&self) -> (f32, f32) {
        (
            self.gain_min * self.pixel_density,
            self.gain_max * self.pixel_density,
        )
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("pixel_density", self.pixel_density),
            ("frame_rate", self.frame_rate),
            ("speed_min", self.speed_min),
            ("speed_max", self.speed_max),
            ("gain_min", self.gain_min),
            ("gain_max", self.gain_max),
            ("inflection_ratio_min", self.inflection_ratio_min),
            ("inflection_ratio_max", self.inflection_ratio_max),
            ("slope_scale_min", self.slope_scale_min),
            ("slope_scale_max", self.slope_scale_max),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        for (field, value) in [
            ("pixel_density", self.pixel_density),
            ("frame_rate", self.frame_rate),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.speed_min >= self.speed_max {
            return Err(ConfigError::EmptyRange {
                field: "speed",
                min: self.speed_min,
                max: self.speed_max,
            });
        }
        if self.gain_min >= self.gain_max {
            return Err(ConfigError::EmptyRange {
                field: "gain",
                min: self.gain_min,
                max: self.gain_max,
            });
        }
        // Equal endpoints are allowed for the tuning ranges; they pin the knob.
        if self.inflection_ratio_min > self.inflection_ratio_max {
            return Err(ConfigError::EmptyRange {
                field: "inflection_ratio",
                min: self.inflection_ratio_min,
                max: self.inflection_ratio_max,
            });
        }
        if self.slope_scale_min > self.slope_scale_max {
            return Err(ConfigError::EmptyRange {
                field: "slope_scale",
                min: self.slope_scale_min,
                max: self.slope_scale_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(MotionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_derived_values() {
        let c = MotionConfig::default();
        assert!((c.frame_duration() - 1.0 / 60.0).abs() < 1e-7);
        assert!((c.slope_min() - 4.0 / (SPEED_MAX - SPEED_MIN)).abs() < 1e-6);
        assert!((c.slope_max() - 5.0 / (SPEED_MAX - SPEED_MIN)).abs() < 1e-6);
        let (lo, hi) = c.gain_bounds_px();
        assert!(lo < hi);
        assert!((lo - GAIN_MIN * 0.83).abs() < 1e-3);
    }

    #[test]
    fn rejects_zero_frame_rate() {
        let err = MotionConfig::default().with_frame_rate(0.0).validate();
        assert_eq!(
            err,
            Err(ConfigError::NonPositive {
                field: "frame_rate",
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_nan_density() {
        let err = MotionConfig::default()
            .with_pixel_density(f32::NAN)
            .validate();
        assert_eq!(
            err,
            Err(ConfigError::NonFinite {
                field: "pixel_density"
            })
        );
    }

    #[test]
    fn rejects_inverted_speed_range() {
        let c = MotionConfig {
            speed_min: 2.0,
            speed_max: 1.0,
            ..MotionConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::EmptyRange { field: "speed", .. })
        ));
    }

    #[test]
    fn error_message_names_field() {
        let err = MotionConfig::default()
            .with_frame_rate(-1.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "frame_rate must be positive, got -1");
    }
}
