use std::f32::consts::PI;

// Physical tuning constants for the pointer transform. `MotionConfig::default()`
// is built from these; alternate configs can override any of them.

// Output scaling
pub const PIXEL_DENSITY: f32 = 0.83; // px/mm, constant scale on the gain curve
pub const FRAME_RATE: f32 = 60.0; // Hz, one delta per frame

// Input range (angular speed, rad/s)
pub const SPEED_MIN: f32 = 0.174_532_93; // 10 degrees
pub const SPEED_MAX: f32 = PI; // 180 degrees

// Output range (mm/rad). Smallest and largest clickable targets divided by
// the angular motion desired to cross them.
pub const GAIN_MIN: f32 = 16.0 / 0.274_532_93; // 16 mm over 15.7 degrees
pub const GAIN_MAX: f32 = 4580.0 / (PI / 6.0); // 45.8 cm over 30 degrees

// Sensitivity: where the inflection point sits between SPEED_MIN and SPEED_MAX.
// Lower ratio means an earlier inflection, i.e. more sensitive.
pub const INFLECTION_RATIO_MIN: f32 = 0.4;
pub const INFLECTION_RATIO_MAX: f32 = 0.7;

// Acceleration: slope of the curve at the inflection point, scaled by the
// input range. Zero would give constant gain.
pub const SLOPE_SCALE_MIN: f32 = 4.0;
pub const SLOPE_SCALE_MAX: f32 = 5.0;

// User-facing tuning defaults, both proportions in [0, 1]
pub const DEFAULT_ACCELERATION: f32 = 0.3;
pub const DEFAULT_SENSITIVITY: f32 = 0.5;
