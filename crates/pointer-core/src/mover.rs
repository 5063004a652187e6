//! Orientation + gyroscope samples to integral screen deltas.
//!
//! [`MouseMover`] keeps the latest pose of the armband. Each gyroscope sample
//! is rotated into world space, compensated for roll about the forearm, run
//! through the [`gain`](crate::gain::gain) curve and scaled to one frame of
//! pixels. Sub-pixel remainders are carried to later frames.

use glam::{Quat, Vec2, Vec3};

use crate::accumulator::DeltaAccumulator;
use crate::config::MotionConfig;
use crate::constants::{DEFAULT_ACCELERATION, DEFAULT_SENSITIVITY};
use crate::error::Result;
use crate::gain::{gain, speed};
use crate::math::{deg_to_rad, rotate, rotation_between};
use crate::param::LinearParameter;

// World-space conventions for the compensation step
const WORLD_DOWN: Vec3 = Vec3::new(0.0, 0.0, -1.0);
const WORLD_UP: Vec3 = Vec3::Y;

#[derive(Clone, Debug)]
pub struct MouseMover {
    config: MotionConfig,
    orientation: Quat,
    /// Armband worn with its +X axis toward the wrist rather than the elbow.
    wrist_facing: bool,
    acceleration: LinearParameter,
    sensitivity: LinearParameter,
    /// Last emitted deltas; always integral.
    delta: Vec2,
    accumulator: DeltaAccumulator,
}

impl Default for MouseMover {
    fn default() -> Self {
        Self::from_valid_config(MotionConfig::default())
    }
}

impl MouseMover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mover around custom physical constants.
    pub fn with_config(config: MotionConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "[pointer] config frame_rate={:.1} pixel_density={:.3}",
            config.frame_rate,
            config.pixel_density
        );
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: MotionConfig) -> Self {
        Self {
            acceleration: LinearParameter::new(
                config.slope_min(),
                config.slope_max(),
                DEFAULT_ACCELERATION,
            ),
            // Reversed: a higher sensitivity moves the inflection point earlier
            sensitivity: LinearParameter::new(
                config.inflection_ratio_max,
                config.inflection_ratio_min,
                DEFAULT_SENSITIVITY,
            ),
            config,
            orientation: Quat::IDENTITY,
            wrist_facing: false,
            delta: Vec2::ZERO,
            accumulator: DeltaAccumulator::new(),
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Store the latest pose. Does not touch the deltas.
    pub fn on_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Process one angular-velocity sample in deg/s (device frame) and update
    /// [`dx`](Self::dx) / [`dy`](Self::dy).
    pub fn on_gyroscope(&mut self, gyro_deg: Vec3) {
        let raw = self.raw_motion(gyro_deg);
        self.update_deltas(raw);
    }

    /// Pre-gain 2D motion (rad/s) for a gyroscope sample under the current
    /// pose. `x` is yaw in world space; `y` is pitch with forearm roll
    /// removed.
    pub fn raw_motion(&self, gyro_deg: Vec3) -> Vec2 {
        let gyro_world = rotate(self.orientation, deg_to_rad(gyro_deg));

        let forward_local = if self.wrist_facing {
            Vec3::NEG_X
        } else {
            Vec3::X
        };
        let forward = rotate(self.orientation, forward_local);
        let right = forward.cross(WORLD_DOWN);

        // Turn the arm's right vector onto world up so roll does not leak
        // into vertical motion.
        let compensation = rotation_between(right, WORLD_UP);
        let gyro_compensated = rotate(compensation, gyro_world);

        Vec2::new(-gyro_world.z, gyro_compensated.y)
    }

    /// Apply gain, frame scaling and the sub-pixel carry to raw motion.
    pub fn update_deltas(&mut self, raw: Vec2) {
        let g = self.current_gain(speed(raw));
        // rad/s * px/rad * s
        let scaled = raw * g * self.config.frame_duration();
        self.delta = self.accumulator.accumulate(scaled);
    }

    /// Gain in px/rad at `speed` (rad/s) with the present tuning.
    pub fn current_gain(&self, speed: f32) -> f32 {
        gain(
            speed,
            self.sensitivity.output(),
            self.acceleration.output(),
            &self.config,
        )
    }

    pub fn dx(&self) -> f32 {
        self.delta.x
    }

    pub fn dy(&self) -> f32 {
        self.delta.y
    }

    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    pub fn carry(&self) -> Vec2 {
        self.accumulator.carry()
    }

    /// Proportion in \[0, 1\]; clamped.
    pub fn set_acceleration(&mut self, value: f32) {
        self.acceleration.set_input(value);
        log::debug!("[pointer] acceleration={:.2}", self.acceleration.input());
    }

    pub fn acceleration(&self) -> f32 {
        self.acceleration.input()
    }

    /// Proportion in \[0, 1\]; clamped.
    pub fn set_sensitivity(&mut self, value: f32) {
        self.sensitivity.set_input(value);
        log::debug!("[pointer] sensitivity={:.2}", self.sensitivity.input());
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity.input()
    }

    pub fn set_wrist_facing(&mut self, wrist_facing: bool) {
        if self.wrist_facing != wrist_facing {
            log::debug!("[pointer] wrist_facing={}", wrist_facing);
        }
        self.wrist_facing = wrist_facing;
    }

    pub fn wrist_facing(&self) -> bool {
        self.wrist_facing
    }

    /// Drop the last deltas and any banked sub-pixel motion. Pose is kept.
    pub fn clear_motion(&mut self) {
        self.delta = Vec2::ZERO;
        self.accumulator.reset();
    }

    /// Forget pose, deltas and carry. Tuning and config are kept.
    pub fn reset(&mut self) {
        self.orientation = Quat::IDENTITY;
        self.clear_motion();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let m = MouseMover::new();
        assert_eq!(m.acceleration(), DEFAULT_ACCELERATION);
        assert_eq!(m.sensitivity(), DEFAULT_SENSITIVITY);
        assert!(!m.wrist_facing());
        assert_eq!(m.delta(), Vec2::ZERO);
        assert_eq!(m.orientation(), Quat::IDENTITY);
    }

    #[test]
    fn orientation_does_not_change_deltas() {
        let mut m = MouseMover::new();
        m.on_gyroscope(Vec3::new(0.0, 30.0, 30.0));
        let before = m.delta();
        m.on_orientation(Quat::from_rotation_z(0.3));
        assert_eq!(m.delta(), before);
    }

    #[test]
    fn setters_clamp_and_getters_return_proportion() {
        let mut m = MouseMover::new();
        m.set_acceleration(2.0);
        m.set_sensitivity(-1.0);
        assert_eq!(m.acceleration(), 1.0);
        assert_eq!(m.sensitivity(), 0.0);
    }

    #[test]
    fn higher_sensitivity_raises_gain() {
        let mut m = MouseMover::new();
        m.set_sensitivity(0.0);
        let low = m.current_gain(1.0);
        m.set_sensitivity(1.0);
        let high = m.current_gain(1.0);
        assert!(high > low);
    }

    #[test]
    fn reset_clears_motion_state_only() {
        let mut m = MouseMover::new();
        m.set_acceleration(0.8);
        m.on_orientation(Quat::from_rotation_y(0.5));
        m.on_gyroscope(Vec3::new(0.0, 5.0, 5.0));
        m.reset();
        assert_eq!(m.delta(), Vec2::ZERO);
        assert_eq!(m.carry(), Vec2::ZERO);
        assert_eq!(m.orientation(), Quat::IDENTITY);
        assert_eq!(m.acceleration(), 0.8);
    }

    #[test]
    fn clear_motion_keeps_pose() {
        let mut m = MouseMover::new();
        let pose = Quat::from_rotation_y(0.2);
        m.on_orientation(pose);
        m.on_gyroscope(Vec3::new(0.0, 20.0, 20.7));
        assert_ne!(m.carry(), Vec2::ZERO);
        m.clear_motion();
        assert_eq!(m.delta(), Vec2::ZERO);
        assert_eq!(m.carry(), Vec2::ZERO);
        assert_eq!(m.orientation(), pose);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let c = MotionConfig::default().with_frame_rate(0.0);
        assert!(MouseMover::with_config(c).is_err());
    }
}
