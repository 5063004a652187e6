//! Sub-pixel carry so truncated motion is delayed, never lost.
//!
//! Each update emits the integer part of its scaled delta and banks the
//! fractional part. Once the bank exceeds a whole pixel in magnitude, its
//! integer part is emitted too. Summed over a run, output plus remaining carry
//! equals the real-valued input.

use crate::math::fractional;
use glam::Vec2;

/// Emit the integral part of `scaled`, banking its remainder in `carry`.
///
/// `carry` keeps the sign of the motion that produced it, so reversing
/// direction drains it back toward zero. Its magnitude stays below 2.
#[inline]
pub fn accumulate_axis(carry: &mut f32, scaled: f32) -> f32 {
    *carry += fractional(scaled);
    let mut out = scaled.trunc();
    if carry.abs() > 1.0 {
        out += carry.trunc();
        *carry = fractional(*carry);
    }
    out
}

/// Per-axis carry for a 2D pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeltaAccumulator {
    carry: Vec2,
}

impl DeltaAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of scaled (fractional px) motion, get integral px back.
    pub fn accumulate(&mut self, scaled: Vec2) -> Vec2 {
        let x = accumulate_axis(&mut self.carry.x, scaled.x);
        let y = accumulate_axis(&mut self.carry.y, scaled.y);
        Vec2::new(x, y)
    }

    pub fn carry(&self) -> Vec2 {
        self.carry
    }

    pub fn reset(&mut self) {
        self.carry = Vec2::ZERO;
    }
}
