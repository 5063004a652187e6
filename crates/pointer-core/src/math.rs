//! Small vector and rotation helpers over glam value types.

use glam::{Quat, Vec3};

/// Rotate `v` by `q`. `q` is expected to be a unit quaternion; a non-unit one
/// gives scaled, not failing, output.
#[inline]
pub fn rotate(q: Quat, v: Vec3) -> Vec3 {
    q * v
}

/// Shortest-arc rotation taking the direction of `from` onto the direction of
/// `to`. Inputs need not be unit length.
///
/// Parallel or zero-length inputs give the identity. Opposite inputs give a
/// half turn about an axis perpendicular to `from`.
pub fn rotation_between(from: Vec3, to: Vec3) -> Quat {
    let mut axis = from.cross(to);
    let mut cos_theta = from.dot(to);
    if cos_theta >= 1.0 {
        return Quat::IDENTITY;
    }
    // |from| * |to|
    let mut k = (from.length_squared() * to.length_squared()).sqrt();
    if k <= 0.0 {
        return Quat::IDENTITY;
    }
    if cos_theta / k <= -1.0 {
        let reference = if from.dot(Vec3::X).abs() < 1.0 {
            Vec3::X
        } else {
            Vec3::new(0.0, 1.0, 1.0)
        };
        axis = from.cross(reference);
        k = 0.0;
        cos_theta = 0.0;
    }
    Quat::from_xyzw(axis.x, axis.y, axis.z, k + cos_theta).normalize()
}

#[inline]
pub fn deg_to_rad(v: Vec3) -> Vec3 {
    v * (std::f32::consts::PI / 180.0)
}

/// Signed fractional part; `x - trunc(x)` keeps the sign of `x`.
#[inline]
pub fn fractional(x: f32) -> f32 {
    x - x.trunc()
}
