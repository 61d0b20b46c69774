use std::f64::consts::TAU;

use nalgebra::Matrix3;

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{SceneError, SceneResult};

/// Degrees to radians, the unit every geometry helper takes.
pub fn degrees(deg: f64) -> f64 {
    deg.to_radians()
}

/// Normalize an angle into `[0, TAU)`.
pub fn normalize_angle(rad: f64) -> f64 {
    let r = rad.rem_euclid(TAU);
    if r >= TAU { 0.0 } else { r }
}

/// Rotate `p` counter-clockwise by `angle_rad` around `center`.
pub fn rotate_about(p: Point, angle_rad: f64, center: Point) -> Point {
    if angle_rad == 0.0 {
        return p;
    }
    let v = p - center;
    let (s, c) = angle_rad.sin_cos();
    center + Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// The 3x3 matrix with a homogeneous row of ones over the endpoints of `a` and `b` (z = 0).
pub fn homogeneous_matrix(a: Vec2, b: Vec2) -> Matrix3<f64> {
    Matrix3::new(
        1.0, 1.0, 1.0, //
        a.x, a.y, 0.0, //
        b.x, b.y, 0.0,
    )
}

/// Determinant of [`homogeneous_matrix`]; equals the signed area `a.x * b.y - a.y * b.x`.
pub fn homogeneous_det(a: Vec2, b: Vec2) -> SceneResult<f64> {
    let det = homogeneous_matrix(a, b).determinant();
    if !det.is_finite() {
        return Err(SceneError::numeric(format!(
            "determinant of vectors ({}, {}) and ({}, {}) is not finite",
            a.x, a.y, b.x, b.y
        )));
    }
    Ok(det)
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn premul_u8(c: u8, a: u8) -> u8 {
    mul_div255_u16(u16::from(c), u16::from(a)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
