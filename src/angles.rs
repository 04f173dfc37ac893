use crate::path::Float;

use core::f32::consts::PI;

pub const DOUBLE_PI: Float = PI * 2.0;

/// Right angle, in degrees.
pub const RIGHT_ANGLE: Float = 90.0;

/// Straight angle, in degrees.
pub const STRAIGHT_ANGLE: Float = 180.0;

/// Full angle, in degrees.
pub const FULL_ANGLE: Float = 360.0;

/// Converts an angle measured in degrees to radians.
pub fn deg_to_rad(deg: Float) -> Float {
    deg * DOUBLE_PI / FULL_ANGLE
}

/// Converts an angle measured in radians to degrees.
pub fn rad_to_deg(rad: Float) -> Float {
    rad * FULL_ANGLE / DOUBLE_PI
}

/// Angle (in degrees) spanned by an arc of the given length on a circle
/// of the given radius.
///
/// Yields an infinite angle for a zero radius; the caller must guard.
pub fn arc_length_to_angle(length: Float, radius: Float) -> Float {
    rad_to_deg(length / radius)
}

/// Length of an arc spanning the given angle (in degrees) on a circle
/// of the given radius.
pub fn angle_to_arc_length(angle: Float, radius: Float) -> Float {
    deg_to_rad(angle) * radius
}
