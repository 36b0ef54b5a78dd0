//! Datasheet conversion factors, physical units per raw count. The literals
//! are kept exactly as published; re-deriving them changes reported values.

#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14159265359;
pub const TO_RADIANS: f64 = PI / 180.0;
pub const TO_DEGREES: f64 = 180.0 / PI;

/// rad/s per count.
pub const GYRO: f64 = 0.0610352 * TO_RADIANS;
/// g per count.
pub const ACCEL: f64 = 0.000183105;
/// Normalized field strength per count.
pub const MAG: f64 = 0.000305176;
/// rad per count.
pub const EULER: f64 = 0.0109863 * TO_RADIANS;
pub const QUAT: f64 = 0.0000335693;
