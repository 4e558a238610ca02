//! Physical constants used by the force model.

/// Newtonian constant of gravitation, m³·kg⁻¹·s⁻².
pub const G: f64 = 6.6743015151515151514e-11;

/// Sea-level air density, kg/m³.
pub const AIR_DENSITY: f64 = 1.225;

/// Standard acceleration of free fall, m/s².
pub const ACCEL_OF_FREE_FALL: f64 = 9.80665;

/// Dimensionless drag coefficient of a smooth sphere.
pub const BALL_DRAG_COEF: f64 = 0.47;
