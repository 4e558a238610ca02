//! Fixed-step integrator.
//!
//! Acceleration is held constant over the step, so the position update uses
//! the exact displacement `(v + a·dt/2)·dt` rather than a forward Euler step.

use crate::{
    body::Body,
    error::{PhysicsError, Result},
    vector::Vec2,
};

/// Acceleration produced by `force` on `body`, `None` for a massless body.
#[inline]
pub fn acceleration(body: &Body, force: Vec2) -> Option<Vec2> {
    let mass = body.mass();
    if mass == 0.0 {
        return None;
    }
    Some(Vec2::new(force.x / mass, force.y / mass))
}

/// Moves `body` for `dt` seconds under constant acceleration `accel`.
#[inline]
pub fn kick_drift(body: &mut Body, accel: Vec2, dt: f64) {
    let vel = body.vel();
    *body.pos_mut() += (vel + accel * dt * 0.5) * dt;
    *body.vel_mut() += accel * dt;
}

/// Integrates every body under its accumulated force, in index order.
///
/// Stops at the first body with zero mass. Bodies before it have already
/// been moved.
pub fn integrate(bodies: &mut [Body], forces: &[Vec2], dt: f64) -> Result<()> {
    debug_assert_eq!(bodies.len(), forces.len());

    for (id, (body, force)) in bodies.iter_mut().zip(forces).enumerate() {
        let accel = acceleration(body, *force).ok_or(PhysicsError::ZeroMass { id })?;
        kick_drift(body, accel, dt);
    }
    Ok(())
}
