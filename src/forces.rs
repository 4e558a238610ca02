//! Force model.
//!
//! Per-body contributions (quadratic drag, buoyancy-adjusted gravity) depend
//! only on the body and the environment. Mutual gravity walks every
//! unordered pair once and writes both sides.

use crate::{
    body::Body,
    constants::{BALL_DRAG_COEF, G},
    environment::Environment,
    error::{PhysicsError, Result},
    vector::{Polar, Vec2},
};

/// Quadratic air drag on `body`, opposite to its velocity relative to the wind.
/// Zero when the medium is empty or the body moves with the wind.
pub fn drag(body: &Body, env: &Environment) -> Vec2 {
    let relative_vel = body.vel() - env.wind;
    let relative_speed = relative_vel.length();

    if env.density == 0.0 || relative_speed == 0.0 {
        return Vec2::zero();
    }

    let air_f =
        body.area() * env.density * relative_speed * relative_speed * 0.5 * BALL_DRAG_COEF;

    // Scale the relative velocity instead of normalizing it.
    let k = air_f / relative_speed;
    Vec2::new(-relative_vel.x * k, -relative_vel.y * k)
}

/// Constant field gravity acting on the buoyancy-adjusted mass.
pub fn buoyant_gravity(body: &Body, env: &Environment) -> Vec2 {
    env.accel_of_gravity * body.relative_mass(env.density)
}

/// Net environmental force on a single body.
pub fn body_force(body: &Body, env: &Environment) -> Vec2 {
    drag(body, env) + buoyant_gravity(body, env)
}

/// Gravitational pull of `b` on `a`, or `None` if they coincide.
/// The pull of `a` on `b` is the exact negation.
pub fn pair_attraction(a: &Body, b: &Body) -> Option<Vec2> {
    let dist = a.pos() - b.pos();
    let dist_len = dist.length();
    if dist_len == 0.0 {
        return None;
    }

    let gravity_f = a.mass() * b.mass() * G / (dist_len * dist_len);
    let k = gravity_f / dist_len;
    Some(Vec2::new(-dist.x * k, -dist.y * k))
}

/// Adds mutual gravitation of every pair (i < j) into `forces`.
///
/// Pairs are visited in ascending order. The first coincident pair aborts
/// the pass; pairs already visited keep their contributions.
pub fn accumulate_mutual_gravity(bodies: &[Body], forces: &mut [Vec2]) -> Result<()> {
    debug_assert_eq!(bodies.len(), forces.len());

    let n = bodies.len();
    for i in 0..n {
        let a = &bodies[i];
        for j in (i + 1)..n {
            let f = pair_attraction(a, &bodies[j])
                .ok_or(PhysicsError::ZeroDistance { first: i, second: j })?;

            forces[i] += f;
            forces[j] -= f;
        }
    }
    Ok(())
}
