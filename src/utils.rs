use crate::{
    body::Body,
    constants::G,
    environment::Environment,
    error::Result,
    simulation::Simulation,
    vector::{Polar, Vec2},
};

/// Mass of the central body of [`uniform_disc`], kg.
pub const DISC_CENTRAL_MASS: f64 = 1e15;

/// Builds a seeded galaxy-like scene of `n` bodies, suitable for demos and benchmarks.
/// - Places a massive central body at the origin (index 0).
/// - Scatters the others over a disc with uniform area density.
/// - Gives each one the circular orbit speed for the mass enclosed by its radius.
///
/// Mutual gravity is enabled; the rest of the environment is a vacuum.
pub fn uniform_disc(n: usize, seed: u64) -> Result<Simulation> {
    let env = Environment::vacuum().with_mutual_gravity(true);
    let mut sim = Simulation::with_environment(n, env)?;
    if n == 0 {
        return Ok(sim);
    }

    let mut rng = fastrand::Rng::with_seed(seed);
    let inner_radius = 25.0;
    let outer_radius = (n as f64).sqrt() * 50.0 + inner_radius * 2.0;

    let bodies = sim.bodies_mut();
    bodies[0] = Body::new(Vec2::zero(), Vec2::zero(), DISC_CENTRAL_MASS, inner_radius);

    for body in bodies.iter_mut().skip(1) {
        let angle = rng.f64() * std::f64::consts::TAU;

        // Random radius with uniform area distribution
        let t = inner_radius / outer_radius;
        let r = (rng.f64() * (1.0 - t * t) + t * t).sqrt() * outer_radius;

        let mass = 1.0 + rng.f64() * 9.0;
        *body = Body::new(Vec2::from_polar(r, angle), Vec2::zero(), mass, mass.cbrt());
    }

    // Sort orbiters by distance from center (closest first)
    bodies[1..].sort_by(|a, b| a.pos().mag_sq().total_cmp(&b.pos().mag_sq()));

    let mut enclosed = 0.0;
    for body in bodies.iter_mut() {
        enclosed += body.mass();
        let pos = body.pos();
        let r = pos.length();
        if r == 0.0 {
            continue;
        }

        // Circular orbit: v = sqrt(G * M / r), perpendicular to the radius.
        let speed = (G * enclosed / r).sqrt();
        body.set_vel(Vec2::from_polar(speed, pos.angle() + std::f64::consts::FRAC_PI_2));
    }

    Ok(sim)
}
