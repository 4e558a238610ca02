use crate::{
    body::Body,
    environment::Environment,
    error::{PhysicsError, Result},
    forces, integrator,
    vector::Vec2,
};

use rayon::prelude::*;

/// A fixed set of bodies and the environment they move in.
///
/// The number of bodies is chosen at construction and never changes.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Global environment parameters.
    env: Environment,
    /// Total simulated time, s.
    time: f64,
    /// All bodies in the simulation.
    bodies: Box<[Body]>,
    /// Net force on each body, rebuilt every substep.
    forces: Box<[Vec2]>,
    /// Whether the per-body force pass runs on the rayon pool.
    use_rayon: bool,
}

/// Allocates `n` copies of `value`, reporting failure instead of aborting.
fn try_filled<T: Clone>(n: usize, value: T) -> Result<Box<[T]>> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(n)
        .map_err(|_| PhysicsError::AllocationFailure { count: n })?;
    storage.resize(n, value);
    Ok(storage.into_boxed_slice())
}

impl Simulation {
    /// Creates a simulation of `n` zeroed bodies in a vacuum.
    pub fn new(n: usize) -> Result<Self> {
        Self::with_environment(n, Environment::default())
    }

    /// Creates a simulation of `n` zeroed bodies in the given environment.
    pub fn with_environment(n: usize, env: Environment) -> Result<Self> {
        Ok(Self {
            env,
            time: 0.0,
            bodies: try_filled(n, Body::default())?,
            forces: try_filled(n, Vec2::zero())?,
            use_rayon: false,
        })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Read-only view of every body, in index order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn body(&self, id: usize) -> Result<&Body> {
        let len = self.bodies.len();
        self.bodies
            .get(id)
            .ok_or(PhysicsError::OutOfRange { id, len })
    }

    pub fn body_mut(&mut self, id: usize) -> Result<&mut Body> {
        let len = self.bodies.len();
        self.bodies
            .get_mut(id)
            .ok_or(PhysicsError::OutOfRange { id, len })
    }

    /// Total simulated time, s.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn density(&self) -> f64 {
        self.env.density
    }

    pub fn set_density(&mut self, density: f64) {
        self.env.density = density;
    }

    pub fn accel_of_gravity(&self) -> Vec2 {
        self.env.accel_of_gravity
    }

    pub fn accel_of_gravity_mut(&mut self) -> &mut Vec2 {
        &mut self.env.accel_of_gravity
    }

    pub fn set_accel_of_gravity(&mut self, accel: Vec2) {
        self.env.accel_of_gravity = accel;
    }

    pub fn wind(&self) -> Vec2 {
        self.env.wind
    }

    pub fn wind_mut(&mut self) -> &mut Vec2 {
        &mut self.env.wind
    }

    pub fn set_wind(&mut self, wind: Vec2) {
        self.env.wind = wind;
    }

    pub fn is_mutual_gravity(&self) -> bool {
        self.env.mutual_gravity
    }

    pub fn set_mutual_gravity(&mut self, enabled: bool) {
        self.env.mutual_gravity = enabled;
    }

    /// Sets whether to use Rayon for the per-body force pass.
    pub fn set_use_rayon(&mut self, use_rayon: bool) {
        self.use_rayon = use_rayon;
    }

    /// Advances the simulation by `steps` substeps of `step_time` seconds.
    ///
    /// On failure the call returns at once: bodies keep whatever was already
    /// integrated and the clock does not move. The clock advances by
    /// `step_time * steps` only after every substep succeeded.
    pub fn advance(&mut self, step_time: f64, steps: u32) -> Result<()> {
        if self.bodies.is_empty() {
            return Ok(());
        }

        log::trace!(
            "advance: step_time={}s steps={} bodies={}",
            step_time,
            steps,
            self.bodies.len()
        );

        for substep in 0..steps {
            if let Err(e) = self.step(step_time) {
                log::debug!("advance: substep {} of {} failed: {}", substep, steps, e);
                return Err(e);
            }
        }

        self.time += step_time * f64::from(steps);
        Ok(())
    }

    /// One substep: force pass, mutual gravity, integration.
    fn step(&mut self, dt: f64) -> Result<()> {
        self.compute_forces()?;
        integrator::integrate(&mut self.bodies, &self.forces, dt)
    }

    /// Rebuilds the force buffer from the current state.
    fn compute_forces(&mut self) -> Result<()> {
        let env = &self.env;

        if self.use_rayon {
            self.forces
                .par_iter_mut()
                .zip(self.bodies.par_iter())
                .for_each(|(force, body)| *force = forces::body_force(body, env));
        } else {
            for (force, body) in self.forces.iter_mut().zip(self.bodies.iter()) {
                *force = forces::body_force(body, env);
            }
        }

        if env.mutual_gravity && self.bodies.len() > 1 {
            forces::accumulate_mutual_gravity(&self.bodies, &mut self.forces)?;
        }
        Ok(())
    }
}
