use crate::vector::Vec2;
use std::f64::consts::PI;

/// A spherical point mass moving in the plane.
///
/// Area and volume are derived from the radius and only change through
/// [`Body::set_radius`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Position, m.
    pos: Vec2,
    /// Velocity, m/s.
    vel: Vec2,
    /// Mass, kg.
    mass: f64,
    /// Radius, m.
    radius: f64,
    /// Cross-section area, m².
    area: f64,
    /// Volume, m³.
    volume: f64,
}

impl Default for Body {
    fn default() -> Self {
        Self::new(Vec2::zero(), Vec2::zero(), 0.0, 0.0)
    }
}

impl Body {
    /// Creates a new Body with the given properties.
    pub fn new(pos: Vec2, vel: Vec2, mass: f64, radius: f64) -> Self {
        let mut body = Self {
            pos,
            vel,
            mass,
            radius: 0.0,
            area: 0.0,
            volume: 0.0,
        };
        body.set_radius(radius);
        body
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn vel_mut(&mut self) -> &mut Vec2 {
        &mut self.vel
    }

    pub fn set_vel(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Stores the raw mass. Zero is accepted here and rejected by the
    /// integrator.
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Sets the radius and recomputes cross-section area and volume.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.area = PI * radius * radius;
        self.volume = (4.0 / 3.0) * PI * radius * radius * radius;
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Mass left after subtracting the displaced fluid. Negative when the
    /// body is lighter than the medium.
    pub fn relative_mass(&self, density: f64) -> f64 {
        self.mass - self.volume * density
    }
}
