//! Global environment shared by every body of a simulation.
//!
//! Nothing here is validated: negative densities or zero vectors are legal
//! and simply produce no (or inverted) physical effect.

use crate::constants::{ACCEL_OF_FREE_FALL, AIR_DENSITY};
use crate::vector::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    /// Ambient fluid density, kg/m³. Zero disables drag and buoyancy.
    pub density: f64,
    /// Constant acceleration acting on all bodies, m/s².
    pub accel_of_gravity: Vec2,
    /// Ambient wind, m/s.
    pub wind: Vec2,
    /// Pairwise gravitation between bodies.
    pub mutual_gravity: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self::vacuum()
    }
}

impl Environment {
    /// No medium, no field, no mutual gravity.
    pub fn vacuum() -> Self {
        Self {
            density: 0.0,
            accel_of_gravity: Vec2::zero(),
            wind: Vec2::zero(),
            mutual_gravity: false,
        }
    }

    /// Sea-level air with standard gravity pointing down (-y).
    pub fn earth() -> Self {
        Self {
            density: AIR_DENSITY,
            accel_of_gravity: Vec2::new(0.0, -ACCEL_OF_FREE_FALL),
            ..Self::vacuum()
        }
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_accel_of_gravity(mut self, accel: Vec2) -> Self {
        self.accel_of_gravity = accel;
        self
    }

    pub fn with_wind(mut self, wind: Vec2) -> Self {
        self.wind = wind;
        self
    }

    pub fn with_mutual_gravity(mut self, enabled: bool) -> Self {
        self.mutual_gravity = enabled;
        self
    }
}
