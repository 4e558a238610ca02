pub mod body;
pub mod c_api;
pub mod constants;
pub mod environment;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod simulation;
pub mod utils;
pub mod vector;

pub use body::Body;
pub use environment::Environment;
pub use error::{PhysicsError, Result};
pub use simulation::Simulation;
pub use vector::{Polar, Vec2};
pub use ultraviolet;
