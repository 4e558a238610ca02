use thiserror::Error;

pub type Result<T> = std::result::Result<T, PhysicsError>;

/// Numeric result codes shared with the C ABI.
pub const RES_OK: i32 = 0;
pub const RES_ERR_NULL_PTR: i32 = -1;
pub const RES_ERR_ZERO_DIST: i32 = -2;
pub const RES_ERR_ZERO_MASS: i32 = -3;
pub const RES_ERR_OUT_OF_RANGE: i32 = -4;

/// Failure kinds reported by the simulation core.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsError {
    /// Storage for the bodies could not be reserved.
    #[error("could not allocate storage for {count} bodies")]
    AllocationFailure { count: usize },
    #[error("body index {id} out of range for {len} bodies")]
    OutOfRange { id: usize, len: usize },
    #[error("body {id} has zero mass")]
    ZeroMass { id: usize },
    #[error("bodies {first} and {second} are at zero distance")]
    ZeroDistance { first: usize, second: usize },
}

impl PhysicsError {
    /// Result code of this failure.
    pub fn code(&self) -> i32 {
        match self {
            PhysicsError::AllocationFailure { .. } => RES_ERR_NULL_PTR,
            PhysicsError::OutOfRange { .. } => RES_ERR_OUT_OF_RANGE,
            PhysicsError::ZeroMass { .. } => RES_ERR_ZERO_MASS,
            PhysicsError::ZeroDistance { .. } => RES_ERR_ZERO_DIST,
        }
    }
}

/// Static description of a result code.
pub fn describe(code: i32) -> &'static str {
    match code {
        RES_OK => "Success",
        RES_ERR_NULL_PTR => "Null pointer error",
        RES_ERR_ZERO_DIST => "Zero distance error",
        RES_ERR_ZERO_MASS => "Zero mass error",
        RES_ERR_OUT_OF_RANGE => "Index out of range error",
        _ => "Unknown error code",
    }
}

/// Collapses a result into its code.
pub fn result_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => RES_OK,
        Err(e) => e.code(),
    }
}
