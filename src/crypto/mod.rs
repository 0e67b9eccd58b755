//! Cryptographic building blocks for password hashing.
//!
//! Provides the Argon2 mode selector, parameter validation, the engine
//! boundary and its result taxonomy.

pub mod engine;
pub mod mode;
pub mod params;
pub mod salt;
pub mod status;

pub use engine::{Argon2Engine, HashingEngine};
pub use mode::Mode;
pub use params::{
    HashParameters, ParameterName, Resolution, ResolvedParams, ValidationOutcome,
    ValidationStatus, resolve, validate,
};
pub use salt::generate_salt;
pub use status::Argon2Status;

/// Minimal password length in bytes.
pub const MIN_PASSWORD_LEN: usize = 12;
/// Minimal salt length in bytes.
pub const MIN_SALT_LEN: usize = 16;
/// Minimal requested digest size in bytes.
pub const MIN_OUTPUT_LEN: usize = 16;
/// Minimal number of iterations.
pub const MIN_TIME_COST: u32 = 3;
/// Minimal memory cost in KiB (64 MiB).
pub const MIN_MEMORY_COST: u32 = 64 * 1024;
/// Minimal number of lanes.
pub const MIN_PARALLELISM: u32 = 1;
