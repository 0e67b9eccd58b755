use std::fmt;

use crate::crypto::{Argon2Status, ParameterName};

/// Fatal failures of [`crate::Argon2Hasher`].
///
/// Verification outcomes are not errors; they come back as [`Argon2Status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    PasswordTooShort(usize),
    SaltTooShort(usize),
    OutputTooShort(usize),
    ParameterInsecure(ParameterName),
    EngineFailure(Argon2Status),
    UnknownEngineCode(i32),
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::PasswordTooShort(len) => write!(
                f,
                "Password of length {len} does not correspond to minimal security settings."
            ),
            HashError::SaltTooShort(len) => write!(
                f,
                "Salt of length {len} does not correspond to minimal security settings."
            ),
            HashError::OutputTooShort(size) => write!(
                f,
                "Size {size} does not correspond to minimal security settings."
            ),
            HashError::ParameterInsecure(name) => write!(
                f,
                "Parameter {name} does not fulfill minimal security settings."
            ),
            HashError::EngineFailure(status) => write!(
                f,
                "Could not calculate argon2 hash. Error code: {}.",
                status.code()
            ),
            HashError::UnknownEngineCode(code) => {
                write!(f, "Argon2 engine returned unknown code {code}.")
            }
        }
    }
}

impl std::error::Error for HashError {}
