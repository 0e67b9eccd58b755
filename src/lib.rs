pub mod config;
pub mod crypto;
mod error;

pub use crate::crypto::{
    Argon2Engine, Argon2Status, HashParameters, HashingEngine, Mode, ParameterName,
    ResolvedParams, ValidationOutcome, ValidationStatus,
};
pub use crate::error::HashError;
use crate::crypto::{MIN_OUTPUT_LEN, MIN_PASSWORD_LEN, MIN_SALT_LEN};

/// Argon2 hashing with enforced minimal security settings.
///
/// Owns its engine for its whole lifetime; the engine is released on
/// [`Argon2Hasher::close`] or when the hasher is dropped. The hasher is
/// `Sync` only if its engine is.
pub struct Argon2Hasher<E: HashingEngine = Argon2Engine> {
    engine: E,
}

impl Argon2Hasher<Argon2Engine> {
    pub fn new() -> Self {
        Self::with_engine(Argon2Engine::new())
    }
}

impl Default for Argon2Hasher<Argon2Engine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HashingEngine> Drop for Argon2Hasher<E> {
    fn drop(&mut self) {
        tracing::debug!("argon2 engine released");
    }
}

impl<E: HashingEngine> Argon2Hasher<E> {
    pub fn with_engine(engine: E) -> Self {
        tracing::debug!("argon2 engine acquired");
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Consumes the hasher, ending its use of the engine.
    ///
    /// Equivalent to dropping it; the engine holds no resources beyond its
    /// own fields.
    pub fn close(self) {
        drop(self);
    }

    /// Hashes `password` with `salt` and returns the encoded digest.
    ///
    /// Lengths are checked first, then `params` is resolved. Absent
    /// parameters fall back to the minimal defaults; parameters below the
    /// minimum are rejected. The engine only runs once all checks pass.
    pub fn hash(
        &self,
        password: impl AsRef<[u8]>,
        salt: impl AsRef<[u8]>,
        mode: Mode,
        output_size: usize,
        params: Option<&HashParameters>,
    ) -> Result<String, HashError> {
        let password = password.as_ref();
        let salt = salt.as_ref();

        if password.len() < MIN_PASSWORD_LEN {
            return Err(HashError::PasswordTooShort(password.len()));
        }
        if salt.len() < MIN_SALT_LEN {
            return Err(HashError::SaltTooShort(salt.len()));
        }
        if output_size < MIN_OUTPUT_LEN {
            return Err(HashError::OutputTooShort(output_size));
        }

        let resolution = crypto::resolve(params);
        if let Some(&name) = resolution.rejected.first() {
            tracing::warn!(parameter = %name, "argon2 parameter below minimal security settings");
            return Err(HashError::ParameterInsecure(name));
        }
        let p = resolution.params;

        tracing::debug!(%mode, output_size, "computing argon2 hash");
        self.engine
            .hash(
                password,
                salt,
                mode,
                p.time_cost,
                p.memory_cost,
                p.parallelism,
                output_size,
            )
            .map_err(|code| match Argon2Status::from_code(code) {
                Some(status) if !status.is_ok() => HashError::EngineFailure(status),
                _ => HashError::UnknownEngineCode(code),
            })
    }

    /// Checks `password` against an encoded digest.
    ///
    /// A wrong password is `Ok(Argon2Status::VerifyMismatch)`; only a code
    /// outside the known taxonomy is an error.
    pub fn verify(
        &self,
        digest: &str,
        password: impl AsRef<[u8]>,
        mode: Mode,
    ) -> Result<Argon2Status, HashError> {
        let code = self.engine.verify(digest, password.as_ref(), mode);
        match Argon2Status::from_code(code) {
            Some(status) => {
                tracing::debug!(%mode, %status, "argon2 verification finished");
                Ok(status)
            }
            None => {
                tracing::warn!(code, "argon2 engine returned unknown code");
                Err(HashError::UnknownEngineCode(code))
            }
        }
    }

    pub fn argon2d_hash(
        &self,
        password: impl AsRef<[u8]>,
        salt: impl AsRef<[u8]>,
        output_size: usize,
        params: Option<&HashParameters>,
    ) -> Result<String, HashError> {
        self.hash(password, salt, Mode::Argon2d, output_size, params)
    }

    pub fn argon2i_hash(
        &self,
        password: impl AsRef<[u8]>,
        salt: impl AsRef<[u8]>,
        output_size: usize,
        params: Option<&HashParameters>,
    ) -> Result<String, HashError> {
        self.hash(password, salt, Mode::Argon2i, output_size, params)
    }

    pub fn argon2id_hash(
        &self,
        password: impl AsRef<[u8]>,
        salt: impl AsRef<[u8]>,
        output_size: usize,
        params: Option<&HashParameters>,
    ) -> Result<String, HashError> {
        self.hash(password, salt, Mode::Argon2id, output_size, params)
    }

    pub fn argon2d_verify(
        &self,
        digest: &str,
        password: impl AsRef<[u8]>,
    ) -> Result<Argon2Status, HashError> {
        self.verify(digest, password, Mode::Argon2d)
    }

    pub fn argon2i_verify(
        &self,
        digest: &str,
        password: impl AsRef<[u8]>,
    ) -> Result<Argon2Status, HashError> {
        self.verify(digest, password, Mode::Argon2i)
    }

    pub fn argon2id_verify(
        &self,
        digest: &str,
        password: impl AsRef<[u8]>,
    ) -> Result<Argon2Status, HashError> {
        self.verify(digest, password, Mode::Argon2id)
    }
}
