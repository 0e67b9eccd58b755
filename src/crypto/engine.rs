//! The boundary to the memory-hard hashing primitive.
//!
//! Engines speak in native integer codes (see [`Argon2Status`]). Nothing
//! above [`crate::Argon2Hasher`] ever sees those integers.

use argon2::{Argon2, Params, Version};
use base64ct::{Base64Unpadded, Encoding};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::{Argon2Status, Mode};

/// A memory-hard password hashing primitive.
///
/// Implementations do no policy checks beyond their own numeric limits.
/// `hash` returns the self-describing encoded digest or a non-zero native
/// code; `verify` returns `0` on a match and a native code otherwise.
pub trait HashingEngine {
    #[allow(clippy::too_many_arguments)]
    fn hash(
        &self,
        password: &[u8],
        salt: &[u8],
        mode: Mode,
        t_cost: u32,
        m_cost: u32,
        parallelism: u32,
        output_len: usize,
    ) -> Result<String, i32>;

    fn verify(&self, encoded: &str, password: &[u8], mode: Mode) -> i32;
}

/// Argon2 engine backed by the RustCrypto `argon2` crate.
///
/// Writes and reads the encoded form of the reference C library
/// (`$argon2d$v=19$m=..,t=..,p=..$<salt>$<tag>`, unpadded base64), without
/// the salt and tag size caps of the `password-hash` containers.
#[derive(Debug, Clone, Copy)]
pub struct Argon2Engine {
    version: Version,
}

impl Default for Argon2Engine {
    fn default() -> Self {
        Self {
            version: Version::V0x13,
        }
    }
}

impl Argon2Engine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HashingEngine for Argon2Engine {
    fn hash(
        &self,
        password: &[u8],
        salt: &[u8],
        mode: Mode,
        t_cost: u32,
        m_cost: u32,
        parallelism: u32,
        output_len: usize,
    ) -> Result<String, i32> {
        let tag = compute(
            password,
            salt,
            mode,
            self.version,
            m_cost,
            t_cost,
            parallelism,
            output_len,
        )?;

        Ok(format!(
            "${}$v={}$m={},t={},p={}${}${}",
            mode.algorithm().as_str(),
            self.version as u32,
            m_cost,
            t_cost,
            parallelism,
            Base64Unpadded::encode_string(salt),
            Base64Unpadded::encode_string(&tag),
        ))
    }

    fn verify(&self, encoded: &str, password: &[u8], mode: Mode) -> i32 {
        let decoded = match Decoded::parse(encoded, mode) {
            Some(decoded) => decoded,
            None => return Argon2Status::DecodingFail.code(),
        };

        let tag = match compute(
            password,
            &decoded.salt,
            mode,
            decoded.version,
            decoded.m_cost,
            decoded.t_cost,
            decoded.parallelism,
            decoded.tag.len(),
        ) {
            Ok(tag) => tag,
            Err(code) => return code,
        };

        if bool::from(tag.as_slice().ct_eq(&decoded.tag)) {
            Argon2Status::Ok.code()
        } else {
            Argon2Status::VerifyMismatch.code()
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn compute(
    password: &[u8],
    salt: &[u8],
    mode: Mode,
    version: Version,
    m_cost: u32,
    t_cost: u32,
    parallelism: u32,
    output_len: usize,
) -> Result<Zeroizing<Vec<u8>>, i32> {
    let params = Params::new(m_cost, t_cost, parallelism, Some(output_len)).map_err(native_code)?;
    let argon2 = Argon2::new(mode.algorithm(), version, params);

    let mut tag = Zeroizing::new(vec![0u8; output_len]);
    argon2
        .hash_password_into(password, salt, &mut tag)
        .map_err(native_code)?;
    Ok(tag)
}

/// Fields of an encoded digest.
struct Decoded {
    version: Version,
    m_cost: u32,
    t_cost: u32,
    parallelism: u32,
    salt: Vec<u8>,
    tag: Vec<u8>,
}

impl Decoded {
    /// Parses `encoded`, which must name `mode`'s variant.
    ///
    /// The version segment is optional and defaults to 0x10, as in the
    /// reference decoder. Salt and tag must both be present and non-empty.
    fn parse(encoded: &str, mode: Mode) -> Option<Self> {
        let mut segments = encoded.strip_prefix('$')?.split('$');

        if segments.next()? != mode.algorithm().as_str() {
            return None;
        }

        let mut next = segments.next()?;
        let version = match next.strip_prefix("v=") {
            Some(v) => {
                next = segments.next()?;
                match v.parse::<u32>().ok()? {
                    0x10 => Version::V0x10,
                    0x13 => Version::V0x13,
                    _ => return None,
                }
            }
            None => Version::V0x10,
        };

        let mut costs = next.split(',');
        let m_cost = costs.next()?.strip_prefix("m=")?.parse().ok()?;
        let t_cost = costs.next()?.strip_prefix("t=")?.parse().ok()?;
        let parallelism = costs.next()?.strip_prefix("p=")?.parse().ok()?;
        if costs.next().is_some() {
            return None;
        }

        let salt = Base64Unpadded::decode_vec(segments.next()?).ok()?;
        let tag = Base64Unpadded::decode_vec(segments.next()?).ok()?;
        if segments.next().is_some() || salt.is_empty() || tag.is_empty() {
            return None;
        }

        Some(Self {
            version,
            m_cost,
            t_cost,
            parallelism,
            salt,
            tag,
        })
    }
}

fn native_code(err: argon2::Error) -> i32 {
    let status = match err {
        argon2::Error::AdTooLong => Argon2Status::AdTooLong,
        argon2::Error::AlgorithmInvalid => Argon2Status::IncorrectType,
        argon2::Error::MemoryTooLittle => Argon2Status::MemoryTooLittle,
        argon2::Error::MemoryTooMuch => Argon2Status::MemoryTooMuch,
        argon2::Error::OutputTooShort => Argon2Status::OutputTooShort,
        argon2::Error::OutputTooLong => Argon2Status::OutputTooLong,
        argon2::Error::PwdTooLong => Argon2Status::PwdTooLong,
        argon2::Error::SaltTooShort => Argon2Status::SaltTooShort,
        argon2::Error::SaltTooLong => Argon2Status::SaltTooLong,
        argon2::Error::SecretTooLong => Argon2Status::SecretTooLong,
        argon2::Error::ThreadsTooFew => Argon2Status::LanesTooFew,
        argon2::Error::ThreadsTooMany => Argon2Status::LanesTooMany,
        argon2::Error::TimeTooSmall => Argon2Status::TimeTooSmall,
        _ => Argon2Status::IncorrectParameter,
    };
    status.code()
}
