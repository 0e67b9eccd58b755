use std::fmt;

use argon2::Algorithm;

/// Argon2 variant used to compute a hash.
///
/// The discriminants are the integer selectors the engine expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Data-dependent memory access; strongest against GPU cracking.
    Argon2d = 0,
    /// Data-independent memory access; resists side-channel attacks.
    Argon2i = 1,
    /// Hybrid of both.
    Argon2id = 2,
}

impl Mode {
    pub fn code(self) -> u32 {
        self as u32
    }

    /// The matching `argon2` crate algorithm.
    pub fn algorithm(self) -> Algorithm {
        match self {
            Mode::Argon2d => Algorithm::Argon2d,
            Mode::Argon2i => Algorithm::Argon2i,
            Mode::Argon2id => Algorithm::Argon2id,
        }
    }
}

impl TryFrom<u32> for Mode {
    type Error = u32;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Mode::Argon2d),
            1 => Ok(Mode::Argon2i),
            2 => Ok(Mode::Argon2id),
            other => Err(other),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algorithm().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_engine_selectors() {
        assert_eq!(Mode::Argon2d.code(), 0);
        assert_eq!(Mode::Argon2i.code(), 1);
        assert_eq!(Mode::Argon2id.code(), 2);
    }

    #[test]
    fn try_from_rejects_unknown_selector() {
        assert_eq!(Mode::try_from(2), Ok(Mode::Argon2id));
        assert_eq!(Mode::try_from(3), Err(3));
    }

    #[test]
    fn display_uses_phc_identifier() {
        assert_eq!(Mode::Argon2d.to_string(), "argon2d");
        assert_eq!(Mode::Argon2id.to_string(), "argon2id");
    }
}
