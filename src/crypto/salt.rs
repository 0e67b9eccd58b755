use super::MIN_SALT_LEN;
use anyhow::{Result, anyhow};
use getrandom::fill;

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(|_| anyhow!("OS random generator unavailable"))
}

/// Generate a salt of the minimal accepted length
pub fn generate_salt() -> Result<[u8; MIN_SALT_LEN]> {
    let mut salt = [0u8; MIN_SALT_LEN];
    secure_random(&mut salt)?;
    Ok(salt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salts_differ() {
        let a = generate_salt().unwrap();
        let b = generate_salt().unwrap();
        assert_ne!(a, b);
    }
}
