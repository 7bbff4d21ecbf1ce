//! Signature nonce generation.

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

const NONCE_BYTES: usize = 8;

/// The operating system entropy source could not produce random bytes.
#[derive(Debug, Error)]
#[error("entropy source unavailable: {0}")]
pub struct NonceError(#[from] rand::Error);

/// Generate a random 16-character hex nonce.
///
/// Reads 8 bytes straight from the OS entropy source. A failure there is
/// returned to the caller; there is no fallback to a predictable source.
///
/// # Example
///
/// ```rust
/// use zego_token::generate_signature_nonce;
///
/// let nonce = generate_signature_nonce().unwrap();
/// assert_eq!(nonce.len(), 16);
/// assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_signature_nonce() -> Result<String, NonceError> {
    nonce_from(&mut OsRng)
}

fn nonce_from<R: RngCore>(rng: &mut R) -> Result<String, NonceError> {
    let mut bytes = [0u8; NONCE_BYTES];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0)
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::other("no entropy")))
        }
    }

    #[test]
    fn test_nonce_length() {
        let nonce = generate_signature_nonce().unwrap();
        assert_eq!(nonce.len(), 16);
    }

    #[test]
    fn test_nonce_is_lowercase_hex() {
        for _ in 0..64 {
            let nonce = generate_signature_nonce().unwrap();
            assert!(nonce
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn test_nonces_are_unique() {
        let nonce1 = generate_signature_nonce().unwrap();
        let nonce2 = generate_signature_nonce().unwrap();
        assert_ne!(nonce1, nonce2);
    }

    #[test]
    fn test_entropy_failure_propagates() {
        let err = nonce_from(&mut BrokenRng).unwrap_err();
        assert!(err.to_string().contains("no entropy"));
    }
}
