use md5::{Digest, Md5};

/// Compute the server API signature.
///
/// The four values are concatenated without separators in the order
/// `app_id`, `nonce`, `secret`, `timestamp`, hashed with MD5 and returned
/// as 32 lowercase hex characters.
///
/// # Example
///
/// ```rust
/// use zego_token::generate_signature;
///
/// let signature = generate_signature(12345, "0123456789abcdef", "secret", 1_700_000_000);
/// assert_eq!(signature.len(), 32);
/// ```
pub fn generate_signature(app_id: u32, nonce: &str, secret: &str, timestamp: i64) -> String {
    let mut hasher = Md5::new();
    hasher.update(format!("{app_id}{nonce}{secret}{timestamp}").as_bytes());
    hex::encode(hasher.finalize())
}
