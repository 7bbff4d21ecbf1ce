//! Common query parameters for signed server API requests.

use std::time::{SystemTime, UNIX_EPOCH};

use super::digest::generate_signature;
use super::nonce::{generate_signature_nonce, NonceError};

/// Value of the `SignatureVersion` parameter.
pub const SIGNATURE_VERSION: &str = "2.0";

/// The authentication parameters attached to every server API request.
///
/// # Example
///
/// ```rust
/// use zego_token::SignedParams;
///
/// let params = SignedParams::at(12345, "secret", "0011223344556677", 1_700_000_000);
/// assert!(params.query_string().starts_with("AppId=12345&SignatureNonce=0011223344556677"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedParams {
    pub app_id: u32,
    pub nonce: String,
    pub timestamp: i64,
    pub signature: String,
}

impl SignedParams {
    /// Sign with a fresh nonce and the current time.
    pub fn new(app_id: u32, secret: &str) -> Result<Self, NonceError> {
        let nonce = generate_signature_nonce()?;
        // A clock before the epoch signs as 0 and is rejected server side.
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();
        Ok(Self::at(app_id, secret, &nonce, timestamp))
    }

    /// Sign with an explicit nonce and timestamp.
    pub fn at(app_id: u32, secret: &str, nonce: &str, timestamp: i64) -> Self {
        Self {
            app_id,
            nonce: nonce.to_string(),
            timestamp,
            signature: generate_signature(app_id, nonce, secret, timestamp),
        }
    }

    /// The query pairs in the order the server API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("AppId", self.app_id.to_string()),
            ("SignatureNonce", self.nonce.clone()),
            ("Timestamp", self.timestamp.to_string()),
            ("Signature", self.signature.clone()),
            ("SignatureVersion", SIGNATURE_VERSION.to_string()),
        ]
    }

    /// `key=value` pairs joined with `&`. All values are URL-safe as is.
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_is_pure() {
        let a = SignedParams::at(12345, "secret", "nonce_value", 1_700_000_000);
        let b = SignedParams::at(12345, "secret", "nonce_value", 1_700_000_000);
        assert_eq!(a, b);
        assert_eq!(a.signature, "709cccc4c45ac364bdd2cb5b700796d4");
    }

    #[test]
    fn test_query_string() {
        let params = SignedParams::at(12345, "secret", "nonce_value", 1_700_000_000);
        assert_eq!(
            params.query_string(),
            "AppId=12345&SignatureNonce=nonce_value&Timestamp=1700000000\
             &Signature=709cccc4c45ac364bdd2cb5b700796d4&SignatureVersion=2.0"
        );
    }

    #[test]
    fn test_new_signs_its_own_nonce() {
        let params = SignedParams::new(42, "secret").unwrap();
        assert_eq!(params.nonce.len(), 16);
        assert!(params.timestamp > 0);
        assert_eq!(
            params.signature,
            generate_signature(42, &params.nonce, "secret", params.timestamp)
        );
    }

    #[test]
    fn test_new_uses_fresh_nonce() {
        let a = SignedParams::new(42, "secret").unwrap();
        let b = SignedParams::new(42, "secret").unwrap();
        assert_ne!(a.nonce, b.nonce);
        assert_ne!(a.signature, b.signature);
    }
}
