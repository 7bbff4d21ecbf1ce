//! Server API request signing.
//!
//! Every server API call carries `Signature = md5(AppId + SignatureNonce + ServerSecret + Timestamp)`
//! together with the nonce and timestamp that went into it.

mod digest;
mod nonce;
mod params;

pub use digest::generate_signature;
pub use nonce::{generate_signature_nonce, NonceError};
pub use params::{SignedParams, SIGNATURE_VERSION};
