//! Version 04 tokens.
//!
//! A token is `"04"` followed by the standard base64 encoding of:
//!
//! | Field | Size |
//! |-------|------|
//! | expire (unix seconds) | `i64` big endian |
//! | nonce length | `u16` big endian |
//! | nonce | 12 bytes |
//! | ciphertext length | `u16` big endian |
//! | ciphertext | AES-256-GCM of the JSON [`TokenInfo`], keyed by the server secret |
//! | mode | `u8`, 1 = GCM |

use std::time::{SystemTime, UNIX_EPOCH};

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{TokenError, TokenIssuer};

const VERSION: &str = "04";
const SECRET_LEN: usize = 32;
const NONCE_LEN: usize = 12;
const MODE_GCM: u8 = 1;

/// The claims sealed inside a version 04 token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub app_id: u32,
    pub user_id: String,
    pub nonce: i32,
    pub ctime: i64,
    pub expire: i64,
    pub payload: String,
}

/// Default [`TokenIssuer`] producing version 04 tokens.
#[derive(Clone, Copy, Debug, Default)]
pub struct Token04Issuer;

impl Token04Issuer {
    /// Open a token issued with `secret` and return its claims.
    ///
    /// Does not check expiry; callers compare [`TokenInfo::expire`] with
    /// their own clock.
    pub fn decode(token: &str, secret: &str) -> Result<TokenInfo, TokenError> {
        let encoded = token
            .strip_prefix(VERSION)
            .ok_or(TokenError::Malformed("unsupported version"))?;
        let body = STANDARD
            .decode(encoded)
            .map_err(|_| TokenError::Malformed("invalid base64"))?;

        let mut rest = body.as_slice();
        let expire = i64::from_be_bytes(take_array(&mut rest)?);
        let nonce_len = u16::from_be_bytes(take_array(&mut rest)?) as usize;
        if nonce_len != NONCE_LEN {
            return Err(TokenError::Malformed("unexpected nonce length"));
        }
        let nonce = take(&mut rest, nonce_len)?;
        let cipher_len = u16::from_be_bytes(take_array(&mut rest)?) as usize;
        let encrypted = take(&mut rest, cipher_len)?;
        let [mode]: [u8; 1] = take_array(&mut rest)?;
        if mode != MODE_GCM {
            return Err(TokenError::Malformed("unsupported encryption mode"));
        }
        if !rest.is_empty() {
            return Err(TokenError::Malformed("trailing bytes"));
        }

        let cipher = cipher_for(secret)?;
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce), encrypted)
            .map_err(|_| TokenError::Decrypt)?;
        let info: TokenInfo = serde_json::from_slice(&plaintext)?;
        if info.expire != expire {
            return Err(TokenError::Malformed("expiry mismatch"));
        }
        Ok(info)
    }
}

impl TokenIssuer for Token04Issuer {
    fn generate(
        &self,
        app_id: u32,
        user_id: &str,
        secret: &str,
        effective_seconds: u32,
        payload: &str,
    ) -> Result<String, TokenError> {
        if app_id == 0 {
            return Err(TokenError::InvalidAppId);
        }
        if user_id.is_empty() {
            return Err(TokenError::InvalidUserId);
        }
        if secret.len() != SECRET_LEN {
            return Err(TokenError::InvalidSecret);
        }
        if effective_seconds == 0 {
            return Err(TokenError::InvalidEffectiveTime);
        }

        let ctime = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| TokenError::Clock)?
            .as_secs() as i64;

        let mut random = [0u8; 4];
        OsRng.try_fill_bytes(&mut random)?;
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.try_fill_bytes(&mut nonce)?;

        let info = TokenInfo {
            app_id,
            user_id: user_id.to_string(),
            nonce: i32::from_be_bytes(random),
            ctime,
            expire: ctime + i64::from(effective_seconds),
            payload: payload.to_string(),
        };
        seal(&info, secret, &nonce)
    }
}

fn cipher_for(secret: &str) -> Result<Aes256Gcm, TokenError> {
    Aes256Gcm::new_from_slice(secret.as_bytes()).map_err(|_| TokenError::InvalidSecret)
}

fn seal(info: &TokenInfo, secret: &str, nonce: &[u8; NONCE_LEN]) -> Result<String, TokenError> {
    let plaintext = serde_json::to_vec(info)?;
    let encrypted = cipher_for(secret)?
        .encrypt(Nonce::from_slice(nonce), plaintext.as_slice())
        .map_err(|_| TokenError::Encrypt)?;
    let cipher_len = u16::try_from(encrypted.len()).map_err(|_| TokenError::TooLarge {
        len: encrypted.len(),
        max: u16::MAX as usize,
    })?;

    let mut body = Vec::with_capacity(8 + 2 + NONCE_LEN + 2 + encrypted.len() + 1);
    body.extend_from_slice(&info.expire.to_be_bytes());
    body.extend_from_slice(&(NONCE_LEN as u16).to_be_bytes());
    body.extend_from_slice(nonce);
    body.extend_from_slice(&cipher_len.to_be_bytes());
    body.extend_from_slice(&encrypted);
    body.push(MODE_GCM);

    Ok(format!("{VERSION}{}", STANDARD.encode(body)))
}

fn take<'a>(buf: &mut &'a [u8], n: usize) -> Result<&'a [u8], TokenError> {
    if buf.len() < n {
        return Err(TokenError::Malformed("truncated"));
    }
    let (head, tail) = buf.split_at(n);
    *buf = tail;
    Ok(head)
}

fn take_array<const N: usize>(buf: &mut &[u8]) -> Result<[u8; N], TokenError> {
    let mut out = [0u8; N];
    out.copy_from_slice(take(buf, N)?);
    Ok(out)
}
