//! Entry-point validation of hashing configuration.
//!
//! These checks run before any hashing work starts and fail on the first
//! violation. They are stricter than the wire format in some places (key
//! length 16..=64) and looser in others (output length up to 64); the
//! parameter-block builder applies the wire bounds separately.

#![forbid(unsafe_code)]

use blake2s_core::limits::{
    KEY_BYTES_MAX, KEY_BYTES_MIN, OUT_BYTES_MAX, OUT_BYTES_MIN, PERSONAL_INPUT_BYTES,
    SALT_INPUT_BYTES,
};
use blake2s_core::{Error, Result};

/// Validated hashing configuration, consumed once by the block builder.
///
/// Absent optional fields are normalized to empty vectors. Construct one per
/// hash invocation; it holds no resources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashConfig {
    /// Requested digest length in bytes.
    pub out_len: usize,
    /// Key bytes, empty when hashing unkeyed.
    pub key: Vec<u8>,
    /// Salt bytes, empty when absent.
    pub salt: Vec<u8>,
    /// Personalization bytes, empty when absent.
    pub personal: Vec<u8>,
}

impl HashConfig {
    /// Unkeyed, unsalted configuration for the given digest length.
    pub fn new(out_len: usize) -> Self {
        Self {
            out_len,
            key: Vec::new(),
            salt: Vec::new(),
            personal: Vec::new(),
        }
    }
}

/// Normalize an optional key.
///
/// Absent keys become empty; present keys must be 16 to 64 bytes.
pub fn validate_key(key: Option<&[u8]>) -> Result<Vec<u8>> {
    match key {
        None => Ok(Vec::new()),
        Some(k) if k.len() < KEY_BYTES_MIN || k.len() > KEY_BYTES_MAX => {
            Err(Error::KeyLength { got: k.len() })
        }
        Some(k) => Ok(k.to_vec()),
    }
}

/// Check a requested output length against the entry-point bound (1..=64).
pub fn validate_out_len(out_len: usize) -> Result<usize> {
    if out_len < OUT_BYTES_MIN || out_len > OUT_BYTES_MAX {
        return Err(Error::OutputSize { got: out_len });
    }
    Ok(out_len)
}

/// Require a salt of exactly 16 bytes.
///
/// Only the first 8 bytes reach the parameter block; the rest are accepted
/// but never hashed.
pub fn validate_salt(salt: Option<&[u8]>) -> Result<Vec<u8>> {
    let salt = salt.ok_or(Error::MissingArgument("salt"))?;
    if salt.len() != SALT_INPUT_BYTES {
        return Err(Error::SaltLength { got: salt.len() });
    }
    Ok(salt.to_vec())
}

/// Require a personalization string of exactly 16 bytes.
///
/// Same 8-byte wire window as the salt.
pub fn validate_personal(personal: Option<&[u8]>) -> Result<Vec<u8>> {
    let personal = personal.ok_or(Error::MissingArgument("personal"))?;
    if personal.len() != PERSONAL_INPUT_BYTES {
        return Err(Error::PersonalLength { got: personal.len() });
    }
    Ok(personal.to_vec())
}

/// Require a message argument where the contract demands one.
pub fn validate_message(message: Option<&[u8]>) -> Result<&[u8]> {
    message.ok_or(Error::MissingArgument("message"))
}
