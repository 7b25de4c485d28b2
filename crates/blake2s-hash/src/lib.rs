//! BLAKE2s hashing.
//!
//! One-shot entry points over the incremental [`Blake2s`] state. Arguments
//! are validated eagerly, in order, and the first violation aborts before
//! any message byte is processed. The entry-point bounds (key 16..=64,
//! output 1..=64) are deliberately looser than the parameter-block wire
//! format (key and output at most 32); a request passing the first check but
//! not the second fails when the engine builds its parameter block.

#![forbid(unsafe_code)]

pub mod engine;
pub mod state;

use blake2s_core::limits::DEFAULT_OUT_BYTES;
use blake2s_core::Result;
use blake2s_params::config::{
    validate_key, validate_message, validate_out_len, validate_personal, validate_salt,
};
use blake2s_params::HashConfig;

pub use blake2s_core::Error;
pub use state::Blake2s;

/// Hash a message, optionally keyed.
///
/// The key, when present, must be 16 to 64 bytes; the output length 1 to 64
/// bytes. Output lengths above 32 and keys above 32 bytes do not fit the
/// BLAKE2s parameter block and are rejected there.
pub fn hash(message: &[u8], key: Option<&[u8]>, out_len: usize) -> Result<Vec<u8>> {
    let key = validate_key(key)?;
    let out_len = validate_out_len(out_len)?;

    let config = HashConfig {
        out_len,
        key,
        salt: Vec::new(),
        personal: Vec::new(),
    };
    digest(&config, message)
}

/// Hash a message with a salt and personalization string, optionally keyed.
///
/// Message, salt, and personalization are required; salt and personalization
/// must be exactly 16 bytes, of which only the first 8 reach the parameter
/// block. `out_len` defaults to 64 bytes when absent, which exceeds the
/// parameter block's 32-byte capacity and is rejected there; pass an
/// explicit length of at most 32 to obtain a digest.
pub fn hash_salt_personal(
    message: Option<&[u8]>,
    key: Option<&[u8]>,
    salt: Option<&[u8]>,
    personal: Option<&[u8]>,
    out_len: Option<usize>,
) -> Result<Vec<u8>> {
    let message = validate_message(message)?;
    let key = validate_key(key)?;
    let salt = validate_salt(salt)?;
    let personal = validate_personal(personal)?;
    let out_len = validate_out_len(out_len.unwrap_or(DEFAULT_OUT_BYTES))?;

    let config = HashConfig {
        out_len,
        key,
        salt,
        personal,
    };
    digest(&config, message)
}

fn digest(config: &HashConfig, message: &[u8]) -> Result<Vec<u8>> {
    let mut state = Blake2s::new(config)?;
    state.update(message);
    Ok(state.finalize())
}
