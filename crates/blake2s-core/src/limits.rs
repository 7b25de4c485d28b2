//! Length bounds for hashing inputs.
//!
//! Two layers check lengths independently and deliberately disagree: the
//! public entry points accept key lengths 16..=64 and output lengths 1..=64,
//! while the parameter-block wire format caps both at 32. Likewise the entry
//! points take 16-byte salt/personalization strings of which only the first
//! 8 bytes fit the wire format. Keeping every bound named here lets the two
//! layers be audited side by side.

#![forbid(unsafe_code)]

/// Minimum key length accepted by the public entry points, in bytes.
pub const KEY_BYTES_MIN: usize = 16;

/// Maximum key length accepted by the public entry points, in bytes.
pub const KEY_BYTES_MAX: usize = 64;

/// Minimum output length accepted by the public entry points, in bytes.
pub const OUT_BYTES_MIN: usize = 1;

/// Maximum output length accepted by the public entry points, in bytes.
pub const OUT_BYTES_MAX: usize = 64;

/// Salt length required by the salt+personal entry point, in bytes.
pub const SALT_INPUT_BYTES: usize = 16;

/// Personalization length required by the salt+personal entry point, in bytes.
pub const PERSONAL_INPUT_BYTES: usize = 16;

/// Output length used by the salt+personal entry point when none is given.
pub const DEFAULT_OUT_BYTES: usize = 64;

/// Maximum digest length encodable in the parameter block (word 0, byte 0).
pub const WIRE_OUT_BYTES_MAX: usize = 32;

/// Maximum key length encodable in the parameter block (word 0, byte 1).
pub const WIRE_KEY_BYTES_MAX: usize = 32;

/// Salt capacity of the parameter block (words 4-5), in bytes.
pub const SALT_WIRE_BYTES: usize = 8;

/// Personalization capacity of the parameter block (words 6-7), in bytes.
pub const PERSONAL_WIRE_BYTES: usize = 8;

/// BLAKE2s message block size in bytes. A key is padded to one such block.
pub const BLOCK_BYTES: usize = 64;
