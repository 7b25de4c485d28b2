//! BLAKE2s parameter handling.
//!
//! Validates caller-supplied configuration and packs it into the 8-word
//! parameter block the compression engine XORs into its initialization
//! vector. Layout per RFC 7693 section 2.5 (sequential mode).

#![forbid(unsafe_code)]

pub mod block;
pub mod config;

pub use block::{build, ParamBlock, Word0, PARAM_WORDS};
pub use config::HashConfig;
