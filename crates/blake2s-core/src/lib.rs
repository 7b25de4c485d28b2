//! Shared error type and length bounds for b2s.

#![forbid(unsafe_code)]

mod error;
pub mod limits;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
