use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid key length {got}: expected 16 to 64 bytes")]
    KeyLength { got: usize },

    #[error("key length {got} does not fit the parameter block: at most 32 bytes")]
    KeyTooLong { got: usize },

    #[error("invalid output length {got}: expected 1 to 64 bytes")]
    OutputSize { got: usize },

    #[error("output length {got} does not fit the parameter block: expected 1 to 32 bytes")]
    ParameterRange { got: usize },

    #[error("invalid salt length {got}: expected exactly 16 bytes")]
    SaltLength { got: usize },

    #[error("invalid personalization length {got}: expected exactly 16 bytes")]
    PersonalLength { got: usize },

    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
}
