use thiserror::Error;

/// Errors raised by a crypto provider.
///
/// The key facade forwards these unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid cipher suite configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("PKCS#8 error: {0}")]
    Pkcs8(#[from] pkcs8::Error),

    #[error("SPKI error: {0}")]
    Spki(#[from] pkcs8::spki::Error),

    #[error("random number generator: {0}")]
    Random(#[from] rand::Error),

    /// Failure reported by the underlying engine
    #[error("engine error: {0}")]
    Engine(String),
}

pub type Result<T> = std::result::Result<T, Error>;
