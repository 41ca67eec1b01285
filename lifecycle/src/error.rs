use thiserror::Error;

/// Errors returned by [`KeyBox`](crate::KeyBox).
///
/// Both variants carry the underlying error untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// The PEM text could not be decoded
    #[error("malformed input: {0}")]
    MalformedInput(#[from] pem::error::Error),

    /// The crypto provider failed
    #[error("provider: {0}")]
    Provider(#[from] provider::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
