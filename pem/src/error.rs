use base64::DecodeError;
use thiserror::Error;

use crate::Label;

/// Errors that can occur when parsing or decoding PEM data.
///
/// Every variant means the input text is malformed: a boundary is missing,
/// the labels disagree, or the body is not valid base64.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Missing the opening boundary marker (e.g., `-----BEGIN PUBLIC KEY-----`)
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// Missing the closing boundary marker (e.g., `-----END PUBLIC KEY-----`)
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    /// The label in the boundary marker is not recognized
    #[error("invalid label")]
    InvalidLabel,

    /// The BEGIN and END labels do not match (e.g., BEGIN PUBLIC KEY, END PRIVATE KEY)
    #[error("label doesn't match")]
    LabelMissMatch,

    /// The document is well formed but carries another label than the caller asked for
    #[error("expected label {expected}, found {found}")]
    UnexpectedLabel { expected: Label, found: Label },

    /// Malformed boundary marker
    #[error("invalid encapsulation boundary")]
    InvalidEncapsulationBoundary,

    /// Invalid character or format in a base64 data line
    #[error("invalid base64line")]
    InvalidBase64Line,

    /// Invalid final base64 line (the line containing padding characters)
    #[error("invalid base64finl")]
    InvalidBase64Finl,

    /// Failed to decode base64 data
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
