//! Error types for signing, verification, and key recovery.

use curve::CurveError;

/// Errors that can occur during signing, verification and recovery.
///
/// Malformed input always surfaces as an error. A well-formed signature that
/// simply does not match makes `verify` return `Ok(false)` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EcdsaError {
    /// The private key has the wrong length or is not in `[1, n)`.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(&'static str),
    /// The public key has the wrong length or is not a point on the curve.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(&'static str),
    /// The digest is not exactly [`DIGEST_SIZE`](crate::DIGEST_SIZE) bytes.
    #[error("invalid digest length: expected {expected} bytes, got {got}")]
    InvalidDigestLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        got: usize,
    },
    /// The signature string is not 130 hex characters.
    #[error("invalid signature format: {0:?}")]
    InvalidSignatureFormat(String),
    /// The signature is well-formed but no public key can be recovered from it.
    #[error("invalid signature")]
    InvalidSignature,
    /// `next_int` was called with a zero bound.
    #[error("bound must be positive")]
    InvalidBound,
    /// The curve lacks a property the operation relies on.
    #[error("unsupported curve: {0}")]
    UnsupportedCurve(&'static str),
    /// Arithmetic or encoding failure in the curve layer.
    #[error(transparent)]
    Curve(#[from] CurveError),
}
