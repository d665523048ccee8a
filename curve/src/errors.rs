//! Error type for curve arithmetic and encoding.

/// Errors raised by point arithmetic, curve validation, and byte encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// The point at infinity has no affine representation.
    #[error("point at infinity has no affine coordinates")]
    PointAtInfinity,
    /// The binary decomposition of a scalar produced a digit other than 0 or 1.
    ///
    /// This indicates a bug in the multiplication routine itself and is never
    /// caused by caller input.
    #[error("internal error: binary digit {0} outside {{0, 1}}")]
    InvalidDigit(u8),
    /// The curve constants violate one of the curve invariants.
    #[error("invalid curve parameters: {0}")]
    InvalidParams(&'static str),
    /// A hex string contained characters outside `[0-9a-fA-F]`.
    #[error("invalid hex string: {0:?}")]
    InvalidHex(String),
    /// A fixed-width byte buffer had the wrong length.
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        got: usize,
    },
    /// An integer does not fit in the requested fixed width.
    #[error("value does not fit in {len} bytes")]
    ValueTooLarge {
        /// Width of the target buffer in bytes.
        len: usize,
    },
}
