use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::codec::{bytes_to_uint, uint_to_fixed_bytes};
use crate::CurveError;

/// Size of one encoded coordinate in bytes.
pub const COORDINATE_SIZE: usize = 32;

/// Size of an encoded point `x || y` in bytes.
pub const POINT_SIZE: usize = 2 * COORDINATE_SIZE;

/// Affine point on the elliptic curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affine {
    /// The x-coordinate of the point, reduced mod p
    pub x: BigUint,
    /// The y-coordinate of the point, reduced mod p
    pub y: BigUint,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl Affine {
    /// Create a new affine point.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// The point at infinity (identity element)
    pub fn infinity() -> Self {
        Affine {
            x: BigUint::zero(),
            y: BigUint::zero(),
            is_infinity: true,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Uncompressed encoding `x || y`, each coordinate big-endian and
    /// left-padded to [`COORDINATE_SIZE`] bytes. No prefix byte.
    pub fn to_bytes(&self) -> Result<[u8; POINT_SIZE], CurveError> {
        if self.is_infinity {
            return Err(CurveError::PointAtInfinity);
        }
        let x: [u8; COORDINATE_SIZE] = uint_to_fixed_bytes(&self.x)?;
        let y: [u8; COORDINATE_SIZE] = uint_to_fixed_bytes(&self.y)?;

        let mut out = [0u8; POINT_SIZE];
        out[..COORDINATE_SIZE].copy_from_slice(&x);
        out[COORDINATE_SIZE..].copy_from_slice(&y);
        Ok(out)
    }

    /// Decodes `x || y`. Curve membership is not checked here; see
    /// [`Curve::is_on_curve`](crate::Curve::is_on_curve).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CurveError> {
        if bytes.len() != POINT_SIZE {
            return Err(CurveError::InvalidLength {
                expected: POINT_SIZE,
                got: bytes.len(),
            });
        }
        let (x, y) = bytes.split_at(COORDINATE_SIZE);
        Ok(Affine::new(bytes_to_uint(x), bytes_to_uint(y)))
    }
}
