//! Validated private and public keys.

use curve::codec::{bytes_to_uint, uint_to_fixed_bytes};
use curve::{Affine, Curve};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::constants::{PK_SIZE, SK_SIZE};
use crate::errors::EcdsaError;

/// A secret signing key: a scalar in `[1, n)`.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey {
    scalar: BigUint,
    bytes: [u8; SK_SIZE],
}

/// A public verifying key: a point on the curve, never the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKey {
    point: Affine,
    bytes: [u8; PK_SIZE],
}

impl SigningKey {
    /// Parses a 32-byte big-endian scalar and checks `0 < k < n`.
    pub fn from_bytes(curve: &Curve, bytes: &[u8]) -> Result<Self, EcdsaError> {
        let bytes: [u8; SK_SIZE] = bytes
            .try_into()
            .map_err(|_| EcdsaError::InvalidPrivateKey("expected 32 bytes"))?;
        let scalar = bytes_to_uint(&bytes);
        if scalar.is_zero() || &scalar >= curve.order() {
            return Err(EcdsaError::InvalidPrivateKey("scalar must be in [1, n)"));
        }
        Ok(SigningKey { scalar, bytes })
    }

    pub(crate) fn from_scalar(scalar: BigUint) -> Result<Self, EcdsaError> {
        let bytes = uint_to_fixed_bytes(&scalar)?;
        Ok(SigningKey { scalar, bytes })
    }

    #[inline]
    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        self.bytes
    }

    /// `sk * G`.
    pub fn verifying_key(&self, curve: &Curve) -> Result<VerifyingKey, EcdsaError> {
        let point = curve.mul_generator(&self.scalar)?;
        VerifyingKey::from_point(curve.to_affine(&point)?)
    }
}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SigningKey { .. }")
    }
}

impl VerifyingKey {
    /// Parses `x || y` and checks the point is on `curve`.
    pub fn from_bytes(curve: &Curve, bytes: &[u8]) -> Result<Self, EcdsaError> {
        if bytes.len() != PK_SIZE {
            return Err(EcdsaError::InvalidPublicKey("expected 64 bytes"));
        }
        let point = Affine::from_bytes(bytes)?;
        if !curve.is_on_curve(&point) {
            return Err(EcdsaError::InvalidPublicKey("point is not on the curve"));
        }
        VerifyingKey::from_point(point)
    }

    pub(crate) fn from_point(point: Affine) -> Result<Self, EcdsaError> {
        let bytes = point.to_bytes()?;
        Ok(VerifyingKey { point, bytes })
    }

    #[inline]
    pub fn point(&self) -> &Affine {
        &self.point
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; PK_SIZE] {
        self.bytes
    }
}
