//! Scalar multiplication by double-and-add.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{Curve, CurveError, Projective};

/// Little-endian binary digits of `k`, zero-extended to `len` digits.
pub(crate) fn binary_digits(k: &BigUint, len: usize) -> Vec<u8> {
    let mut digits = k.to_radix_le(2);
    if digits.len() < len {
        digits.resize(len, 0);
    }
    digits
}

impl Curve {
    /// Reduce a scalar into `[0, n)`.
    #[inline]
    pub fn reduce_scalar(&self, k: &BigUint) -> BigUint {
        if k >= self.order() {
            self.scalar.reduce(k)
        } else {
            k.clone()
        }
    }

    /// `k * P`, scanning the bits of `k` from the most significant end.
    ///
    /// `k` is reduced mod n first, so `P` must belong to the prime-order group
    /// generated by `G`. Returns the point at infinity when `k ≡ 0` or `P` is
    /// infinity.
    pub fn scalar_mul(&self, point: &Projective, k: &BigUint) -> Result<Projective, CurveError> {
        let k = self.reduce_scalar(k);
        if k.is_zero() || point.is_infinity() {
            return Ok(Projective::infinity());
        }

        let mut acc = Projective::infinity();
        for digit in k.to_radix_be(2) {
            acc = self.double(&acc);
            match digit {
                0 => {}
                1 => acc = self.add(&acc, point),
                d => return Err(CurveError::InvalidDigit(d)),
            }
        }
        Ok(acc)
    }
}
