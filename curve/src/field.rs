//! Prime-field arithmetic over `BigUint`.
//!
//! A [`PrimeField`] owns its modulus and returns canonical values (strictly
//! below the modulus) from every operation. A [`Curve`](crate::Curve) holds two
//! of them: the base field mod P for coordinates and the scalar field mod N for
//! scalars. Values of one field must never be fed to the other.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Integers modulo a prime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    pub fn new(modulus: BigUint) -> Self {
        PrimeField { modulus }
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    #[inline]
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    #[inline]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// `a - b`, accepting operands that are not yet reduced.
    #[inline]
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let b = b % &self.modulus;
        (a % &self.modulus + &self.modulus - b) % &self.modulus
    }

    #[inline]
    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    #[inline]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    #[inline]
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Multiply by a small constant such as the 2, 3, 4 and 8 of the doubling formula.
    #[inline]
    pub fn mul_small(&self, a: &BigUint, k: u32) -> BigUint {
        (a * k) % &self.modulus
    }

    #[inline]
    pub fn pow(&self, a: &BigUint, exponent: &BigUint) -> BigUint {
        a.modpow(exponent, &self.modulus)
    }

    /// Multiplicative inverse, or zero for zero.
    #[inline]
    pub fn inv(&self, a: &BigUint) -> BigUint {
        mod_inverse(a, &self.modulus)
    }

    /// Whether square roots can be taken as `a^((p+1)/4)`.
    pub fn has_fast_sqrt(&self) -> bool {
        (&self.modulus % 4u32) == BigUint::from(3u32)
    }

    /// Square root of `a`, if one exists.
    ///
    /// Only moduli congruent to 3 mod 4 are supported; `None` is returned for
    /// any other modulus and for quadratic non-residues.
    pub fn sqrt(&self, a: &BigUint) -> Option<BigUint> {
        if !self.has_fast_sqrt() {
            return None;
        }
        let a = self.reduce(a);
        let exponent = (&self.modulus + 1u32) >> 2;
        let root = self.pow(&a, &exponent);
        (self.square(&root) == a).then_some(root)
    }
}

/// Inverse of `a` modulo `m` by the extended Euclidean algorithm.
///
/// Returns `x` with `a * x ≡ 1 (mod m)` when `a` is coprime to `m`, and zero
/// when `a ≡ 0 (mod m)`. The result is meaningless for other non-coprime
/// inputs; every modulus used by this crate is prime.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    if a.is_zero() {
        return BigUint::zero();
    }

    let modulus = BigInt::from(m.clone());
    let (mut lm, mut hm) = (BigInt::one(), BigInt::zero());
    let (mut low, mut high) = (BigInt::from(a), modulus.clone());

    while low > BigInt::one() {
        let r = &high / &low;
        let nm = &hm - &lm * &r;
        let new = &high - &low * &r;
        hm = lm;
        high = low;
        lm = nm;
        low = new;
    }

    floor_mod(&lm, &modulus)
}

/// `x mod m` rounded towards negative infinity, so the result is never negative.
fn floor_mod(x: &BigInt, m: &BigInt) -> BigUint {
    let mut r = x % m;
    if r.sign() == Sign::Minus {
        r += m;
    }
    r.into_parts().1
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn secp256k1_order() -> BigUint {
        BigUint::from_bytes_be(&hex!(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"
        ))
    }

    #[test]
    fn test_inverse_small() {
        let m = BigUint::from(11u32);
        assert_eq!(mod_inverse(&BigUint::from(3u32), &m), BigUint::from(4u32));
        assert_eq!(mod_inverse(&BigUint::from(10u32), &m), BigUint::from(10u32));
        assert_eq!(mod_inverse(&BigUint::from(1u32), &m), BigUint::from(1u32));
    }

    #[test]
    fn test_inverse_of_zero_is_zero() {
        let n = secp256k1_order();
        assert_eq!(mod_inverse(&BigUint::zero(), &n), BigUint::zero());
        assert_eq!(mod_inverse(&n, &n), BigUint::zero());
    }

    #[test]
    fn test_inverse_large() {
        let n = secp256k1_order();
        let field = PrimeField::new(n.clone());
        for a in [
            BigUint::from(2u32),
            BigUint::from(0xdead_beefu64),
            &n - 1u32,
            BigUint::from_bytes_be(&hex!(
                "43EFA45ABDA29F5E4A7FEFABC3DACF7ACFF4EAAF861AF5DFFF3AD1F6543F3ACA"
            )),
        ] {
            let inv = field.inv(&a);
            assert!(inv < n);
            assert_eq!(field.mul(&a, &inv), BigUint::one());
        }
    }

    #[test]
    fn test_inverse_reduces_input() {
        let m = BigUint::from(11u32);
        assert_eq!(mod_inverse(&BigUint::from(14u32), &m), BigUint::from(4u32));
    }

    #[test]
    fn test_floor_mod_negative() {
        let m = BigInt::from(7);
        assert_eq!(floor_mod(&BigInt::from(-3), &m), BigUint::from(4u32));
        assert_eq!(floor_mod(&BigInt::from(-14), &m), BigUint::zero());
        assert_eq!(floor_mod(&BigInt::from(9), &m), BigUint::from(2u32));
    }

    #[test]
    fn test_sub_wraps() {
        let f = PrimeField::new(BigUint::from(13u32));
        assert_eq!(f.sub(&BigUint::from(2u32), &BigUint::from(5u32)), BigUint::from(10u32));
        assert_eq!(f.neg(&BigUint::zero()), BigUint::zero());
        assert_eq!(f.sub(&BigUint::from(20u32), &BigUint::from(30u32)), BigUint::from(3u32));
    }

    #[test]
    fn test_sqrt() {
        // 23 ≡ 3 (mod 4)
        let f = PrimeField::new(BigUint::from(23u32));
        let root = f.sqrt(&BigUint::from(2u32)).expect("2 is a square mod 23");
        assert_eq!(f.square(&root), BigUint::from(2u32));
        assert_eq!(f.sqrt(&BigUint::from(5u32)), None);

        // 13 ≡ 1 (mod 4) is not supported
        let g = PrimeField::new(BigUint::from(13u32));
        assert!(!g.has_fast_sqrt());
        assert_eq!(g.sqrt(&BigUint::from(4u32)), None);
    }
}
