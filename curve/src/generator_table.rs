//! Precomputed powers of two of the base point for fixed-base multiplication.

use num_bigint::BigUint;

use crate::{Curve, CurveError, Projective};

/// `2^i * G` for every bit position of the group order, stored with `Z = 1`.
#[derive(Clone, Debug, Default)]
pub(crate) struct GeneratorTable {
    powers: Vec<Projective>,
}

impl GeneratorTable {
    pub(crate) fn new(curve: &Curve) -> Result<Self, CurveError> {
        let bits = curve.order().bits() as usize;
        let mut powers = Vec::with_capacity(bits);

        let mut current = Projective::from_affine(curve.generator());
        for _ in 0..bits {
            let doubled = curve.double(&current);
            powers.push(current);
            current = Projective::from_affine(&curve.to_affine(&doubled)?);
        }

        Ok(GeneratorTable { powers })
    }
}

impl Curve {
    /// `k * G` using the precomputed table.
    ///
    /// Walks the bits of `k` upwards, adding the matching power of `G` into an
    /// accumulator for every set bit.
    pub fn mul_generator(&self, k: &BigUint) -> Result<Projective, CurveError> {
        let k = self.reduce_scalar(k);
        let mut acc = Projective::infinity();

        for (digit, power) in k.to_radix_le(2).into_iter().zip(&self.generator_table.powers) {
            match digit {
                0 => {}
                1 => acc = self.add(&acc, power),
                d => return Err(CurveError::InvalidDigit(d)),
            }
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_vectors::{secp256k1, secp256k1_double_g, secp256r1};
    use num_traits::Zero;

    #[test]
    fn test_table_covers_order() {
        let curve = secp256k1();
        assert_eq!(curve.generator_table.powers.len(), 256);
        assert_eq!(
            curve.to_affine(&curve.generator_table.powers[1]).unwrap(),
            secp256k1_double_g()
        );
    }

    #[test]
    fn test_mul_generator_matches_scalar_mul() {
        let curve = secp256r1();
        let g = Projective::from(curve.generator());
        for k in [
            BigUint::from(1u32),
            BigUint::from(123456u32),
            curve.order() - 1u32,
            curve.order() + 5u32,
        ] {
            let fixed = curve.mul_generator(&k).unwrap();
            let generic = curve.scalar_mul(&g, &k).unwrap();
            assert!(curve.same_point(&fixed, &generic));
        }
    }

    #[test]
    fn test_mul_generator_zero() {
        let curve = secp256k1();
        assert!(curve.mul_generator(&BigUint::zero()).unwrap().is_infinity());
        assert!(curve.mul_generator(curve.order()).unwrap().is_infinity());
    }
}
