use num_bigint::BigUint;

use crate::group::binary_digits;
use crate::{Curve, CurveError, Projective};

impl Curve {
    /// Compute `a * G + b * P`, where `G` is the base point.
    ///
    /// Both scalars are scanned together from the top bit down with `G + P`
    /// precomputed, so the doublings are shared.
    pub fn double_scalar_mul_basepoint(
        &self,
        a: &BigUint,
        b: &BigUint,
        point: &Projective,
    ) -> Result<Projective, CurveError> {
        let a = self.reduce_scalar(a);
        let b = self.reduce_scalar(b);

        let g = Projective::from_affine(&self.generator);
        let g_plus_p = self.add(&g, point);

        let len = a.bits().max(b.bits()) as usize;
        let a_digits = binary_digits(&a, len);
        let b_digits = binary_digits(&b, len);

        let mut acc = Projective::infinity();
        for i in (0..len).rev() {
            acc = self.double(&acc);
            match (a_digits[i], b_digits[i]) {
                (0, 0) => {}
                (1, 0) => acc = self.add(&acc, &g),
                (0, 1) => acc = self.add(&acc, point),
                (1, 1) => acc = self.add(&acc, &g_plus_p),
                (d, e) => return Err(CurveError::InvalidDigit(d.max(e))),
            }
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_vectors::{secp256k1, secp256r1};
    use num_traits::Zero;

    #[test]
    fn test_matches_separate_multiplications() {
        let curve = secp256k1();
        let p = curve.mul_generator(&BigUint::from(987654321u64)).unwrap();
        let a = BigUint::from(0x1234_5678_9abc_def0u64);
        let b = curve.order() - 77u32;

        let combined = curve.double_scalar_mul_basepoint(&a, &b, &p).unwrap();
        let expected = curve.add(
            &curve.mul_generator(&a).unwrap(),
            &curve.scalar_mul(&p, &b).unwrap(),
        );
        assert!(curve.same_point(&combined, &expected));
    }

    #[test]
    fn test_zero_scalars() {
        let curve = secp256r1();
        let p = curve.mul_generator(&BigUint::from(9u32)).unwrap();
        let zero = BigUint::zero();

        assert!(curve
            .double_scalar_mul_basepoint(&zero, &zero, &p)
            .unwrap()
            .is_infinity());
        let only_p = curve
            .double_scalar_mul_basepoint(&zero, &BigUint::from(2u32), &p)
            .unwrap();
        assert!(curve.same_point(&only_p, &curve.double(&p)));
    }

    #[test]
    fn test_cancelling_terms() {
        let curve = secp256k1();
        let k = BigUint::from(31337u32);
        let p = curve.mul_generator(&k).unwrap();
        // k*G + (n-1)*(k*G) = O
        let minus_one = curve.order() - 1u32;
        let result = curve
            .double_scalar_mul_basepoint(&k, &minus_one, &p)
            .unwrap();
        assert!(result.is_infinity());
    }

    #[test]
    fn test_point_equal_to_generator() {
        let curve = secp256r1();
        let g = Projective::from(curve.generator());
        let result = curve
            .double_scalar_mul_basepoint(&BigUint::from(3u32), &BigUint::from(4u32), &g)
            .unwrap();
        let expected = curve.mul_generator(&BigUint::from(7u32)).unwrap();
        assert!(curve.same_point(&result, &expected));
    }
}
