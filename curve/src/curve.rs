//! A validated short-Weierstrass curve and the checks that guard it.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::generator_table::GeneratorTable;
use crate::{Affine, CurveError, CurveParams, PrimeField, Projective};

/// Widest field or group order supported by the fixed-width encodings.
pub const MAX_BITS: u64 = 256;

/// A prime-order curve `y^2 = x^3 + a*x + b (mod p)` with base point `G`.
///
/// Built once from [`CurveParams`] and immutable afterwards, so it can be
/// cloned or shared across threads freely. All coordinate arithmetic goes
/// through the base field (mod p) and all scalar arithmetic through the scalar
/// field (mod n).
#[derive(Clone, Debug)]
pub struct Curve {
    pub(crate) params: CurveParams,
    pub(crate) base: PrimeField,
    pub(crate) scalar: PrimeField,
    pub(crate) generator: Affine,
    pub(crate) generator_table: GeneratorTable,
}

impl Curve {
    /// Validates the parameters and precomputes the generator table.
    ///
    /// Rejects moduli wider than [`MAX_BITS`], even moduli, unreduced
    /// constants, singular curves, a base point off the curve, and an `n` that
    /// is not the order of the base point.
    pub fn new(params: CurveParams) -> Result<Self, CurveError> {
        check_shape(&params)?;

        let mut curve = Curve {
            base: PrimeField::new(params.p.clone()),
            scalar: PrimeField::new(params.n.clone()),
            generator: Affine::new(params.gx.clone(), params.gy.clone()),
            generator_table: GeneratorTable::default(),
            params,
        };

        if curve.is_singular() {
            return Err(CurveError::InvalidParams("curve is singular"));
        }
        if !curve.is_on_curve(&curve.generator) {
            return Err(CurveError::InvalidParams("base point is not on the curve"));
        }
        curve.check_order()?;

        curve.generator_table = GeneratorTable::new(&curve)?;
        Ok(curve)
    }

    #[inline]
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Field of coordinates, mod p.
    #[inline]
    pub fn base_field(&self) -> &PrimeField {
        &self.base
    }

    /// Field of scalars, mod n.
    #[inline]
    pub fn scalar_field(&self) -> &PrimeField {
        &self.scalar
    }

    /// Group order n.
    #[inline]
    pub fn order(&self) -> &BigUint {
        &self.params.n
    }

    /// Base point G.
    #[inline]
    pub fn generator(&self) -> &Affine {
        &self.generator
    }

    /// Right-hand side `x^3 + a*x + b` of the curve equation.
    pub fn curve_rhs(&self, x: &BigUint) -> BigUint {
        let f = &self.base;
        let x3 = f.mul(&f.square(x), x);
        let ax = f.mul(&self.params.a, x);
        f.add(&f.add(&x3, &ax), &self.params.b)
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    ///
    /// Coordinates that are not reduced mod p are rejected.
    pub fn is_on_curve(&self, point: &Affine) -> bool {
        if point.is_infinity() {
            return true;
        }
        let p = self.base.modulus();
        if &point.x >= p || &point.y >= p {
            return false;
        }
        self.base.square(&point.y) == self.curve_rhs(&point.x)
    }

    /// The point with the given x-coordinate and y parity, if there is one.
    ///
    /// Requires p ≡ 3 (mod 4); returns `None` for other fields, for `x >= p`,
    /// and when `x^3 + a*x + b` is not a square.
    pub fn decompress(&self, x: &BigUint, y_is_odd: bool) -> Option<Affine> {
        if x >= self.base.modulus() {
            return None;
        }
        let y = self.base.sqrt(&self.curve_rhs(x))?;
        let y = if y.bit(0) == y_is_odd {
            y
        } else {
            self.base.neg(&y)
        };
        Some(Affine::new(x.clone(), y))
    }

    fn is_singular(&self) -> bool {
        let f = &self.base;
        let a3 = f.mul(&f.square(&self.params.a), &self.params.a);
        let b2 = f.square(&self.params.b);
        f.add(&f.mul_small(&a3, 4), &f.mul_small(&b2, 27)).is_zero()
    }

    /// `(n - 1) * G` must equal `-G`.
    fn check_order(&self) -> Result<(), CurveError> {
        let g = Projective::from_affine(&self.generator);
        let n_minus_one = &self.params.n - BigUint::one();
        let product = self.scalar_mul(&g, &n_minus_one)?;

        if !self.same_point(&product, &self.negate(&g)) {
            return Err(CurveError::InvalidParams(
                "n is not the order of the base point",
            ));
        }
        Ok(())
    }
}

fn check_shape(params: &CurveParams) -> Result<(), CurveError> {
    let three = BigUint::from(3u32);
    if params.p <= three || !params.p.bit(0) {
        return Err(CurveError::InvalidParams("p must be an odd prime"));
    }
    if params.n < three || !params.n.bit(0) {
        return Err(CurveError::InvalidParams("n must be an odd prime"));
    }
    if params.p.bits() > MAX_BITS || params.n.bits() > MAX_BITS {
        return Err(CurveError::InvalidParams("p and n must fit in 256 bits"));
    }
    if params.p == params.n {
        return Err(CurveError::InvalidParams("anomalous curve: n equals p"));
    }
    let p = &params.p;
    if &params.a >= p || &params.b >= p || &params.gx >= p || &params.gy >= p {
        return Err(CurveError::InvalidParams(
            "coefficients and base point must be reduced mod p",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_vectors::{secp256k1, secp256r1};

    #[test]
    fn test_generator_on_curve() {
        for curve in [secp256k1(), secp256r1()] {
            assert!(curve.is_on_curve(curve.generator()));
            assert!(!curve.generator().is_infinity());
        }
    }

    #[test]
    fn test_off_curve_point() {
        let curve = secp256k1();
        let mut point = curve.generator().clone();
        point.y += 1u32;
        assert!(!curve.is_on_curve(&point));

        let unreduced = Affine::new(
            &curve.generator().x + curve.base_field().modulus(),
            curve.generator().y.clone(),
        );
        assert!(!curve.is_on_curve(&unreduced));
    }

    #[test]
    fn test_rejects_base_point_off_curve() {
        let mut params = CurveParams::secp256k1();
        params.gy += 1u32;
        assert_eq!(
            Curve::new(params).unwrap_err(),
            CurveError::InvalidParams("base point is not on the curve")
        );
    }

    #[test]
    fn test_rejects_wrong_order() {
        let mut params = CurveParams::secp256k1();
        params.n -= 2u32;
        assert_eq!(
            Curve::new(params).unwrap_err(),
            CurveError::InvalidParams("n is not the order of the base point")
        );
    }

    #[test]
    fn test_rejects_unreduced_constants() {
        let mut params = CurveParams::secp256k1();
        params.b = &params.p + 7u32;
        assert!(matches!(
            Curve::new(params),
            Err(CurveError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_rejects_wide_modulus() {
        let mut params = CurveParams::secp256k1();
        params.p = (BigUint::one() << 257) + 1u32;
        assert_eq!(
            Curve::new(params).unwrap_err(),
            CurveError::InvalidParams("p and n must fit in 256 bits")
        );
    }

    #[test]
    fn test_rejects_singular_curve() {
        let mut params = CurveParams::secp256k1();
        params.b = BigUint::zero();
        assert_eq!(
            Curve::new(params).unwrap_err(),
            CurveError::InvalidParams("curve is singular")
        );
    }

    #[test]
    fn test_decompress_generator() {
        let curve = secp256k1();
        let g = curve.generator();
        let odd = g.y.bit(0);

        assert_eq!(curve.decompress(&g.x, odd).as_ref(), Some(g));
        let other = curve.decompress(&g.x, !odd).unwrap();
        assert_eq!(other.y, curve.base_field().neg(&g.y));
    }

    #[test]
    fn test_decompress_rejects_out_of_range() {
        let curve = secp256k1();
        assert!(curve.decompress(curve.base_field().modulus(), false).is_none());
    }
}
