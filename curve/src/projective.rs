//! Jacobian points and the curve's doubling and addition formulas.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::{Affine, Curve, CurveError};

/// Point in Jacobian coordinates `(X : Y : Z)` with `(x, y) = (X/Z^2, Y/Z^3)`.
///
/// The canonical point at infinity is `(0 : 0 : 1)`. Any triple with `Z = 0`
/// or `Y = 0` is also treated as infinity; prime-order curves have no affine
/// point with `y = 0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projective {
    pub x: BigUint,
    pub y: BigUint,
    pub z: BigUint,
}

impl Projective {
    /// Create a new projective point.
    pub fn new(x: BigUint, y: BigUint, z: BigUint) -> Self {
        Projective { x, y, z }
    }

    /// The point at infinity (identity element): (0 : 0 : 1)
    pub fn infinity() -> Self {
        Projective::new(BigUint::zero(), BigUint::zero(), BigUint::one())
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero() || self.y.is_zero()
    }

    /// Convert from affine coordinates.
    pub fn from_affine(point: &Affine) -> Self {
        if point.is_infinity() {
            return Self::infinity();
        }
        Projective::new(point.x.clone(), point.y.clone(), BigUint::one())
    }
}

impl From<&Affine> for Projective {
    fn from(point: &Affine) -> Self {
        Projective::from_affine(point)
    }
}

impl Curve {
    /// Point doubling `2P`.
    pub fn double(&self, p: &Projective) -> Projective {
        if p.is_infinity() {
            return Projective::infinity();
        }
        let f = &self.base;

        let ysq = f.square(&p.y);
        let s = f.mul_small(&f.mul(&ysq, &p.x), 4);
        let z4 = f.square(&f.square(&p.z));
        let m = f.add(
            &f.mul_small(&f.square(&p.x), 3),
            &f.mul(&self.params.a, &z4),
        );

        let nx = f.sub(&f.square(&m), &f.mul_small(&s, 2));
        let ny = f.sub(
            &f.mul(&m, &f.sub(&s, &nx)),
            &f.mul_small(&f.square(&ysq), 8),
        );
        let nz = f.mul_small(&f.mul(&p.y, &p.z), 2);
        Projective::new(nx, ny, nz)
    }

    /// Point addition `P + Q`, falling back to doubling when `P == Q`.
    pub fn add(&self, p: &Projective, q: &Projective) -> Projective {
        if p.is_infinity() {
            return q.clone();
        }
        if q.is_infinity() {
            return p.clone();
        }
        let f = &self.base;

        let pz2 = f.square(&p.z);
        let qz2 = f.square(&q.z);
        let u1 = f.mul(&p.x, &qz2);
        let u2 = f.mul(&q.x, &pz2);
        let s1 = f.mul(&p.y, &f.mul(&qz2, &q.z));
        let s2 = f.mul(&q.y, &f.mul(&pz2, &p.z));

        if u1 == u2 {
            if s1 == s2 {
                return self.double(p);
            }
            // Q = -P
            return Projective::infinity();
        }

        let h = f.sub(&u2, &u1);
        let r = f.sub(&s2, &s1);
        let h2 = f.square(&h);
        let h3 = f.mul(&h2, &h);
        let u1h2 = f.mul(&u1, &h2);

        let nx = f.sub(&f.sub(&f.square(&r), &h3), &f.mul_small(&u1h2, 2));
        let ny = f.sub(&f.mul(&r, &f.sub(&u1h2, &nx)), &f.mul(&s1, &h3));
        let nz = f.mul(&f.mul(&h, &p.z), &q.z);
        Projective::new(nx, ny, nz)
    }

    /// Negate a point.
    pub fn negate(&self, p: &Projective) -> Projective {
        if p.is_infinity() {
            return Projective::infinity();
        }
        Projective::new(p.x.clone(), self.base.neg(&p.y), p.z.clone())
    }

    /// Convert to affine coordinates. Fails for the point at infinity.
    pub fn to_affine(&self, p: &Projective) -> Result<Affine, CurveError> {
        if p.is_infinity() {
            return Err(CurveError::PointAtInfinity);
        }
        let f = &self.base;

        let z_inv = f.inv(&p.z);
        let z_inv2 = f.square(&z_inv);
        let x = f.mul(&p.x, &z_inv2);
        let y = f.mul(&p.y, &f.mul(&z_inv2, &z_inv));
        Ok(Affine::new(x, y))
    }

    /// Whether two Jacobian triples represent the same point.
    pub fn same_point(&self, p: &Projective, q: &Projective) -> bool {
        match (p.is_infinity(), q.is_infinity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        let f = &self.base;

        let pz2 = f.square(&p.z);
        let qz2 = f.square(&q.z);
        f.mul(&p.x, &qz2) == f.mul(&q.x, &pz2)
            && f.mul(&p.y, &f.mul(&qz2, &q.z)) == f.mul(&q.y, &f.mul(&pz2, &p.z))
    }
}
