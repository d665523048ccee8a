//! Short-Weierstrass elliptic curves over prime fields.
//!
//! This crate provides the curve constants, prime-field arithmetic with an
//! extended-Euclidean inverse, affine and Jacobian points, doubling, addition
//! and scalar multiplication, and the byte/hex codec used for keys and
//! signatures. Any curve `y^2 = x^3 + a*x + b (mod p)` with a prime-order base
//! point and constants of at most 256 bits is supported; secp256k1 and P-256
//! ship as named parameter sets.
//!
//! Arithmetic is variable-time.

mod affine;
pub mod codec;
mod curve;
mod errors;
mod field;
mod generator_table;
mod group;
mod msm;
mod params;
mod projective;
mod random;

#[cfg(test)]
mod test_vectors;

pub use affine::{Affine, COORDINATE_SIZE, POINT_SIZE};
pub use curve::{Curve, MAX_BITS};
pub use errors::CurveError;
pub use field::{mod_inverse, PrimeField};
pub use params::CurveParams;
pub use projective::Projective;
