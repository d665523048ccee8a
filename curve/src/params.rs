//! Curve constants for short-Weierstrass curves `y^2 = x^3 + a*x + b (mod p)`.

use hex_literal::hex;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::codec::hex_to_uint;
use crate::CurveError;

/// The six constants that define a prime-order curve and its base point.
///
/// `n` must be the prime order of `G = (gx, gy)` and `G` must lie on the
/// curve. Both are checked when the parameters are turned into a
/// [`Curve`](crate::Curve). Negative coefficients are given as their
/// representative mod `p`, e.g. `a = p - 3` for the NIST curves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Field prime.
    pub p: BigUint,
    /// Prime order of the base point.
    pub n: BigUint,
    /// Coefficient `a`.
    pub a: BigUint,
    /// Coefficient `b`.
    pub b: BigUint,
    /// Base point x-coordinate.
    pub gx: BigUint,
    /// Base point y-coordinate.
    pub gy: BigUint,
}

impl CurveParams {
    /// Parses the six constants from hex strings (optional `0x` prefix).
    pub fn from_hex(
        p: &str,
        n: &str,
        a: &str,
        b: &str,
        gx: &str,
        gy: &str,
    ) -> Result<Self, CurveError> {
        Ok(CurveParams {
            p: hex_to_uint(p)?,
            n: hex_to_uint(n)?,
            a: hex_to_uint(a)?,
            b: hex_to_uint(b)?,
            gx: hex_to_uint(gx)?,
            gy: hex_to_uint(gy)?,
        })
    }

    /// secp256k1 (SEC 2), `y^2 = x^3 + 7`.
    pub fn secp256k1() -> Self {
        CurveParams {
            p: BigUint::from_bytes_be(&hex!(
                "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"
            )),
            n: BigUint::from_bytes_be(&hex!(
                "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"
            )),
            a: BigUint::from(0u32),
            b: BigUint::from(7u32),
            gx: BigUint::from_bytes_be(&hex!(
                "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"
            )),
            gy: BigUint::from_bytes_be(&hex!(
                "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"
            )),
        }
    }

    /// NIST P-256 (secp256r1), `y^2 = x^3 - 3x + b`.
    pub fn secp256r1() -> Self {
        CurveParams {
            p: BigUint::from_bytes_be(&hex!(
                "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF"
            )),
            n: BigUint::from_bytes_be(&hex!(
                "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551"
            )),
            a: BigUint::from_bytes_be(&hex!(
                "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC"
            )),
            b: BigUint::from_bytes_be(&hex!(
                "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B"
            )),
            gx: BigUint::from_bytes_be(&hex!(
                "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"
            )),
            gy: BigUint::from_bytes_be(&hex!(
                "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"
            )),
        }
    }
}
