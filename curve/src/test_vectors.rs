//! Known points shared by the unit tests.

use hex_literal::hex;
use num_bigint::BigUint;

use crate::{Affine, Curve, CurveParams};

pub(crate) fn secp256k1() -> Curve {
    Curve::new(CurveParams::secp256k1()).expect("secp256k1 parameters are valid")
}

pub(crate) fn secp256r1() -> Curve {
    Curve::new(CurveParams::secp256r1()).expect("secp256r1 parameters are valid")
}

pub(crate) fn secp256k1_double_g() -> Affine {
    Affine::new(
        BigUint::from_bytes_be(&hex!(
            "C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5"
        )),
        BigUint::from_bytes_be(&hex!(
            "1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A"
        )),
    )
}

pub(crate) fn secp256k1_triple_g() -> Affine {
    Affine::new(
        BigUint::from_bytes_be(&hex!(
            "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9"
        )),
        BigUint::from_bytes_be(&hex!(
            "388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672"
        )),
    )
}

pub(crate) fn secp256r1_double_g() -> Affine {
    Affine::new(
        BigUint::from_bytes_be(&hex!(
            "7CF27B188D034F7E8A52380304B51AC3C08969E277F21B35A60B48FC47669978"
        )),
        BigUint::from_bytes_be(&hex!(
            "07775510DB8ED040293D9AC69F7430DBBA7DADE63CE982299E04B79D227873D1"
        )),
    )
}
