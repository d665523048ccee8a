//! Derivation of the per-signature nonce `k`.
//!
//! Two rounds of an HMAC-DRBG style update mix the private key and digest
//! into a chain seeded with 64 fresh random bytes:
//!
//! ```text
//! k1 = HMAC(k0, v0 || 0x00 || sk || digest)
//! v1 = HMAC(k1, v0)
//! k2 = HMAC(k1, v1 || 0x01 || sk || digest)
//! v2 = HMAC(k2, v1)
//! k  = HMAC(k2, v2)
//! ```
//!
//! Because `v0` and `k0` are random, signing the same digest twice gives two
//! different signatures. This is not the deterministic RFC 6979 scheme.

use num_bigint::BigUint;
use rand::RngCore;

use crate::keyed_hash::{hmac_sha256, hmac_sha256_parts, OUTPUT_SIZE};

/// Draws `v0` then `k0` from `rng` and runs the chain.
pub(crate) fn derive_nonce<R: RngCore + ?Sized>(
    rng: &mut R,
    private_key: &[u8],
    digest: &[u8],
) -> BigUint {
    let mut v0 = [0u8; OUTPUT_SIZE];
    rng.fill_bytes(&mut v0);
    let mut k0 = [0u8; OUTPUT_SIZE];
    rng.fill_bytes(&mut k0);

    nonce_chain(&k0, &v0, private_key, digest)
}

pub(crate) fn nonce_chain(k0: &[u8], v0: &[u8], private_key: &[u8], digest: &[u8]) -> BigUint {
    let k1 = hmac_sha256_parts(k0, &[v0, &[0x00], private_key, digest]);
    let v1 = hmac_sha256(&k1, v0);
    let k2 = hmac_sha256_parts(&k1, &[&v1, &[0x01], private_key, digest]);
    let v2 = hmac_sha256(&k2, &v1);

    BigUint::from_bytes_be(&hmac_sha256(&k2, &v2))
}
