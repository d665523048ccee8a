//! Public key recovery from a signature and the signed digest.
//!
//! `r` is the unreduced x-coordinate of the nonce point `R = k * G`, so `R`
//! is recovered exactly by decompressing `r` with the parity stored in the
//! recovery byte. Then
//!
//! ```text
//! Q = r^-1 * (s * R - z * G)
//! ```
//!
//! Decompression takes square roots as `a^((p+1)/4)`, so recovery is only
//! available on curves with p ≡ 3 (mod 4).

use curve::codec::bytes_to_uint;
use curve::Projective;
use num_traits::Zero;

use crate::constants::{PK_SIZE, RECOVERY_MAX, RECOVERY_OFFSET};
use crate::engine::{check_digest, Ecdsa};
use crate::errors::EcdsaError;
use crate::keys::VerifyingKey;
use crate::signature::Signature;

impl Ecdsa {
    /// Recovers the 64-byte public key that produced `signature` over `digest`.
    pub fn recover_to_public_key(
        &self,
        digest: &[u8],
        signature: &str,
    ) -> Result<[u8; PK_SIZE], EcdsaError> {
        let sig = Signature::from_hex(signature)?;
        Ok(self.recover_prehash(digest, &sig)?.to_bytes())
    }

    pub fn recover_prehash(
        &self,
        digest: &[u8],
        sig: &Signature,
    ) -> Result<VerifyingKey, EcdsaError> {
        check_digest(digest)?;
        let v = u32::from(sig.recovery_id) + RECOVERY_OFFSET;
        if v > RECOVERY_MAX {
            return Err(EcdsaError::InvalidSignature);
        }

        let fr = self.curve.scalar_field();
        let r = fr.reduce(&sig.r);
        if r.is_zero() || fr.reduce(&sig.s).is_zero() {
            return Err(EcdsaError::InvalidSignature);
        }
        if !self.curve.base_field().has_fast_sqrt() {
            return Err(EcdsaError::UnsupportedCurve("recovery needs p ≡ 3 (mod 4)"));
        }

        let y_is_odd = sig.recovery_id & 1 == 1;
        let nonce_point = self
            .curve
            .decompress(&sig.r, y_is_odd)
            .ok_or(EcdsaError::InvalidSignature)?;

        let r_inv = fr.inv(&r);
        let z = bytes_to_uint(digest);
        let u1 = fr.mul(&fr.neg(&z), &r_inv);
        let u2 = fr.mul(&sig.s, &r_inv);

        let point = self.curve.double_scalar_mul_basepoint(
            &u1,
            &u2,
            &Projective::from_affine(&nonce_point),
        )?;
        if point.is_infinity() {
            return Err(EcdsaError::InvalidSignature);
        }
        VerifyingKey::from_point(self.curve.to_affine(&point)?)
    }
}
