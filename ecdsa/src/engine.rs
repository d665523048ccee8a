//! The signing engine: sign, verify and public key derivation over one curve.

use std::sync::Arc;

use curve::codec::bytes_to_uint;
use curve::{Curve, CurveParams, Projective};
use num_traits::Zero;
use rand::RngCore;

use crate::constants::{DIGEST_SIZE, PK_SIZE, SK_SIZE};
use crate::errors::EcdsaError;
use crate::keys::{SigningKey, VerifyingKey};
use crate::nonce::derive_nonce;
use crate::random::Lcg;
use crate::signature::Signature;

/// ECDSA over a validated short Weierstrass curve.
///
/// The engine is immutable apart from the shared [`Lcg`] that seeds nonce
/// derivation. Clones share both the curve and the generator, and can be sent
/// to other threads freely.
///
/// # Example
///
/// ```
/// use ecdsa::Ecdsa;
///
/// let ecdsa = Ecdsa::secp256k1().expect("valid curve");
/// let sk = [0x2a; 32];
/// let digest = [0x17; 32];
///
/// let pk = ecdsa.private_key_to_public_key(&sk).expect("valid key");
/// let sig = ecdsa.sign(&sk, &digest).expect("sign");
/// assert!(ecdsa.verify(&pk, &digest, &sig).expect("well-formed input"));
/// ```
#[derive(Clone, Debug)]
pub struct Ecdsa {
    pub(crate) curve: Arc<Curve>,
    rng: Arc<Lcg>,
}

impl Ecdsa {
    /// Validates `params` and seeds a fresh generator from the clock.
    pub fn new(params: CurveParams) -> Result<Self, EcdsaError> {
        Self::with_rng(params, Arc::new(Lcg::new()))
    }

    /// Like [`Ecdsa::new`], sharing an existing generator.
    pub fn with_rng(params: CurveParams, rng: Arc<Lcg>) -> Result<Self, EcdsaError> {
        Ok(Ecdsa {
            curve: Arc::new(Curve::new(params)?),
            rng,
        })
    }

    pub fn secp256k1() -> Result<Self, EcdsaError> {
        Self::new(CurveParams::secp256k1())
    }

    #[inline]
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Draws a private key uniformly from `[1, n)`.
    pub fn generate_private_key<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<[u8; SK_SIZE], EcdsaError> {
        let scalar = self.curve.random_scalar(rng);
        Ok(SigningKey::from_scalar(scalar)?.to_bytes())
    }

    /// Signs a 32-byte digest, returning the 130-character hex signature.
    ///
    /// The nonce chain is seeded from the engine's generator, so two calls
    /// with the same inputs give different signatures.
    pub fn sign(&self, private_key: &[u8], digest: &[u8]) -> Result<String, EcdsaError> {
        let key = SigningKey::from_bytes(&self.curve, private_key)?;
        let mut rng = &*self.rng;
        Ok(self.sign_with_rng(&mut rng, &key, digest)?.to_hex())
    }

    /// Signs a 32-byte digest, seeding the nonce chain from `rng`.
    ///
    /// 1. Derive the nonce `k` from 64 bytes of `rng`, the key and the digest
    /// 2. `(x, y) = k * G`, `r = x`
    /// 3. `s = k^-1 * (z + r * sk) mod n`, replaced by `n - s` if `2s >= n`
    /// 4. `recovery_id = parity(y)`, flipped if step 3 negated `s`
    pub fn sign_with_rng<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        key: &SigningKey,
        digest: &[u8],
    ) -> Result<Signature, EcdsaError> {
        check_digest(digest)?;
        let n = self.curve.order();
        let fr = self.curve.scalar_field();

        let k = derive_nonce(rng, &key.to_bytes(), digest);
        let nonce_point = self.curve.to_affine(&self.curve.mul_generator(&k)?)?;
        let r = nonce_point.x;

        let z = bytes_to_uint(digest);
        let s_raw = fr.mul(&fr.inv(&fr.reduce(&k)), &fr.add(&z, &fr.mul(&r, key.scalar())));

        let flipped = &s_raw << 1 >= *n;
        let s = if flipped { n - &s_raw } else { s_raw };
        let recovery_id = u8::from(nonce_point.y.bit(0) ^ flipped);

        Ok(Signature { r, s, recovery_id })
    }

    /// Checks a hex signature over `digest` against a 64-byte public key.
    ///
    /// Malformed input is an error; a well-formed signature that does not
    /// match returns `Ok(false)`.
    pub fn verify(
        &self,
        public_key: &[u8],
        digest: &[u8],
        signature: &str,
    ) -> Result<bool, EcdsaError> {
        let sig = Signature::from_hex(signature)?;
        if public_key.len() != PK_SIZE {
            return Err(EcdsaError::InvalidPublicKey("expected 64 bytes"));
        }
        check_digest(digest)?;
        let fr = self.curve.scalar_field();
        if fr.reduce(&sig.r).is_zero() || fr.reduce(&sig.s).is_zero() {
            return Ok(false);
        }
        let key = VerifyingKey::from_bytes(&self.curve, public_key)?;
        self.verify_prehash(&key, digest, &sig)
    }

    /// `u1 * G + u2 * pk` with `w = s^-1`, `u1 = z * w`, `u2 = r * w`,
    /// accepted when its affine x equals `r`.
    pub fn verify_prehash(
        &self,
        key: &VerifyingKey,
        digest: &[u8],
        sig: &Signature,
    ) -> Result<bool, EcdsaError> {
        check_digest(digest)?;
        let fr = self.curve.scalar_field();
        let w = fr.inv(&fr.reduce(&sig.s));
        if w.is_zero() {
            return Ok(false);
        }
        let z = bytes_to_uint(digest);
        let u1 = fr.mul(&z, &w);
        let u2 = fr.mul(&sig.r, &w);

        let pk = Projective::from_affine(key.point());
        let point = self.curve.double_scalar_mul_basepoint(&u1, &u2, &pk)?;
        if point.is_infinity() {
            return Ok(false);
        }
        Ok(self.curve.to_affine(&point)?.x == sig.r)
    }

    /// `sk * G`, encoded as `x || y`.
    pub fn private_key_to_public_key(&self, private_key: &[u8]) -> Result<[u8; PK_SIZE], EcdsaError> {
        let key = SigningKey::from_bytes(&self.curve, private_key)?;
        Ok(key.verifying_key(&self.curve)?.to_bytes())
    }
}

pub(crate) fn check_digest(digest: &[u8]) -> Result<(), EcdsaError> {
    if digest.len() != DIGEST_SIZE {
        return Err(EcdsaError::InvalidDigestLength {
            expected: DIGEST_SIZE,
            got: digest.len(),
        });
    }
    Ok(())
}
