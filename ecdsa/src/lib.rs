//! ECDSA signing, verification and public key recovery.
//!
//! This library implements ECDSA over any curve accepted by [`curve::Curve`]:
//! - Nonces come from an HMAC-SHA-256 chain over the private key, the digest
//!   and 64 fresh bytes from a shared [`Lcg`]
//! - Signatures are low-s and carry a recovery byte
//! - Keys and signatures travel as fixed-width bytes and hex
//!
//! # Example
//!
//! ```
//! use ecdsa::Ecdsa;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let ecdsa = Ecdsa::secp256k1().expect("valid curve");
//! let mut rng = StdRng::seed_from_u64(7);
//! let sk = ecdsa.generate_private_key(&mut rng).expect("key");
//! let pk = ecdsa.private_key_to_public_key(&sk).expect("public key");
//!
//! let digest = [0xab; 32];
//! let sig = ecdsa.sign(&sk, &digest).expect("sign");
//! assert_eq!(sig.len(), ecdsa::SIG_HEX_LEN);
//!
//! assert!(ecdsa.verify(&pk, &digest, &sig).expect("verify"));
//! assert_eq!(ecdsa.recover_to_public_key(&digest, &sig).expect("recover"), pk);
//! ```
//!
//! # Security Considerations
//!
//! - Arithmetic is variable-time and leaks timing information about scalars
//! - Signing is randomized: the same key and digest give a new signature
//!   every call
//! - The digest must already be the 32-byte hash of the message

mod constants;
mod engine;
mod errors;
mod keyed_hash;
mod keys;
mod nonce;
mod random;
mod recovery;
mod signature;


pub use constants::{DIGEST_SIZE, PK_SIZE, SIG_HEX_LEN, SK_SIZE};
pub use engine::Ecdsa;
pub use errors::EcdsaError;
pub use keyed_hash::{hmac_sha256, BLOCK_SIZE, OUTPUT_SIZE};
pub use keys::{SigningKey, VerifyingKey};
pub use random::Lcg;
pub use signature::Signature;
