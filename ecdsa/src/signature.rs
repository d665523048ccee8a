//! The ECDSA signature type and its 130-character hex wire format.

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use curve::codec::hex_to_uint;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::constants::{SCALAR_HEX_LEN, SIG_HEX_LEN};
use crate::errors::EcdsaError;

/// An ECDSA signature `(r, s)` with the bit needed for public key recovery.
///
/// # Structure
///
/// `r` is the affine x-coordinate of `k * G` as a field element (not reduced
/// mod n), `s` is in low form (`2s < n`), and `recovery_id` holds the parity of
/// the y-coordinate of the point that matches this `(r, s)`.
///
/// The wire format is `r(64) || s(64) || recovery_id(2)`, lowercase hex, no
/// prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub r: BigUint,
    pub s: BigUint,
    pub recovery_id: u8,
}

impl Signature {
    /// Lowercase hex encoding, always [`SIG_HEX_LEN`] characters.
    pub fn to_hex(&self) -> String {
        format!("{:064x}{:064x}{:02x}", self.r, self.s, self.recovery_id)
    }

    /// Parses the 130-character hex wire format.
    pub fn from_hex(sig: &str) -> Result<Self, EcdsaError> {
        if sig.len() != SIG_HEX_LEN || !sig.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(EcdsaError::InvalidSignatureFormat(sig.to_owned()));
        }
        let (r, rest) = sig.split_at(SCALAR_HEX_LEN);
        let (s, v) = rest.split_at(SCALAR_HEX_LEN);

        let recovery_id = u8::from_str_radix(v, 16)
            .map_err(|_| EcdsaError::InvalidSignatureFormat(sig.to_owned()))?;
        Ok(Signature {
            r: hex_to_uint(r)?,
            s: hex_to_uint(s)?,
            recovery_id,
        })
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Signature {
    type Err = EcdsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signature::from_hex(s)
    }
}
