//! Sizes and offsets of the wire formats.

use curve::{COORDINATE_SIZE, POINT_SIZE};

/// Size of a serialized private signing key in bytes.
pub const SK_SIZE: usize = COORDINATE_SIZE;

/// Size of a serialized public verifying key in bytes.
///
/// Uncompressed `x || y`, each coordinate big-endian and zero-padded to 32
/// bytes, with no prefix byte.
pub const PK_SIZE: usize = POINT_SIZE;

/// Size of the message digest that is signed.
pub const DIGEST_SIZE: usize = 32;

/// Length of a signature in hex characters.
///
/// A signature consists of:
/// - r (64 hex characters)
/// - s (64 hex characters)
/// - the recovery byte (2 hex characters)
/// Total: 130
pub const SIG_HEX_LEN: usize = 130;

/// Hex characters per signature scalar.
pub(crate) const SCALAR_HEX_LEN: usize = 64;

/// Added to the recovery byte to form the legacy `v` value.
pub(crate) const RECOVERY_OFFSET: u32 = 27;

/// Largest accepted `v` value.
pub(crate) const RECOVERY_MAX: u32 = 34;
