//! HMAC-SHA-256 (RFC 2104) built directly on the SHA-256 compression function.
//!
//! The key is padded to one 64-byte block and XORed with the inner and outer
//! pads through precomputed 256-entry tables.

use sha2::{Digest, Sha256};

/// SHA-256 block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// HMAC-SHA-256 output size in bytes.
pub const OUTPUT_SIZE: usize = 32;

const IPAD: [u8; 256] = xor_table(0x36);
const OPAD: [u8; 256] = xor_table(0x5c);

const fn xor_table(pad: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = (i as u8) ^ pad;
        i += 1;
    }
    table
}

fn translate(block: &[u8; BLOCK_SIZE], table: &[u8; 256]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for (o, &b) in out.iter_mut().zip(block) {
        *o = table[b as usize];
    }
    out
}

/// Keys longer than a block are hashed first; shorter keys are zero-padded.
fn key_block(key: &[u8]) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    if key.len() > BLOCK_SIZE {
        block[..OUTPUT_SIZE].copy_from_slice(&Sha256::digest(key));
    } else {
        block[..key.len()].copy_from_slice(key);
    }
    block
}

/// `HMAC-SHA-256(key, message)`.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; OUTPUT_SIZE] {
    hmac_sha256_parts(key, &[message])
}

/// HMAC over the concatenation of `parts`, without building the concatenation.
pub fn hmac_sha256_parts(key: &[u8], parts: &[&[u8]]) -> [u8; OUTPUT_SIZE] {
    let block = key_block(key);

    let mut inner = Sha256::new();
    inner.update(translate(&block, &IPAD));
    for part in parts {
        inner.update(part);
    }

    let mut outer = Sha256::new();
    outer.update(translate(&block, &OPAD));
    outer.update(inner.finalize());

    let mut out = [0u8; OUTPUT_SIZE];
    out.copy_from_slice(&outer.finalize());
    out
}
