//! Linear-congruential generator used to seed the nonce chain.
//!
//! The generator is not cryptographically secure. Its output is only ever
//! one input to the HMAC chain in [`nonce`](crate::nonce), never a nonce by
//! itself.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::RngCore;

use crate::errors::EcdsaError;

const MULTIPLIER: u64 = 0x12b9_b0a5;
const INCREMENT: u64 = 0x1b0c_88a5;
const MODULUS: u64 = 1 << 31;
const SEED_MASK: u64 = 0x3_6e21_6d71;

/// LCG with `s' = (c1 * s + c2) mod 2^31` and lock-free shared state.
///
/// Concurrent callers race on a compare-and-swap. A lost update repeats or
/// skips a step of the sequence but never tears the state.
#[derive(Debug)]
pub struct Lcg {
    state: AtomicU64,
}

impl Lcg {
    /// Seeds the generator from the system clock.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(nanos & SEED_MASK)
    }

    /// Seeds the generator with a fixed value, for reproducible streams.
    pub fn from_seed(seed: u64) -> Self {
        Lcg {
            state: AtomicU64::new(seed),
        }
    }

    fn step(&self) -> f64 {
        let old = self.state.load(Ordering::Relaxed);
        let new = (MULTIPLIER.wrapping_mul(old).wrapping_add(INCREMENT) & i64::MAX as u64) % MODULUS;
        let _ = self
            .state
            .compare_exchange(old, new, Ordering::Relaxed, Ordering::Relaxed);
        new as f64 / MODULUS as f64
    }

    /// A float in `[0, 1)`.
    #[inline]
    pub fn random(&self) -> f64 {
        self.step()
    }

    /// An integer in `[0, bound)`.
    pub fn next_int(&self, bound: u32) -> Result<u32, EcdsaError> {
        if bound == 0 {
            return Err(EcdsaError::InvalidBound);
        }
        Ok((self.step() * bound as f64) as u32)
    }

    /// `len` pseudo-random bytes.
    pub fn random_bytes(&self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.fill(&mut out);
        out
    }

    fn fill(&self, dest: &mut [u8]) {
        for b in dest {
            *b = (self.step() * 256.0) as u8;
        }
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for &Lcg {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill(&mut buf);
        u32::from_be_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill(&mut buf);
        u64::from_be_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        (&*self).next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        (&*self).next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_first_step_from_zero() {
        let rng = Lcg::from_seed(0);
        assert_eq!(rng.random(), INCREMENT as f64 / MODULUS as f64);

        let rng = Lcg::from_seed(0);
        assert_eq!(rng.next_int(256).unwrap(), 54);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let a = Lcg::from_seed(0x1234_5678);
        let b = Lcg::from_seed(0x1234_5678);
        assert_eq!(a.random_bytes(64), b.random_bytes(64));
    }

    #[test]
    fn test_stream_advances() {
        let rng = Lcg::from_seed(7);
        let first = rng.random_bytes(32);
        let second = rng.random_bytes(32);
        assert_ne!(first, second);
    }

    #[test]
    fn test_next_int_bounds() {
        let rng = Lcg::from_seed(99);
        assert_eq!(rng.next_int(0), Err(EcdsaError::InvalidBound));
        for _ in 0..1000 {
            assert!(rng.next_int(10).unwrap() < 10);
            assert_eq!(rng.next_int(1).unwrap(), 0);
        }
    }

    #[test]
    fn test_random_in_unit_interval() {
        let rng = Lcg::new();
        for _ in 0..1000 {
            let x = rng.random();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_rng_core_matches_random_bytes() {
        let a = Lcg::from_seed(5);
        let b = Lcg::from_seed(5);
        let mut buf = [0u8; 16];
        (&a).fill_bytes(&mut buf);
        assert_eq!(buf.to_vec(), b.random_bytes(16));
    }

    #[test]
    fn test_concurrent_use_keeps_state_in_range() {
        let rng = Arc::new(Lcg::from_seed(3));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let rng = Arc::clone(&rng);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        let x = rng.random();
                        assert!((0.0..1.0).contains(&x));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread panicked");
        }
        assert!(rng.state.load(Ordering::Relaxed) < MODULUS);
    }
}
