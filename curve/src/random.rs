use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;

use crate::Curve;

impl Curve {
    /// Samples a scalar uniformly from `[1, n)` by rejection.
    pub fn random_scalar<R: RngCore + ?Sized>(&self, rng: &mut R) -> BigUint {
        let n = self.order();
        let bits = n.bits() as usize;
        let mut buf = vec![0u8; bits.div_ceil(8)];
        let excess = buf.len() * 8 - bits;

        loop {
            rng.fill_bytes(&mut buf);
            buf[0] &= 0xff >> excess;
            let k = BigUint::from_bytes_be(&buf);
            if !k.is_zero() && &k < n {
                return k;
            }
        }
    }
}
