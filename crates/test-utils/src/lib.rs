//! Generators and fixtures shared by tests across the workspace.

use arbitrary::{Arbitrary, Unstructured};
use rand_core::{CryptoRngCore, OsRng};

pub mod fixtures;

/// The default buffer size for the `ArbitraryGenerator`.
const ARB_GEN_LEN: usize = 16_384;

/// Produces random values of any [`Arbitrary`] type from a reusable byte
/// buffer.
#[derive(Debug)]
pub struct ArbitraryGenerator {
    buf: Vec<u8>,
}

impl Default for ArbitraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbitraryGenerator {
    pub fn new() -> Self {
        Self::new_with_size(ARB_GEN_LEN)
    }

    /// Uses a buffer of `s` bytes. Types with large variable-length fields
    /// need a bigger buffer to come out non-empty.
    pub fn new_with_size(s: usize) -> Self {
        Self { buf: vec![0u8; s] }
    }

    /// Generates a value using [`OsRng`].
    pub fn generate<T>(&mut self) -> T
    where
        T: for<'a> Arbitrary<'a>,
    {
        self.generate_with_rng::<T, OsRng>(&mut OsRng)
    }

    /// Generates a value from bytes drawn from `rng`.
    ///
    /// # Panics
    ///
    /// If `T` cannot be built from a few refills of the buffer.
    pub fn generate_with_rng<T, R>(&mut self, rng: &mut R) -> T
    where
        T: for<'a> Arbitrary<'a>,
        R: CryptoRngCore,
    {
        const MAX_ATTEMPTS: usize = 8;
        let mut last_error = None;

        for _ in 0..MAX_ATTEMPTS {
            rng.fill_bytes(&mut self.buf);
            let mut u = Unstructured::new(&self.buf);
            match T::arbitrary(&mut u) {
                Ok(value) => return value,
                Err(err) => last_error = Some(err),
            }
        }

        let error_msg = last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        panic!("failed to generate arbitrary instance: {error_msg}");
    }
}

#[cfg(test)]
mod tests {
    use lucid_identifiers::{Buf32, Identity};

    use super::*;

    #[test]
    fn test_generates_distinct_values() {
        let mut arb = ArbitraryGenerator::new();
        let a: Buf32 = arb.generate();
        let b: Buf32 = arb.generate();
        assert_ne!(a, b);

        let _: Identity = arb.generate();
    }
}
