use num_bigint::{BigUint, RandBigInt};
use rand::Rng;
use thiserror::Error;

use crate::prime::ver;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrimeGenError {
    #[error("prime bit length must be greater than 1")]
    BitLengthTooSmall,
}

/// Generates a probable prime of exactly `bits` bits using the thread
/// local rng.
pub fn new_prime(bits: u64) -> Result<BigUint, PrimeGenError> {
    new_prime_with(rand::thread_rng(), bits)
}

/// Generates a probable prime of exactly `bits` bits.
///
/// Candidates are drawn uniformly, then the top bit is forced to pin the
/// length and the bottom bit to make them odd. The first candidate that
/// passes [`ver::miller_rabin`] wins; witnesses come from the same `rng`,
/// so a seeded generator reproduces the same prime.
pub fn new_prime_with(mut rng: impl Rng, bits: u64) -> Result<BigUint, PrimeGenError> {
    if bits <= 1 {
        return Err(PrimeGenError::BitLengthTooSmall);
    }
    loop {
        let mut candidate = rng.gen_biguint(bits);
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(0, true);
        if ver::miller_rabin(&mut rng, &candidate, ver::MILLER_RABIN_ROUNDS) {
            return Ok(candidate);
        }
    }
}

/// Generates a pair of distinct primes of `bits` bits each using the
/// thread local rng.
pub fn new_prime_pair(bits: u64) -> Result<(BigUint, BigUint), PrimeGenError> {
    new_prime_pair_with(rand::thread_rng(), bits)
}

/// Generates a pair of distinct primes of `bits` bits each, redrawing the
/// second until it differs from the first. A collision is astronomically
/// unlikely at realistic sizes, so the retry is unbounded.
pub fn new_prime_pair_with(
    mut rng: impl Rng,
    bits: u64,
) -> Result<(BigUint, BigUint), PrimeGenError> {
    let p = new_prime_with(&mut rng, bits)?;
    loop {
        let q = new_prime_with(&mut rng, bits)?;
        if p != q {
            break Ok((p, q));
        }
    }
}
