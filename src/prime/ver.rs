use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::Rng;

/// Rounds of witness testing performed by [`is_prime`]. Each round lets a
/// composite slip through with probability at most 1/4, so the overall
/// error is bounded by 4^-5.
pub const MILLER_RABIN_ROUNDS: u32 = 5;

/// Probabilistic primality check with the default round count.
pub fn is_prime(n: &BigUint) -> bool {
    miller_rabin(rand::thread_rng(), n, MILLER_RABIN_ROUNDS)
}

/// Miller-Rabin primality test with `rounds` random witnesses drawn from
/// `rng`.
///
/// Returns `false` as soon as one witness proves `n` composite; returns
/// `true` when every round passes, meaning `n` is prime with error
/// probability at most `4^-rounds`. Usable on arbitrary integers, not just
/// generated candidates.
pub fn miller_rabin(mut rng: impl Rng, n: &BigUint, rounds: u32) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);

    if n < &two {
        return false;
    }
    if *n == two || *n == three {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // n - 1 = d * 2^r with d odd
    let n_minus_one = n - &one;
    let mut d = n_minus_one.clone();
    let mut r = 0u32;
    while d.is_even() {
        d >>= 1;
        r += 1;
    }

    for _ in 0..rounds {
        // witness in [2, n-2]; the range call excludes its upper bound
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..r {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                break;
            }
        }
        if x != n_minus_one {
            return false;
        }
    }
    true
}

/// Checks whether `n` is a safe prime, i.e. both `n` and `(n - 1) / 2`
/// (its Sophie Germain partner) are prime. Not used by the rsa key
/// generation path; handy when a modulus with a large prime subgroup is
/// needed.
pub fn is_safe_prime(n: &BigUint) -> bool {
    is_prime(n) && is_prime(&((n - 1u32) >> 1))
}
