use num_bigint::{BigInt, BigUint, ToBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// `gcd(a, 0) == a` by convention.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidian algorithm. Taken directly from wikipedia.
///
/// Returns `(g, x, y)` such that `g = a*x + b*y`. For `a = 0` this
/// degenerates to `(b, 0, 1)`.
#[allow(clippy::many_single_char_names)]
pub fn egcd(a: &BigUint, b: &BigUint) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.to_bigint().unwrap(), b.to_bigint().unwrap());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let temp = r.clone();
        r = old_r - &q * r;
        old_r = temp;

        let temp = s.clone();
        s = old_s - &q * s;
        old_s = temp;

        let temp = t.clone();
        t = old_t - q * t;
        old_t = temp;
    }
    (old_r, old_s, old_t)
}

/// Modulo inverse. Taken directly from wikipedia. Returns None if inverse
/// doesn't exist, i.e. when `gcd(a, n) != 1`. The result is normalized
/// into `[0, n)`.
#[allow(clippy::many_single_char_names)]
pub fn invmod(a: &BigUint, n: &BigUint) -> Option<BigUint> {
    let (gcd, inverse, _) = egcd(a, n);
    if gcd == One::one() {
        let res = inverse.mod_floor(&n.to_bigint().unwrap());
        Some(res.to_biguint().unwrap())
    } else {
        None
    }
}
