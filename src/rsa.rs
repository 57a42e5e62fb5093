//! Textbook RSA: key generation plus raw modular-exponentiation
//! encryption with no padding layer. Ciphertexts are deterministic given
//! the message and the key, so none of the usual security notions hold;
//! the point is to reproduce the classic algorithm faithfully, not to
//! protect data.

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, error};

use crate::encoding::{self, DecodeError};
use crate::{algo, prime::gen};

/// Smallest accepted key size. Anything below this cannot split into two
/// multi-bit primes.
const MIN_KEY_SIZE: u64 = 8;

/// Default exponent for RSA keys
const EXP: u64 = 65537;

#[derive(Debug, Error)]
pub enum RsaError {
    #[error("message is too large for the modulus")]
    MsgTooLarge,
}

#[derive(Debug, Error)]
pub enum RsaGenError {
    #[error("key size must be at least {MIN_KEY_SIZE} bits")]
    KeyTooSmall,

    #[error("key size must be an even number of bits")]
    KeyNotEven,

    #[error("public exponent has no inverse modulo the totient")]
    NoInverse,
}

/// Rsa private key
pub struct RsaPrivate {
    d: BigUint,
    n: BigUint,
}

/// Rsa public key
pub struct RsaPublic {
    e: BigUint,
    n: BigUint,
}

impl RsaPrivate {
    pub fn new(d: BigUint, n: BigUint) -> Self {
        Self { d, n }
    }

    /// Raw rsa decryption: `cipher^d mod n`.
    ///
    /// Input outside `[0, n)` is not rejected; it is reduced by the
    /// modular arithmetic like any other value. Well-formed ciphertext
    /// never leaves that range.
    pub fn decrypt(&self, cipher: &BigUint) -> BigUint {
        cipher.modpow(&self.d, &self.n)
    }

    /// Decrypts and decodes the result as utf-8 text. Fails when the
    /// recovered bytes are not valid utf-8, which is what both a wrong
    /// key and a corrupted ciphertext look like.
    pub fn decrypt_text(&self, cipher: &BigUint) -> Result<String, DecodeError> {
        encoding::int_to_text(&self.decrypt(cipher))
    }

    /// Decrypts a hex-encoded ciphertext and returns the recovered bytes
    /// as hex. Turning that hex back into text is the caller's final step.
    pub fn decrypt_from_hex(&self, cipher_hex: &str) -> Result<String, DecodeError> {
        let cipher = encoding::hex_to_int(cipher_hex)?;
        Ok(encoding::int_to_hex(&self.decrypt(&cipher)))
    }

    /// Get a reference to the rsa private's n.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Get a reference to the rsa private's d.
    pub fn d(&self) -> &BigUint {
        &self.d
    }
}

impl RsaPublic {
    pub fn new(e: BigUint, n: BigUint) -> Self {
        Self { e, n }
    }

    /// Raw rsa encryption: `msg^e mod n`. The message must be a natural
    /// number below the modulus.
    pub fn encrypt(&self, msg: &BigUint) -> Result<BigUint, RsaError> {
        if msg >= &self.n {
            return Err(RsaError::MsgTooLarge);
        }
        Ok(msg.modpow(&self.e, &self.n))
    }

    /// Encrypts utf-8 text interpreted as a big-endian integer.
    pub fn encrypt_text(&self, text: &str) -> Result<BigUint, RsaError> {
        self.encrypt(&encoding::text_to_int(text))
    }

    /// Encrypts utf-8 text and returns the ciphertext integer as hex.
    pub fn encrypt_to_hex(&self, text: &str) -> Result<String, RsaError> {
        Ok(encoding::int_to_hex(&self.encrypt_text(text)?))
    }

    /// Get a reference to the rsa public's e.
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Get a reference to the rsa public's n.
    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

/// Generates an RSA key pair of `size` bits using the thread local rng.
pub fn generate_rsa_pair(size: u64) -> Result<(RsaPublic, RsaPrivate), RsaGenError> {
    generate_rsa_pair_with(rand::thread_rng(), size)
}

/// Generates an RSA key pair of `size` bits.
///
/// Two distinct primes of `size / 2` bits each make the modulus; the
/// public exponent starts at 65537 and falls back to uniform draws from
/// `[2, totient)` when 65537 shares a factor with the totient. The primes
/// are dropped once the private exponent is derived.
#[allow(clippy::many_single_char_names)]
pub fn generate_rsa_pair_with(
    mut rng: impl Rng,
    size: u64,
) -> Result<(RsaPublic, RsaPrivate), RsaGenError> {
    if size < MIN_KEY_SIZE {
        return Err(RsaGenError::KeyTooSmall);
    }
    if size % 2 != 0 {
        return Err(RsaGenError::KeyNotEven);
    }

    let (p, q) = gen::new_prime_pair_with(&mut rng, size / 2).expect("size split is checked");
    let n = &p * &q;
    let totient = (p - 1u32) * (q - 1u32);

    let two = BigUint::from(2u32);
    let mut e = BigUint::from(EXP);
    while algo::gcd(&e, &totient) != One::one() {
        debug!(exponent = %e, "exponent shares a factor with the totient, redrawing");
        e = rng.gen_biguint_range(&two, &totient);
    }

    let d = match algo::invmod(&e, &totient) {
        Some(d) => d,
        None => {
            // cannot happen once gcd(e, totient) == 1 held above
            error!(%e, "no modular inverse for a coprime exponent");
            return Err(RsaGenError::NoInverse);
        }
    };

    let public = RsaPublic { e, n: n.clone() };
    let private = RsaPrivate { d, n };
    Ok((public, private))
}
