/// Module dedicated to the number-theoretic algorithms shared by the
/// key generation and primality code
pub mod algo;

/// Module dedicated to the mapping between text, hex and the big-integer
/// domain the cipher operates on
pub mod encoding;

/// Module dedicated to the prime number generation and verification
pub mod prime;

/// Module dedicated to the rsa utils
pub mod rsa;
