/// Random prime generation
pub mod gen;

/// Probabilistic primality verification
pub mod ver;
