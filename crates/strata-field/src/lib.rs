//! # strata-field
//!
//! Exact modular arithmetic for persistent homology coefficients.
//!
//! All chain coefficients in Strata live in a prime field Z/p with
//! p < 256. The modulus is chosen at runtime, so the field is carried
//! as an explicit [`PrimeField`] value (modulus plus precomputed inverse
//! table) and threaded through every operation that needs it. There is
//! no global field state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod prime;

#[cfg(test)]
mod proptests;

pub use prime::{FieldError, PrimeField};
