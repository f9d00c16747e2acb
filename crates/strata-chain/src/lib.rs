//! # strata-chain
//!
//! Sparse formal sums of simplices over a prime field.
//!
//! A [`Chain`] is the fundamental algebraic value of the persistence
//! engine: a sorted sparse vector of (simplex, coefficient) terms with
//! all coefficients in `[1, p-1]`. Addition is a single merge pass over
//! two sorted runs; the boundary operator produces the alternating sum
//! of a simplex's codimension-1 faces through the same merge path.
//!
//! The field is passed explicitly to every operation that combines
//! coefficients; a chain does not remember which modulus produced it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chain;

#[cfg(test)]
mod proptests;

pub use chain::Chain;
