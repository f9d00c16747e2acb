//! # strata-table
//!
//! Interning table for canonical simplices.
//!
//! A [`SimplexTable`] maps vertex-set identity to one canonical
//! [`Simplex`](strata_simplex::Simplex) instance, so that every
//! structurally equal simplex circulating through a computation shares a
//! single filtration index. The reduction algorithm reuses the same
//! structure as its marked set, attaching a reduction chain to an entry
//! at most once per pass.
//!
//! Storage is open addressing with linear probing over a power-of-two
//! slot array, doubling on overflow. There is no deletion.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod table;

pub use table::{SimplexTable, TableError};
