//! # Strata
//!
//! Streaming persistent homology of filtered simplicial complexes over
//! a prime field.
//!
//! A producer pushes simplices, each tagged with a filtration index,
//! into a [`Stack`](stream::Stack) (or any other
//! [`SimplexStream`](stream::SimplexStream)); the
//! [`Persistence`](persistence::Persistence) algorithm pulls them in
//! filtration order, reduces each boundary against previously seen
//! chains, and emits the persistence intervals of the filtration.
//!
//! ## Quick Start
//!
//! ```
//! use strata::prelude::*;
//!
//! let mut stack = Stack::new(1, 1);
//! for v in 1..=2 {
//!     let vertex = Simplex::vertex(v).unwrap().with_filtration_index(0).unwrap();
//!     stack.push(vertex);
//! }
//! let edge = Simplex::from_vertices(&[1, 2])
//!     .unwrap()
//!     .with_filtration_index(1)
//!     .unwrap();
//! stack.push(edge);
//!
//! let persistence = Persistence::new(2, 1).unwrap();
//! let intervals = persistence.compute_raw_intervals(&stack);
//! assert_eq!(
//!     intervals,
//!     vec![
//!         // One component dies when the edge joins the two vertices;
//!         // the other survives the whole filtration.
//!         PersistenceInterval::finite(0, 0, 1).unwrap(),
//!         PersistenceInterval::infinite(0, 0),
//!     ]
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use strata_chain as chain;
pub use strata_field as field;
pub use strata_persistence as persistence;
pub use strata_simplex as simplex;
pub use strata_stream as stream;
pub use strata_table as table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use strata_chain::Chain;
    pub use strata_field::PrimeField;
    pub use strata_persistence::{
        AnnotatedInterval, Barcode, Persistence, PersistenceInterval, ValueInterval,
    };
    pub use strata_simplex::Simplex;
    pub use strata_stream::{verify, Head, SimplexStream, Stack, Tail};
    pub use strata_table::SimplexTable;
}
