//! The streaming boundary reduction.
//!
//! One pass over the stream, one state machine per simplex. The marked
//! table plays two roles at once: it canonicalizes boundary faces (so
//! every term of a reduced chain carries its true filtration index) and
//! it records which simplices gave birth to a homology class. A pivot's
//! reduction chain lives in the table entry's write-once slot.

use log::debug;

use strata_chain::Chain;
use strata_field::{FieldError, PrimeField};
use strata_simplex::Simplex;
use strata_stream::SimplexStream;
use strata_table::SimplexTable;

use crate::interval::{Barcode, PersistenceInterval};

/// The persistence algorithm: a field characteristic and a truncation
/// dimension.
///
/// Intervals are only emitted for dimensions strictly below
/// `max_dimension`. Features of the truncation dimension itself bound
/// nothing observable within the given complex, so a stream whose top
/// simplices have the truncation dimension reports nothing about them;
/// pass a larger `max_dimension` to read them as genuine cycles.
pub struct Persistence {
    pub(crate) field: PrimeField,
    pub(crate) max_dimension: usize,
}

impl Persistence {
    /// Creates the algorithm for a prime characteristic and a truncation
    /// dimension.
    ///
    /// # Errors
    ///
    /// Rejects a characteristic that is out of range or not prime,
    /// before any arithmetic table is built.
    pub fn new(characteristic: u32, max_dimension: usize) -> Result<Self, FieldError> {
        Ok(Self {
            field: PrimeField::new(characteristic)?,
            max_dimension,
        })
    }

    /// The coefficient field.
    #[must_use]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// The truncation dimension.
    #[must_use]
    pub fn max_dimension(&self) -> usize {
        self.max_dimension
    }

    /// Computes persistence intervals over raw filtration indices.
    ///
    /// The stream contract is trusted here; run
    /// [`strata_stream::verify`] first to audit an untrusted producer.
    pub fn compute_raw_intervals<S: SimplexStream>(&self, stream: &S) -> Vec<PersistenceInterval> {
        debug!(
            "reducing stream of {} simplices over Z/{}",
            stream.size(),
            self.field.modulus()
        );

        let mut marked = SimplexTable::with_capacity(stream.size());
        let mut intervals = Vec::new();

        for sigma in stream.iter() {
            let reduced = self.reduce_boundary(&sigma, &marked);
            match reduced.max_simplex().copied() {
                None => {
                    // The boundary vanished: sigma gives birth to a
                    // class, reported at the end if nothing pairs it.
                    marked
                        .put(sigma)
                        .expect("stream yields each simplex exactly once");
                }
                Some(pivot) => {
                    let death = sigma
                        .filtration_index()
                        .expect("stream simplices carry filtration indices");
                    let birth = pivot
                        .filtration_index()
                        .expect("marked simplices carry filtration indices");
                    let dimension = pivot.dimension();

                    marked
                        .attach_chain(&pivot, reduced)
                        .expect("a pivot is marked and not yet paired");

                    // Same-index pairs are degenerate and suppressed.
                    if birth != death && dimension < self.max_dimension {
                        intervals.push(
                            PersistenceInterval::finite(dimension, birth, death)
                                .expect("faces enter the filtration no later than cofaces"),
                        );
                    }
                }
            }
        }

        // Every marked simplex that never became a pivot's pair carries
        // a class to the end of the filtration.
        for (simplex, chain) in marked.iter() {
            if chain.is_none() && simplex.dimension() < self.max_dimension {
                let birth = simplex
                    .filtration_index()
                    .expect("marked simplices carry filtration indices");
                intervals.push(PersistenceInterval::infinite(simplex.dimension(), birth));
            }
        }

        intervals.sort_unstable();
        debug!("reduction finished with {} intervals", intervals.len());
        intervals
    }

    /// Computes intervals converted through the stream's filtration
    /// values.
    pub fn compute_intervals<S: SimplexStream>(&self, stream: &S) -> Barcode {
        let raw = self.compute_raw_intervals(stream);
        Barcode::from_raw(&raw, |findex| stream.filtration_value(findex))
    }

    /// Reduces the boundary of `sigma` against the chains attached to
    /// marked simplices, stopping at the first chainless pivot.
    pub(crate) fn reduce_boundary(&self, sigma: &Simplex, marked: &SimplexTable) -> Chain {
        let mut d =
            Chain::boundary(sigma, &self.field).filter(|face| marked.get(face).copied());

        while let Some(&pivot) = d.max_simplex() {
            let Some(stored) = marked.chain(&pivot) else {
                break;
            };
            d = d.add(stored, self.eliminator(&d, stored), &self.field);
        }
        d
    }

    /// The scalar that cancels `d`'s pivot against `stored`'s:
    /// `-(max d) / (max stored)`.
    pub(crate) fn eliminator(&self, d: &Chain, stored: &Chain) -> u32 {
        let c = self.field.div(
            d.max_coefficient().expect("non-zero chain"),
            stored
                .max_coefficient()
                .expect("a stored pivot chain is never zero"),
        );
        self.field.neg(c)
    }
}
