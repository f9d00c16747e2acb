//! Basis-tracking persistence.
//!
//! The plain reduction drops unmarked boundary terms, which keeps its
//! chains small but makes them projections rather than literal cycles.
//! This variant reduces full boundaries instead and maintains, next to
//! each reduced boundary `d`, the chain `z` with `boundary(z) = d`.
//! The interval pairing is identical; in exchange every reported
//! generator is a genuine cycle of its class: `d` itself for a finite
//! interval (the cycle that dies), `z` for a semi-infinite one (the
//! cycle created at the birth simplex).

use strata_chain::Chain;
use strata_stream::SimplexStream;
use strata_table::SimplexTable;

use crate::interval::PersistenceInterval;
use crate::reduction::Persistence;

/// A persistence interval with a representative cycle of its class.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotatedInterval {
    interval: PersistenceInterval,
    generator: Chain,
}

impl AnnotatedInterval {
    /// The underlying interval.
    #[must_use]
    pub const fn interval(&self) -> &PersistenceInterval {
        &self.interval
    }

    /// A representative cycle of the class this interval describes.
    #[must_use]
    pub const fn generator(&self) -> &Chain {
        &self.generator
    }
}

impl Persistence {
    /// Computes raw-index intervals annotated with representative
    /// cycles.
    ///
    /// The intervals match [`Persistence::compute_raw_intervals`] on the
    /// same stream; only the bookkeeping differs.
    pub fn compute_annotated_intervals<S: SimplexStream>(
        &self,
        stream: &S,
    ) -> Vec<AnnotatedInterval> {
        // Full-boundary reduction is only sound when simplices are
        // processed in the exact order pivots are compared in, so the
        // stream is buffered and brought into pivot order first. Within
        // a filtration index this is still faces before cofaces.
        let mut ordered: Vec<_> = stream.iter().collect();
        ordered.sort_by(strata_simplex::filtration_cmp);

        // Every simplex seen so far; a pivot's reduced boundary lives in
        // its entry's chain slot.
        let mut seen = SimplexTable::with_capacity(stream.size());
        // Birth cycles of simplices whose boundary reduced to zero.
        let mut births = SimplexTable::with_capacity(stream.size());
        // For each pivot, the chain whose boundary is its stored chain.
        let mut preimages = SimplexTable::new();

        let mut intervals = Vec::new();

        for sigma in ordered {
            seen.put(sigma)
                .expect("stream yields each simplex exactly once");

            // Canonicalize the boundary; by the stream contract every
            // face is already interned, so nothing is dropped.
            let mut d =
                Chain::boundary(&sigma, &self.field).filter(|face| seen.get(face).copied());
            let mut z = Chain::single(sigma, 1, &self.field);

            while let Some(&pivot) = d.max_simplex() {
                let Some(stored) = seen.chain(&pivot) else {
                    break;
                };
                let scalar = self.eliminator(&d, stored);
                let preimage = preimages
                    .chain(&pivot)
                    .expect("every stored chain records its preimage");
                d = d.add(stored, scalar, &self.field);
                z = z.add(preimage, scalar, &self.field);
            }

            match d.max_simplex().copied() {
                None => {
                    // z is now a cycle: the class born at sigma.
                    births.get_interned(sigma);
                    births
                        .attach_chain(&sigma, z)
                        .expect("birth cycle attached once per simplex");
                }
                Some(pivot) => {
                    let death = sigma
                        .filtration_index()
                        .expect("stream simplices carry filtration indices");
                    let birth = pivot
                        .filtration_index()
                        .expect("interned simplices carry filtration indices");
                    let dimension = pivot.dimension();
                    let dying = d.clone();

                    seen.attach_chain(&pivot, d)
                        .expect("a pivot is not yet paired");
                    preimages.get_interned(pivot);
                    preimages
                        .attach_chain(&pivot, z)
                        .expect("preimage attached once per pivot");

                    if birth != death && dimension < self.max_dimension {
                        intervals.push(AnnotatedInterval {
                            interval: PersistenceInterval::finite(dimension, birth, death)
                                .expect("faces enter the filtration no later than cofaces"),
                            generator: dying,
                        });
                    }
                }
            }
        }

        // Unpaired birth simplices carry their cycles to the end.
        for (simplex, cycle) in births.iter() {
            if seen.chain(simplex).is_some() || simplex.dimension() >= self.max_dimension {
                continue;
            }
            let birth = simplex
                .filtration_index()
                .expect("interned simplices carry filtration indices");
            intervals.push(AnnotatedInterval {
                interval: PersistenceInterval::infinite(simplex.dimension(), birth),
                generator: cycle
                    .expect("every birth simplex stored its cycle")
                    .clone(),
            });
        }

        intervals.sort_unstable_by(|a, b| a.interval.cmp(&b.interval));
        intervals
    }
}
