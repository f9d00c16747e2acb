//! Optional stream-contract checker.
//!
//! The reduction algorithm trusts the stream contract for performance;
//! this pass checks it explicitly. Two O(n) scans: the first interns
//! every simplex while checking index presence, monotonicity and
//! uniqueness, the second confirms every boundary face is present with
//! a filtration index no greater than its coface's.

use strata_simplex::Simplex;
use strata_table::SimplexTable;
use thiserror::Error;

use crate::traits::SimplexStream;

/// Contract violations reported by [`verify`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StreamError {
    /// A simplex was yielded without a filtration index.
    #[error("simplex {0} has no filtration index")]
    MissingFiltrationIndex(Simplex),

    /// Filtration indices decreased along the stream.
    #[error("simplex {simplex} at index {findex} follows index {previous}")]
    DecreasingFiltrationIndex {
        /// The offending simplex.
        simplex: Simplex,
        /// Its filtration index.
        findex: u32,
        /// The larger index seen before it.
        previous: u32,
    },

    /// The same vertex set was yielded twice.
    #[error("simplex {0} appears more than once")]
    DuplicateSimplex(Simplex),

    /// A boundary face never appears in the stream.
    #[error("face {face} of {simplex} is missing from the stream")]
    MissingFace {
        /// The simplex whose face is absent.
        simplex: Simplex,
        /// The absent face.
        face: Simplex,
    },

    /// A boundary face enters the filtration after its coface.
    #[error("face {face} enters the filtration after its coface {simplex}")]
    FaceAfterCoface {
        /// The offending coface.
        simplex: Simplex,
        /// The face with the larger filtration index.
        face: Simplex,
    },
}

/// Checks the full stream contract in O(stream size).
///
/// # Errors
///
/// Returns the first [`StreamError`] encountered, in scan order.
pub fn verify<S: SimplexStream>(stream: &S) -> Result<(), StreamError> {
    let mut table = SimplexTable::with_capacity(stream.size());
    let mut previous: Option<u32> = None;

    for simplex in stream.iter() {
        let findex = simplex
            .filtration_index()
            .ok_or(StreamError::MissingFiltrationIndex(simplex))?;
        if let Some(previous) = previous {
            if findex < previous {
                return Err(StreamError::DecreasingFiltrationIndex {
                    simplex,
                    findex,
                    previous,
                });
            }
        }
        previous = Some(findex);

        table
            .put(simplex)
            .map_err(|_| StreamError::DuplicateSimplex(simplex))?;
    }

    for simplex in stream.iter() {
        let findex = simplex
            .filtration_index()
            .expect("index checked in the first scan");
        for face in simplex.boundary_faces() {
            let Some(canonical) = table.get(&face) else {
                return Err(StreamError::MissingFace { simplex, face });
            };
            let face_findex = canonical
                .filtration_index()
                .expect("interned from an indexed stream");
            if face_findex > findex {
                return Err(StreamError::FaceAfterCoface {
                    simplex,
                    face: *canonical,
                });
            }
        }
    }

    Ok(())
}
