//! The stream contract.

use strata_simplex::Simplex;

/// A filtration-ordered stream of simplices.
///
/// Implementors promise the ordering contract: every contained simplex
/// is yielded exactly once, filtration indices are non-decreasing along
/// the iteration, and for every simplex each of its boundary faces has a
/// filtration index no greater than its own. `size` and `max_dimension`
/// are fixed once the stream is sealed and handed to a consumer.
///
/// The contract is trusted by the reduction algorithm; [`crate::verify`]
/// checks it explicitly when a producer wants auditing.
pub trait SimplexStream {
    /// The non-destructive cursor type.
    type Iter<'a>: Iterator<Item = Simplex>
    where
        Self: 'a;

    /// A read-only snapshot cursor over the stream in contract order.
    ///
    /// Repeated calls traverse the same elements again; iteration never
    /// consumes storage.
    fn iter(&self) -> Self::Iter<'_>;

    /// Number of simplices in the stream.
    fn size(&self) -> usize;

    /// Largest dimension of any simplex in the stream.
    fn max_dimension(&self) -> usize;

    /// Converts a filtration index to the producer's real filtration
    /// value. Pure; the identity by default.
    fn filtration_value(&self, findex: u32) -> f64 {
        f64::from(findex)
    }
}
