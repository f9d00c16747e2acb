//! Sparse chain arithmetic.
//!
//! Terms are kept strictly increasing under the filtration order, with
//! no zero coefficients and no duplicate simplices. The zero chain is
//! the unique empty term list.

use std::cmp::Ordering;
use std::fmt;

use strata_field::PrimeField;
use strata_simplex::{filtration_cmp, Simplex};

/// A sparse Z/p-linear combination of simplices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chain {
    /// Terms sorted strictly increasing under [`filtration_cmp`];
    /// coefficients in `[1, p-1]`.
    terms: Vec<(Simplex, u32)>,
}

impl Chain {
    /// The zero chain.
    #[must_use]
    pub const fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// A single-term chain, or zero if the coefficient reduces to zero.
    #[must_use]
    pub fn single(simplex: Simplex, coefficient: u32, field: &PrimeField) -> Self {
        let c = field.reduce(coefficient);
        if c == 0 {
            return Self::zero();
        }
        Self {
            terms: vec![(simplex, c)],
        }
    }

    /// Builds a chain from arbitrary terms, normalizing as it goes:
    /// terms are sorted under the filtration order, like terms combined
    /// mod p, and zero coefficients dropped.
    #[must_use]
    pub fn from_terms(mut terms: Vec<(Simplex, u32)>, field: &PrimeField) -> Self {
        terms.sort_by(|a, b| filtration_cmp(&a.0, &b.0));

        let mut normalized: Vec<(Simplex, u32)> = Vec::with_capacity(terms.len());
        for (simplex, coefficient) in terms {
            let c = field.reduce(coefficient);
            match normalized.last_mut() {
                Some((last, acc)) if *last == simplex => {
                    *acc = field.add(*acc, c);
                    if *acc == 0 {
                        normalized.pop();
                    }
                }
                _ => {
                    if c != 0 {
                        normalized.push((simplex, c));
                    }
                }
            }
        }

        Self { terms: normalized }
    }

    /// True for the zero chain.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The terms, sorted increasing under the filtration order.
    #[must_use]
    pub fn terms(&self) -> &[(Simplex, u32)] {
        &self.terms
    }

    /// The filtration-order-maximal simplex, the reduction pivot.
    ///
    /// `None` on the zero chain.
    #[must_use]
    pub fn max_simplex(&self) -> Option<&Simplex> {
        self.terms.last().map(|(s, _)| s)
    }

    /// The coefficient of [`Self::max_simplex`]. `None` on the zero chain.
    #[must_use]
    pub fn max_coefficient(&self) -> Option<u32> {
        self.terms.last().map(|&(_, c)| c)
    }

    /// Computes `self + scalar * other` in one merge pass.
    ///
    /// Terms present in only one operand pass through (scaled when they
    /// come from `other`); terms present in both have their coefficients
    /// combined mod p and vanish when the sum is zero. Cost is linear in
    /// the combined term count.
    #[must_use]
    pub fn add(&self, other: &Self, scalar: u32, field: &PrimeField) -> Self {
        let scalar = field.reduce(scalar);
        if scalar == 0 || other.is_zero() {
            return self.clone();
        }

        let a = &self.terms;
        let b = &other.terms;
        let mut merged = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match filtration_cmp(&a[i].0, &b[j].0) {
                Ordering::Less => {
                    merged.push(a[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    let c = field.mul(scalar, b[j].1);
                    if c != 0 {
                        merged.push((b[j].0, c));
                    }
                    j += 1;
                }
                Ordering::Equal => {
                    let c = field.add(a[i].1, field.mul(scalar, b[j].1));
                    if c != 0 {
                        merged.push((a[i].0, c));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        merged.extend_from_slice(&a[i..]);
        for &(simplex, coefficient) in &b[j..] {
            let c = field.mul(scalar, coefficient);
            if c != 0 {
                merged.push((simplex, c));
            }
        }

        Self { terms: merged }
    }

    /// The boundary of a simplex: the alternating sum of its
    /// codimension-1 faces with coefficients `1, p-1, 1, ...`.
    ///
    /// Degenerate face collisions cancel during normalization; the
    /// result may be zero. The boundary of a vertex is zero.
    #[must_use]
    pub fn boundary(simplex: &Simplex, field: &PrimeField) -> Self {
        let faces = simplex.boundary_faces();
        if faces.is_empty() {
            return Self::zero();
        }

        let minus_one = field.neg(1);
        let terms: Vec<(Simplex, u32)> = faces
            .into_iter()
            .enumerate()
            .map(|(i, face)| (face, if i % 2 == 0 { 1 } else { minus_one }))
            .collect();
        Self::from_terms(terms, field)
    }

    /// Projects the chain onto a supplied basis.
    ///
    /// Each term's simplex is passed to `lookup`; terms it does not
    /// recognize are dropped, and recognized terms are replaced by the
    /// instance it returns — typically the canonical, index-carrying
    /// simplex from an interning table. The result is re-sorted under
    /// the filtration order of the replacement instances.
    #[must_use]
    pub fn filter<F>(&self, mut lookup: F) -> Self
    where
        F: FnMut(&Simplex) -> Option<Simplex>,
    {
        let mut terms: Vec<(Simplex, u32)> = self
            .terms
            .iter()
            .filter_map(|(s, c)| lookup(s).map(|canonical| (canonical, *c)))
            .collect();
        terms.sort_by(|a, b| filtration_cmp(&a.0, &b.0));
        debug_assert!(
            terms
                .windows(2)
                .all(|w| filtration_cmp(&w[0].0, &w[1].0) == Ordering::Less),
            "basis projection must preserve term distinctness"
        );
        Self { terms }
    }

}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, (simplex, coefficient)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{coefficient}*{simplex}")?;
        }
        Ok(())
    }
}
