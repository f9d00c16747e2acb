//! The simplex type.
//!
//! A simplex is identified by its vertex set alone. The filtration index
//! is stream metadata: it orders simplices inside a filtration but never
//! participates in equality or hashing, so a boundary face computed
//! without an index still matches its interned, index-carrying original.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;
use thiserror::Error;

use crate::order;
use crate::packed::PackedVertexSet;

/// Largest supported vertex count per simplex.
pub const MAX_VERTICES: usize = 8;

/// Largest supported simplex dimension.
pub const MAX_DIMENSION: usize = MAX_VERTICES - 1;

/// Errors raised by simplex construction and the write-once slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SimplexError {
    /// The vertex slice was empty.
    #[error("a simplex needs at least one vertex")]
    EmptyVertexSet,

    /// More vertices than any packing class supports.
    #[error("{0} vertices exceed the supported maximum of {MAX_VERTICES}")]
    TooManyVertices(usize),

    /// Vertex labels must be strictly increasing (and therefore distinct).
    #[error("vertex labels must be strictly increasing")]
    NotStrictlyIncreasing,

    /// Vertex labels are positive integers; zero is reserved.
    #[error("vertex labels must be positive")]
    ZeroVertexLabel,

    /// The filtration index is assigned at most once.
    #[error("filtration index already assigned")]
    FiltrationIndexAlreadySet,
}

/// An immutable vertex set with a write-once filtration index.
#[derive(Clone, Copy, Debug)]
pub struct Simplex {
    verts: PackedVertexSet,
    len: u8,
    findex: Option<u32>,
}

impl Simplex {
    /// Builds a simplex from strictly increasing positive vertex labels.
    ///
    /// # Errors
    ///
    /// Rejects empty input, more than [`MAX_VERTICES`] labels, a zero
    /// label, and labels that are not strictly increasing.
    pub fn from_vertices(vertices: &[u32]) -> Result<Self, SimplexError> {
        if vertices.is_empty() {
            return Err(SimplexError::EmptyVertexSet);
        }
        if vertices.len() > MAX_VERTICES {
            return Err(SimplexError::TooManyVertices(vertices.len()));
        }
        if vertices[0] == 0 {
            return Err(SimplexError::ZeroVertexLabel);
        }
        if vertices.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SimplexError::NotStrictlyIncreasing);
        }

        Ok(Self {
            verts: PackedVertexSet::pack(vertices),
            len: vertices.len() as u8,
            findex: None,
        })
    }

    /// Builds a vertex (0-simplex) from a single label.
    ///
    /// # Errors
    ///
    /// Rejects the zero label.
    pub fn vertex(label: u32) -> Result<Self, SimplexError> {
        Self::from_vertices(&[label])
    }

    /// The simplex dimension (vertex count minus one).
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.len as usize - 1
    }

    /// Number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.len as usize
    }

    /// The i-th vertex label, in increasing order.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn vertex_at(&self, i: usize) -> u32 {
        assert!(i < self.vertex_count(), "vertex index out of range");
        self.verts.get(i)
    }

    /// The sorted vertex labels.
    #[must_use]
    pub fn vertices(&self) -> SmallVec<[u32; 8]> {
        (0..self.vertex_count()).map(|i| self.verts.get(i)).collect()
    }

    /// The filtration index, if one has been assigned.
    #[must_use]
    pub const fn filtration_index(&self) -> Option<u32> {
        self.findex
    }

    /// Assigns the filtration index. The slot is write-once.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::FiltrationIndexAlreadySet`] on a second
    /// assignment.
    pub fn set_filtration_index(&mut self, findex: u32) -> Result<(), SimplexError> {
        if self.findex.is_some() {
            return Err(SimplexError::FiltrationIndexAlreadySet);
        }
        self.findex = Some(findex);
        Ok(())
    }

    /// Builder form of [`Self::set_filtration_index`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::set_filtration_index`].
    pub fn with_filtration_index(mut self, findex: u32) -> Result<Self, SimplexError> {
        self.set_filtration_index(findex)?;
        Ok(self)
    }

    /// The codimension-1 faces, one per deleted vertex.
    ///
    /// The i-th entry is the face obtained by deleting the i-th vertex;
    /// its position encodes the alternating-sum sign (-1)^i. Faces carry
    /// no filtration index. A 0-simplex has no faces.
    #[must_use]
    pub fn boundary_faces(&self) -> SmallVec<[Simplex; 8]> {
        let n = self.vertex_count();
        if n == 1 {
            return SmallVec::new();
        }

        let vertices = self.vertices();
        let mut faces = SmallVec::new();
        let mut scratch: SmallVec<[u32; 8]> = SmallVec::with_capacity(n - 1);
        for skip in 0..n {
            scratch.clear();
            scratch.extend(
                vertices
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != skip)
                    .map(|(_, &v)| v),
            );
            faces.push(Self {
                verts: PackedVertexSet::pack(&scratch),
                len: (n - 1) as u8,
                findex: None,
            });
        }
        faces
    }
}

impl PartialEq for Simplex {
    fn eq(&self, other: &Self) -> bool {
        // Identity is the vertex set; the filtration index is excluded.
        self.len == other.len && self.verts == other.verts
    }
}

impl Eq for Simplex {}

impl Hash for Simplex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.verts.hash(state);
    }
}

impl PartialOrd for Simplex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Simplex {
    /// Lexicographic on (dimension, vertices); see [`order::simplex_cmp`].
    fn cmp(&self, other: &Self) -> Ordering {
        order::simplex_cmp(self, other)
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.vertex_count() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", self.vertex_at(i))?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let s = Simplex::from_vertices(&[1, 4, 9]).unwrap();
        assert_eq!(s.dimension(), 2);
        assert_eq!(s.vertices().as_slice(), &[1, 4, 9]);
        assert_eq!(s.filtration_index(), None);
    }

    #[test]
    fn test_rejects_invalid_vertex_sets() {
        assert_eq!(
            Simplex::from_vertices(&[]),
            Err(SimplexError::EmptyVertexSet)
        );
        assert_eq!(
            Simplex::from_vertices(&[1, 2, 3, 4, 5, 6, 7, 8, 9]),
            Err(SimplexError::TooManyVertices(9))
        );
        assert_eq!(
            Simplex::from_vertices(&[2, 1]),
            Err(SimplexError::NotStrictlyIncreasing)
        );
        assert_eq!(
            Simplex::from_vertices(&[3, 3]),
            Err(SimplexError::NotStrictlyIncreasing)
        );
        assert_eq!(
            Simplex::from_vertices(&[0, 1]),
            Err(SimplexError::ZeroVertexLabel)
        );
    }

    #[test]
    fn test_filtration_index_write_once() {
        let mut s = Simplex::from_vertices(&[1, 2]).unwrap();
        s.set_filtration_index(3).unwrap();
        assert_eq!(s.filtration_index(), Some(3));
        assert_eq!(
            s.set_filtration_index(4),
            Err(SimplexError::FiltrationIndexAlreadySet)
        );
        assert_eq!(s.filtration_index(), Some(3));
    }

    #[test]
    fn test_equality_ignores_filtration_index() {
        let a = Simplex::from_vertices(&[1, 2, 3]).unwrap();
        let b = a.with_filtration_index(17).unwrap();
        assert_eq!(a, b);

        use std::collections::hash_map::DefaultHasher;
        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_boundary_faces() {
        let s = Simplex::from_vertices(&[2, 5, 8]).unwrap();
        let faces = s.boundary_faces();
        assert_eq!(faces.len(), 3);
        assert_eq!(faces[0].vertices().as_slice(), &[5, 8]);
        assert_eq!(faces[1].vertices().as_slice(), &[2, 8]);
        assert_eq!(faces[2].vertices().as_slice(), &[2, 5]);
        assert!(faces.iter().all(|f| f.filtration_index().is_none()));
    }

    #[test]
    fn test_vertex_has_no_faces() {
        let v = Simplex::vertex(7).unwrap();
        assert!(v.boundary_faces().is_empty());
    }

    #[test]
    fn test_top_dimension_boundary() {
        let s = Simplex::from_vertices(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(s.dimension(), MAX_DIMENSION);
        let faces = s.boundary_faces();
        assert_eq!(faces.len(), 8);
        assert!(faces.iter().all(|f| f.dimension() == MAX_DIMENSION - 1));
    }

    #[test]
    fn test_display() {
        let s = Simplex::from_vertices(&[1, 2, 10]).unwrap();
        assert_eq!(s.to_string(), "[1,2,10]");
    }
}
