//! The open-addressing table.

use std::hash::{Hash, Hasher};

use log::trace;
use rustc_hash::FxHasher;
use strata_chain::Chain;
use strata_simplex::Simplex;
use thiserror::Error;

/// Smallest slot-array size.
const MIN_CAPACITY: usize = 8;

/// Errors raised by table insertion and the chain slots.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// `put` found an equal vertex set already present.
    #[error("duplicate vertex set {0}")]
    DuplicateKey(Simplex),

    /// A chain was attached to a simplex the table does not contain.
    #[error("simplex {0} is not interned")]
    MissingKey(Simplex),

    /// The reduction chain slot is write-once per pass.
    #[error("simplex {0} already carries a reduction chain")]
    ChainAlreadyAttached(Simplex),
}

struct Entry {
    simplex: Simplex,
    chain: Option<Chain>,
}

/// An interning table keyed by vertex-set identity.
pub struct SimplexTable {
    slots: Vec<Option<Entry>>,
    len: usize,
}

impl Default for SimplexTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SimplexTable {
    /// Creates an empty table with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty table sized for roughly `capacity` simplices.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = capacity.next_power_of_two().max(MIN_CAPACITY);
        Self {
            slots: (0..slots).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Number of interned simplices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slot-array size.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Looks up the canonical instance for `simplex`'s vertex set.
    #[must_use]
    pub fn get(&self, simplex: &Simplex) -> Option<&Simplex> {
        let i = self.probe(simplex);
        self.slots[i].as_ref().map(|e| &e.simplex)
    }

    /// True if the vertex set is interned.
    #[must_use]
    pub fn contains(&self, simplex: &Simplex) -> bool {
        self.get(simplex).is_some()
    }

    /// Inserts a simplex that must not already be present.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateKey`] if an equal vertex set is
    /// already interned. Used where a duplicate indicates a logic error,
    /// such as the reduction algorithm's marked set.
    pub fn put(&mut self, simplex: Simplex) -> Result<(), TableError> {
        self.reserve_one();
        let i = self.probe(&simplex);
        if self.slots[i].is_some() {
            return Err(TableError::DuplicateKey(simplex));
        }
        self.slots[i] = Some(Entry {
            simplex,
            chain: None,
        });
        self.len += 1;
        Ok(())
    }

    /// Inserts the simplex if its vertex set is new, then returns the
    /// canonical instance either way.
    pub fn get_interned(&mut self, simplex: Simplex) -> Simplex {
        self.reserve_one();
        let i = self.probe(&simplex);
        match &self.slots[i] {
            Some(entry) => entry.simplex,
            None => {
                self.slots[i] = Some(Entry {
                    simplex,
                    chain: None,
                });
                self.len += 1;
                simplex
            }
        }
    }

    /// Attaches a reduction chain to an interned simplex. The slot is
    /// write-once per reduction pass.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingKey`] if the simplex is not interned
    /// and [`TableError::ChainAlreadyAttached`] on a second attach.
    pub fn attach_chain(&mut self, simplex: &Simplex, chain: Chain) -> Result<(), TableError> {
        let i = self.probe(simplex);
        match &mut self.slots[i] {
            None => Err(TableError::MissingKey(*simplex)),
            Some(entry) if entry.chain.is_some() => {
                Err(TableError::ChainAlreadyAttached(*simplex))
            }
            Some(entry) => {
                entry.chain = Some(chain);
                Ok(())
            }
        }
    }

    /// The reduction chain attached to a simplex, if any.
    #[must_use]
    pub fn chain(&self, simplex: &Simplex) -> Option<&Chain> {
        let i = self.probe(simplex);
        self.slots[i].as_ref().and_then(|e| e.chain.as_ref())
    }

    /// Iterates over canonical simplices and their chain slots.
    pub fn iter(&self) -> impl Iterator<Item = (&Simplex, Option<&Chain>)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|e| (&e.simplex, e.chain.as_ref())))
    }

    /// Index of the slot holding `simplex`, or of the first empty slot
    /// on its probe path. The load factor keeps at least one slot empty,
    /// so the linear probe always terminates.
    fn probe(&self, simplex: &Simplex) -> usize {
        let mask = self.slots.len() - 1;
        let mut i = hash_of(simplex) & mask;
        loop {
            match &self.slots[i] {
                Some(entry) if entry.simplex == *simplex => return i,
                Some(_) => i = (i + 1) & mask,
                None => return i,
            }
        }
    }

    /// Doubles the slot array when one more insert would cross the load
    /// factor (3/4).
    fn reserve_one(&mut self) {
        if (self.len + 1) * 4 <= self.slots.len() * 3 {
            return;
        }

        let new_size = self.slots.len() * 2;
        trace!("simplex table growing to {new_size} slots ({} interned)", self.len);

        let old: Vec<Option<Entry>> = std::mem::replace(
            &mut self.slots,
            (0..new_size).map(|_| None).collect(),
        );
        for entry in old.into_iter().flatten() {
            let i = self.probe(&entry.simplex);
            debug_assert!(self.slots[i].is_none());
            self.slots[i] = Some(entry);
        }
    }
}

fn hash_of(simplex: &Simplex) -> usize {
    let mut hasher = FxHasher::default();
    simplex.hash(&mut hasher);
    hasher.finish() as usize
}
