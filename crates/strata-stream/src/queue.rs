//! The append-only segmented FIFO.
//!
//! Producers that build a filtration level by level append to a
//! [`Tail`] while one or more [`Head`] cursors read behind them. A head
//! is a plain offset, so cursors are `Copy`: cloning one replays the
//! tail from that position without copying any storage. Segments have
//! fixed capacity and only the newest one grows, which makes random
//! access by position O(1).

use crate::SEGMENT_CAPACITY;

/// An append-only queue of fixed-capacity segments.
#[derive(Debug)]
pub struct Tail<T> {
    segments: Vec<Vec<T>>,
    len: usize,
}

impl<T> Default for Tail<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tail<T> {
    /// Creates an empty tail.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            len: 0,
        }
    }

    /// Appends an element.
    pub fn push(&mut self, item: T) {
        match self.segments.last_mut() {
            Some(segment) if segment.len() < SEGMENT_CAPACITY => segment.push(item),
            _ => {
                let mut segment = Vec::with_capacity(SEGMENT_CAPACITY);
                segment.push(item);
                self.segments.push(segment);
            }
        }
        self.len += 1;
    }

    /// Number of elements appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The element at `position`, if it has been appended.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        if position >= self.len {
            return None;
        }
        Some(&self.segments[position / SEGMENT_CAPACITY][position % SEGMENT_CAPACITY])
    }

    /// A cursor positioned at the front of the queue.
    #[must_use]
    pub fn head(&self) -> Head {
        Head { position: 0 }
    }
}

/// A read cursor into a [`Tail`].
///
/// Heads are independent: any number may traverse the same tail at
/// different offsets, and copying a head snapshots its position for
/// later replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Head {
    position: usize,
}

impl Head {
    /// The current read position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// True if elements remain between this cursor and the tail's end.
    #[must_use]
    pub fn has_next<T>(&self, tail: &Tail<T>) -> bool {
        self.position < tail.len()
    }

    /// The element under the cursor, without advancing.
    #[must_use]
    pub fn peek<'a, T>(&self, tail: &'a Tail<T>) -> Option<&'a T> {
        tail.get(self.position)
    }

    /// Reads the element under the cursor and advances past it.
    pub fn next<'a, T>(&mut self, tail: &'a Tail<T>) -> Option<&'a T> {
        let item = tail.get(self.position)?;
        self.position += 1;
        Some(item)
    }
}
