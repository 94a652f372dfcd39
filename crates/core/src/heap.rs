//! Fixed-capacity binary min-heap keyed by integer priority.
//!
//! The scheduling structure for the Huffman merge loop: leaves go in
//! keyed by frequency, merged subtrees go back in keyed by their summed
//! weight, and `remove` always surfaces the lightest pending entry.
//!
//! The backing array never grows past [`HEAP_CAPACITY`]; the symbol
//! universe is 256 values and merging only shrinks the population, so
//! hitting the cap means caller misuse and is reported, not masked.
//!
//! # Ordering
//! The heap order is partial. Ties between equal priorities are resolved
//! structurally: `remove` descends into the left (lower-index) child when
//! both children carry the same priority, and sift-up stops at the first
//! parent that is not strictly greater. Together with a fixed insertion
//! order this makes the merge sequence reproducible.

use crate::error::{HeapError, Result};

/// Maximum number of entries the heap will hold.
pub const HEAP_CAPACITY: usize = 256;

/// A prioritized payload held by the heap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    /// Min-heap key; lower values surface first.
    pub priority: u64,
    /// The carried value.
    pub payload: T,
}

/// Array-backed binary min-heap with a fixed capacity.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    entries: Vec<Entry<T>>,
}

impl<T> MinHeap<T> {
    /// Create an empty heap with the full backing array pre-allocated.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(HEAP_CAPACITY),
        }
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the minimum-priority entry without removing it.
    pub fn peek(&self) -> Option<&Entry<T>> {
        self.entries.first()
    }

    /// Insert `payload` with the given priority. O(log n).
    ///
    /// # Errors
    /// `HeapError::CapacityExceeded` if the heap already holds
    /// [`HEAP_CAPACITY`] entries.
    pub fn add(&mut self, payload: T, priority: u64) -> Result<()> {
        if self.entries.len() == HEAP_CAPACITY {
            return Err(HeapError::CapacityExceeded {
                capacity: HEAP_CAPACITY,
            }
            .into());
        }
        self.entries.push(Entry { priority, payload });
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// Remove and return the minimum-priority entry. O(log n).
    ///
    /// # Errors
    /// `HeapError::Empty` if no entries remain.
    pub fn remove(&mut self) -> Result<Entry<T>> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty.into());
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop().expect("len checked above");
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Move the entry at `index` up until its parent is no greater.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[parent].priority <= self.entries[index].priority {
                break;
            }
            self.entries.swap(parent, index);
            index = parent;
        }
    }

    /// Move the entry at `index` down, swapping with the smaller child
    /// while that child is strictly smaller. Left child wins ties.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
