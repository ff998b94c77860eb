//! `MinPriorityQueue` — a minimum-first priority queue implemented with a binary heap.
//!
//! Each entry carries a priority `P` and an arbitrary item `T`; only the
//! priority is compared. Entries with equal priority leave the queue in the
//! order they entered it, so the dequeue sequence is fully determined by the
//! enqueue sequence.
//!
//! Priorities only need `PartialOrd`, which admits floating-point costs.
//! Incomparable priorities (NaN) are treated as equal and fall back to
//! insertion order.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `enqueue` | \(O(\log n)\) |
//! | `dequeue` | \(O(\log n)\) |
//! | `peek` | \(O(1)\) |

use core::cmp::Ordering;
use core::fmt;

struct HeapEntry<P, T> {
    priority: P,
    /// Insertion sequence number, the tie-breaker for equal priorities.
    seq: u64,
    item: T,
}

impl<P: Clone, T: Clone> Clone for HeapEntry<P, T> {
    fn clone(&self) -> Self {
        Self {
            priority: self.priority.clone(),
            seq: self.seq,
            item: self.item.clone(),
        }
    }
}

/// A priority queue that always yields the entry with the smallest priority.
pub struct MinPriorityQueue<P, T> {
    data: Vec<HeapEntry<P, T>>,
    next_seq: u64,
}

impl<P: PartialOrd, T> MinPriorityQueue<P, T> {
    /// Creates an empty priority queue.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Returns the number of entries in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts `item` with the given `priority`.
    pub fn enqueue(&mut self, priority: P, item: T) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.data.push(HeapEntry {
            priority,
            seq,
            item,
        });
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority.
    pub fn dequeue(&mut self) -> Option<(P, T)> {
        if self.data.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let entry = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some((entry.priority, entry.item))
    }

    /// Returns the entry with the smallest priority without removing it.
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.data.first().map(|e| (&e.priority, &e.item))
    }

    /// Removes every entry. The tie-break sequence restarts from zero.
    pub fn clear(&mut self) {
        self.data.clear();
        self.next_seq = 0;
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.precedes(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.precedes(right, left) {
                smaller = right;
            }

            if self.precedes(smaller, node) {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    // `true` if the entry at `a` must leave the queue before the entry at `b`.
    fn precedes(&self, a: usize, b: usize) -> bool {
        let (ea, eb) = (&self.data[a], &self.data[b]);
        match ea.priority.partial_cmp(&eb.priority) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            Some(Ordering::Equal) | None => ea.seq < eb.seq,
        }
    }
}

impl<P: PartialOrd, T> Default for MinPriorityQueue<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone, T: Clone> Clone for MinPriorityQueue<P, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            next_seq: self.next_seq,
        }
    }
}

impl<P: fmt::Debug, T: fmt::Debug> fmt::Debug for MinPriorityQueue<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Heap order, not dequeue order.
        f.debug_list()
            .entries(self.data.iter().map(|e| (&e.priority, &e.item)))
            .finish()
    }
}

impl<P: PartialOrd, T> FromIterator<(P, T)> for MinPriorityQueue<P, T> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<P: PartialOrd, T> Extend<(P, T)> for MinPriorityQueue<P, T> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, item) in iter {
            self.enqueue(priority, item);
        }
    }
}
