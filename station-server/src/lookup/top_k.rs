//! Bounded best-first selection.

use std::cmp::Ordering;

/// Keeps the best `capacity` items offered to it, in sorted order.
///
/// Each offer finds its slot by binary search over the kept items and
/// shifts at most `capacity` elements, so selecting from `n` items costs
/// `O(n log k)` comparisons instead of sorting everything.
///
/// Items that compare equal keep the order in which they were offered.
pub struct TopK<T, F> {
    items: Vec<T>,
    capacity: usize,
    compare: F,
}

impl<T, F> TopK<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create an empty buffer. `compare` returns `Less` when the first
    /// argument ranks higher.
    pub fn new(capacity: usize, compare: F) -> Self {
        Self {
            // Capacity comes from callers; don't trust it for allocation.
            items: Vec::with_capacity(capacity.min(64)),
            capacity,
            compare,
        }
    }

    /// Offer an item. Returns whether it was kept.
    pub fn offer(&mut self, item: T) -> bool {
        let slot = self
            .items
            .partition_point(|kept| (self.compare)(kept, &item) != Ordering::Greater);

        if slot >= self.capacity {
            return false;
        }

        if self.items.len() == self.capacity {
            self.items.pop();
        }
        self.items.insert(slot, item);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The kept items, best first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.items
    }
}
