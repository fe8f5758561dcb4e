//! Indexed binary min-heap with decrease-key
//!
//! Elements are dense ids in `[0, capacity)`. The heap keeps its own
//! id -> position array, so callers never store heap positions in their
//! domain objects and `decrease_key` finds an element in O(1) before
//! restoring heap order in O(log n).
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

const NOT_QUEUED: usize = usize::MAX;

/// Errors raised by misuse of the queue
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriorityQueueError {
    #[error("Element {id} is out of range for a queue of capacity {capacity}")]
    OutOfRange { id: usize, capacity: usize },

    #[error("Element {0} is already in the queue")]
    AlreadyQueued(usize),

    #[error("Element {0} is not in the queue")]
    ElementNotFound(usize),

    #[error("Priority of element {0} cannot be increased by decrease_key")]
    InvalidPriorityUpdate(usize),

    #[error("Heap order violated between positions {0} and {1}")]
    HeapInvariantViolation(usize, usize),
}

#[derive(Debug, Clone, Copy)]
struct HeapEntry<P> {
    id: usize,
    priority: P,
}

/// Operation counters, useful for comparing algorithm variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapStats {
    pub insertions: usize,
    pub removals: usize,
    pub decrease_keys: usize,
}

/// Binary min-heap addressable by element id
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<P> {
    heap: Vec<HeapEntry<P>>,
    /// `positions[id]` is the heap slot of `id`, or `NOT_QUEUED`
    positions: Vec<usize>,
    stats: HeapStats,
}

impl<P: PartialOrd + Copy> IndexedPriorityQueue<P> {
    /// Creates an empty queue accepting ids in `[0, capacity)`
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: vec![NOT_QUEUED; capacity],
            stats: HeapStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.position(id).is_some()
    }

    /// Current priority of a queued element
    pub fn priority(&self, id: usize) -> Option<P> {
        self.position(id).map(|pos| self.heap[pos].priority)
    }

    /// Element with the smallest priority, without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.first().map(|entry| (entry.id, entry.priority))
    }

    /// Inserts a new element
    pub fn push(&mut self, id: usize, priority: P) -> Result<(), PriorityQueueError> {
        self.check_range(id)?;
        if self.contains(id) {
            return Err(PriorityQueueError::AlreadyQueued(id));
        }

        let position = self.heap.len();
        self.heap.push(HeapEntry { id, priority });
        self.positions[id] = position;
        self.bubble_up(position);

        self.stats.insertions += 1;
        Ok(())
    }

    /// Removes and returns the element with the smallest priority
    pub fn pop(&mut self) -> Option<(usize, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap_entries(0, last);
        let root = self.heap.pop()?;
        self.positions[root.id] = NOT_QUEUED;

        if !self.heap.is_empty() {
            self.bubble_down(0);
        }

        self.stats.removals += 1;
        Some((root.id, root.priority))
    }

    /// Lowers the priority of a queued element
    ///
    /// Setting an equal priority is accepted and leaves the heap unchanged.
    pub fn decrease_key(&mut self, id: usize, new_priority: P) -> Result<(), PriorityQueueError> {
        let position = self
            .position(id)
            .ok_or(PriorityQueueError::ElementNotFound(id))?;

        if new_priority > self.heap[position].priority {
            return Err(PriorityQueueError::InvalidPriorityUpdate(id));
        }

        self.heap[position].priority = new_priority;
        self.bubble_up(position);

        self.stats.decrease_keys += 1;
        Ok(())
    }

    /// Removes an arbitrary queued element, returning its priority
    pub fn remove(&mut self, id: usize) -> Result<P, PriorityQueueError> {
        let position = self
            .position(id)
            .ok_or(PriorityQueueError::ElementNotFound(id))?;

        let last = self.heap.len() - 1;
        self.swap_entries(position, last);
        let removed = self.heap.pop().ok_or(PriorityQueueError::ElementNotFound(id))?;
        self.positions[id] = NOT_QUEUED;

        if position < self.heap.len() {
            if position > 0 && self.less(position, (position - 1) / 2) {
                self.bubble_up(position);
            } else {
                self.bubble_down(position);
            }
        }

        self.stats.removals += 1;
        Ok(removed.priority)
    }

    pub fn clear(&mut self) {
        for entry in self.heap.drain(..) {
            self.positions[entry.id] = NOT_QUEUED;
        }
    }

    pub fn stats(&self) -> HeapStats {
        self.stats
    }

    /// Checks heap order and the consistency of the position array
    pub fn validate(&self) -> Result<(), PriorityQueueError> {
        for (pos, entry) in self.heap.iter().enumerate() {
            if self.positions[entry.id] != pos {
                return Err(PriorityQueueError::ElementNotFound(entry.id));
            }
            for child in [2 * pos + 1, 2 * pos + 2] {
                if child < self.heap.len() && self.less(child, pos) {
                    return Err(PriorityQueueError::HeapInvariantViolation(pos, child));
                }
            }
        }
        Ok(())
    }

    fn check_range(&self, id: usize) -> Result<(), PriorityQueueError> {
        if id >= self.positions.len() {
            return Err(PriorityQueueError::OutOfRange {
                id,
                capacity: self.positions.len(),
            });
        }
        Ok(())
    }

    fn position(&self, id: usize) -> Option<usize> {
        match self.positions.get(id) {
            Some(&pos) if pos != NOT_QUEUED => Some(pos),
            _ => None,
        }
    }

    fn bubble_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.less(position, parent) {
                break;
            }
            self.swap_entries(position, parent);
            position = parent;
        }
    }

    fn bubble_down(&mut self, mut position: usize) {
        let len = self.heap.len();

        loop {
            let mut smallest = position;
            let left = 2 * position + 1;
            let right = left + 1;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == position {
                break;
            }

            self.swap_entries(position, smallest);
            position = smallest;
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].priority < self.heap[b].priority
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].id] = a;
        self.positions[self.heap[b].id] = b;
    }
}
