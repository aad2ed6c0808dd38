//! Stable min-priority queue used by Dijkstra and Prim's.
//!
//! There is no decrease-key: "updating" an element means enqueueing it again
//! with the new priority. The stale entry stays in the queue and the
//! consuming algorithm tolerates seeing it later.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by priority, then
/// insertion sequence)
#[derive(Debug, Clone)]
struct QueueEntry<T> {
    priority: f64,
    seq: u64,
    element: T,
}

impl<T> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for QueueEntry<T> {}

impl<T> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Generic min-priority queue keyed by an `f64` priority.
///
/// Ties are broken by insertion order: of two entries with equal priority,
/// the one enqueued first is dequeued first.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Reverse<QueueEntry<T>>>,
    next_seq: u64,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Insert `element` with `priority`. An element that is already queued
    /// is simply queued a second time.
    pub fn enqueue(&mut self, element: T, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(QueueEntry {
            priority,
            seq,
            element,
        }));
    }

    /// Remove and return the element with the smallest priority.
    pub fn dequeue(&mut self) -> Option<T> {
        self.dequeue_with_priority().map(|(element, _)| element)
    }

    /// Like [`dequeue`](Self::dequeue), also returning the entry's priority.
    pub fn dequeue_with_priority(&mut self) -> Option<(T, f64)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.element, entry.priority))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
