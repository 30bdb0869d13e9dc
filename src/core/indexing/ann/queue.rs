// src/core/indexing/ann/queue.rs

//! Fixed-capacity collector keeping the `k` lowest-priority entries seen.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap slot. `BinaryHeap` is a max-heap, so the entry with the largest
/// priority (the worst distance) sits at the top and is evicted first.
#[derive(Debug)]
struct Ranked<E> {
    priority: f64,
    entry: E,
}

impl<E> PartialEq for Ranked<E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<E> Eq for Ranked<E> {}

impl<E> PartialOrd for Ranked<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Ranked<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.total_cmp(&other.priority)
    }
}

/// Bounded max-priority queue.
///
/// A capacity of `usize::MAX` turns it into an unbounded collector, which is
/// what pure radius searches use.
#[derive(Debug)]
pub struct LimitedPriorityQueue<E> {
    heap: BinaryHeap<Ranked<E>>,
    capacity: usize,
}

impl<E> LimitedPriorityQueue<E> {
    pub fn new(capacity: usize) -> Self {
        Self { heap: BinaryHeap::new(), capacity }
    }

    /// Offers `entry`. When full, it replaces the current worst entry only
    /// if `priority` is strictly lower; otherwise it is dropped.
    pub fn add(&mut self, entry: E, priority: f64) {
        if self.heap.len() < self.capacity {
            self.heap.push(Ranked { priority, entry });
            return;
        }
        if let Some(mut worst) = self.heap.peek_mut() {
            if priority < worst.priority {
                *worst = Ranked { priority, entry };
            }
        }
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Priority of the worst entry kept so far.
    pub fn worst_priority(&self) -> Option<f64> {
        self.heap.peek().map(|ranked| ranked.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drains the queue, worst entry first.
    pub fn into_list(self) -> Vec<E> {
        let mut ranked = self.heap.into_sorted_vec();
        ranked.reverse();
        ranked.into_iter().map(|ranked| ranked.entry).collect()
    }
}
