use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A frontier entry; only `priority` and `sequence` take part in ordering
#[derive(Debug)]
struct FrontierEntry<V, P> {
    priority: P,
    sequence: u64,
    vertex: V,
}

impl<V, P: Ord> PartialEq for FrontierEntry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, P: Ord> Eq for FrontierEntry<V, P> {}

impl<V, P: Ord> PartialOrd for FrontierEntry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: Ord> Ord for FrontierEntry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// A min-priority queue over a binary heap for shortest path frontiers.
///
/// Entries with equal priority pop in insertion order, which makes runs
/// reproducible. There is no decrease-key: callers push a fresh entry and
/// skip the stale one when it surfaces.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Debug,
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<FrontierEntry<V, P>>>,
    next_sequence: u64,
}

impl<V, P> Frontier<V, P>
where
    V: Debug,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given tentative distance
    pub fn push(&mut self, vertex: V, priority: P) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(FrontierEntry {
            priority,
            sequence,
            vertex,
        }));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.vertex, entry.priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.vertex, entry.priority))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Debug,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
