use num_traits::Float;
use std::fmt::Debug;

/// Binary min-heap keyed by a numeric priority.
///
/// There is no decrease-key: callers push a fresh entry whenever a priority
/// improves and skip stale entries when they pop them.
#[derive(Debug, Clone)]
pub struct MinHeap<T, P>
where
    P: Float + Debug,
{
    /// Heap-ordered (priority, payload) pairs
    entries: Vec<(P, T)>,
}

impl<T, P> MinHeap<T, P>
where
    P: Float + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap {
            entries: Vec::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Appends an element and restores heap order
    pub fn push(&mut self, payload: T, priority: P) {
        self.entries.push((priority, payload));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes the element with the lowest priority
    pub fn pop(&mut self) -> Option<(T, P)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let (priority, payload) = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((payload, priority))
    }

    /// Returns the element with the lowest priority without removing it
    pub fn peek(&self) -> Option<(&T, P)> {
        self.entries.first().map(|(priority, payload)| (payload, *priority))
    }

    /// Lowest priority in the queue, or infinity when empty
    pub fn min_priority(&self) -> P {
        self.entries
            .first()
            .map(|(priority, _)| *priority)
            .unwrap_or_else(P::infinity)
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].0 < self.entries[parent].0 {
                self.entries.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
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

impl<T, P> Default for MinHeap<T, P>
where
    P: Float + Debug,
{
    fn default() -> Self {
        MinHeap::new()
    }
}
