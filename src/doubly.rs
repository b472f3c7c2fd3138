//! Doubly linked sequence: symmetric forward and backward links.
//!
//! Every node carries `prev` and `next` keys, so positional operations
//! walk from whichever end is closer to the target index: O(min(i, n-i))
//! instead of the singly linked variant's O(i). Pops at either end are
//! O(1).
//!
//! Every structural mutation updates `prev` and `next` together; the
//! invariant is that `nodes[n].next == m` iff `nodes[m].prev == n` for
//! all linked pairs.
//!
//! # Example
//!
//! ```
//! use linkseq::DoublyLinkedSequence;
//!
//! let mut seq: DoublyLinkedSequence<i32> = DoublyLinkedSequence::new();
//!
//! seq.extend([1, 2, 3, 4, 5]);
//! seq.insert(4, 9).unwrap(); // walks backward from the tail
//!
//! assert_eq!(seq.get(4), Some(&9));
//! assert_eq!(seq.pop_back().unwrap(), 5);
//! ```

use slab::Slab;

use crate::index::LinkKey;
use crate::{Sequence, SequenceError};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: usize,
    next: usize,
}

/// A doubly linked sequence over a slab node arena.
///
/// The sequence tracks head, tail, and length; nodes live in the slab
/// and link both ways by key. `usize::MAX` is the "no link" sentinel.
/// Forward links define the chain; `prev` keys are a lookup relation
/// used to pick the cheaper traversal direction and to make tail-side
/// operations O(1).
pub struct DoublyLinkedSequence<T> {
    nodes: Slab<Node<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> DoublyLinkedSequence<T> {
    /// Creates an empty sequence.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: usize::NONE,
            tail: usize::NONE,
            len: 0,
        }
    }

    /// Creates an empty sequence with room for `capacity` nodes before
    /// the arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: usize::NONE,
            tail: usize::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first value.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head.is_none() {
            return None;
        }
        Some(&self.nodes[self.head].value)
    }

    /// Returns a reference to the last value.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_none() {
            return None;
        }
        Some(&self.nodes[self.tail].value)
    }

    /// Adds a value at the end. O(1).
    pub fn append(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: usize::NONE,
        });

        if self.tail.is_some() {
            self.nodes[self.tail].next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
    }

    /// Adds a value at the start. O(1).
    pub fn prepend(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
            prev: usize::NONE,
            next: self.head,
        });

        if self.head.is_some() {
            self.nodes[self.head].prev = key;
        } else {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
    }

    /// Appends every value produced by `values`, in order.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.append(value);
        }
    }

    /// Inserts `value` before position `index`; `index == len` appends.
    ///
    /// The node currently at `index` is located by walking from the
    /// closer end, so the cost is O(min(index, len - index)).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if `index > len`; the
    /// sequence is left untouched.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        if index > self.len {
            return Err(SequenceError::OutOfRange {
                index,
                len: self.len,
            });
        }

        if index == 0 {
            self.prepend(value);
            return Ok(());
        }
        if index == self.len {
            self.append(value);
            return Ok(());
        }

        // Interior insert: splice between the node at `index` and its
        // predecessor, repairing both directions.
        let next_key = self.key_at(index);
        let prev_key = self.nodes[next_key].prev;
        debug_assert!(prev_key.is_some());

        let key = self.nodes.insert(Node {
            value,
            prev: prev_key,
            next: next_key,
        });
        self.nodes[prev_key].next = key;
        self.nodes[next_key].prev = key;
        self.len += 1;
        Ok(())
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `true` if an element was removed. The scan is forward
    /// from the head; the splice itself is O(1) thanks to `prev`.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cur = self.head;
        while cur.is_some() {
            if self.nodes[cur].value == *value {
                self.unlink(cur);
                return true;
            }
            cur = self.nodes[cur].next;
        }
        false
    }

    /// Removes and returns the first value. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] if the sequence is empty.
    pub fn pop_front(&mut self) -> Result<T, SequenceError> {
        if self.head.is_none() {
            return Err(SequenceError::EmptyCollection);
        }
        Ok(self.unlink(self.head))
    }

    /// Removes and returns the last value. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] if the sequence is empty.
    pub fn pop_back(&mut self) -> Result<T, SequenceError> {
        if self.tail.is_none() {
            return Err(SequenceError::EmptyCollection);
        }
        Ok(self.unlink(self.tail))
    }

    /// Returns a reference to the value at `index`, or `None` if
    /// `index >= len`. Walks from the closer end.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        Some(&self.nodes[self.key_at(index)].value)
    }

    /// Returns the position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = usize::NONE;
        self.tail = usize::NONE;
        self.len = 0;
    }

    /// Returns a fresh forward iterator from the head.
    ///
    /// The iterator is double-ended; `rev()` walks the `prev` links.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Unlinks and frees the node at `key`, repairing neighbors on both
    /// sides, and returns its value.
    fn unlink(&mut self, key: usize) -> T {
        let node = self.nodes.remove(key);

        if node.prev.is_some() {
            self.nodes[node.prev].next = node.next;
        } else {
            self.head = node.next;
        }

        if node.next.is_some() {
            self.nodes[node.next].prev = node.prev;
        } else {
            self.tail = node.prev;
        }

        self.len -= 1;
        node.value
    }

    /// Returns the key of the node at `index`, walking from whichever
    /// end needs fewer hops.
    fn key_at(&self, index: usize) -> usize {
        debug_assert!(index < self.len);

        if index < self.len - index {
            let mut key = self.head;
            for _ in 0..index {
                key = self.nodes[key].next;
            }
            key
        } else {
            let mut key = self.tail;
            for _ in 0..(self.len - 1 - index) {
                key = self.nodes[key].prev;
            }
            key
        }
    }
}

impl<T> Sequence<T> for DoublyLinkedSequence<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn append(&mut self, value: T) {
        DoublyLinkedSequence::append(self, value)
    }

    #[inline]
    fn prepend(&mut self, value: T) {
        DoublyLinkedSequence::prepend(self, value)
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        DoublyLinkedSequence::insert(self, index, value)
    }

    #[inline]
    fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        DoublyLinkedSequence::remove(self, value)
    }

    #[inline]
    fn pop_front(&mut self) -> Result<T, SequenceError> {
        DoublyLinkedSequence::pop_front(self)
    }

    #[inline]
    fn pop_back(&mut self) -> Result<T, SequenceError> {
        DoublyLinkedSequence::pop_back(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        DoublyLinkedSequence::get(self, index)
    }

    #[inline]
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        DoublyLinkedSequence::index_of(self, value)
    }

    #[inline]
    fn iter(&self) -> Iter<'_, T> {
        DoublyLinkedSequence::iter(self)
    }
}

impl<T> Default for DoublyLinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for DoublyLinkedSequence<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for DoublyLinkedSequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedSequence<T> {}

impl<T> FromIterator<T> for DoublyLinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

/// Borrowing double-ended iterator over a [`DoublyLinkedSequence`].
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        // `remaining` both bounds the walk and detects the ends meeting
        // in the middle.
        if self.remaining == 0 {
            return None;
        }

        let node = &self.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> core::iter::FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming iterator that drains the sequence front to back.
pub struct IntoIter<T> {
    seq: DoublyLinkedSequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.seq.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len, Some(self.seq.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.seq.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> core::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { seq: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(seq: &DoublyLinkedSequence<i32>) -> Vec<i32> {
        seq.iter().copied().collect()
    }

    /// Walks the chain in both directions and checks the full set of
    /// structural invariants, including prev/next symmetry.
    fn assert_links(seq: &DoublyLinkedSequence<i32>) {
        if seq.len == 0 {
            assert!(seq.head.is_none());
            assert!(seq.tail.is_none());
            return;
        }

        assert!(seq.head.is_some());
        assert!(seq.tail.is_some());
        assert!(seq.nodes[seq.head].prev.is_none());
        assert!(seq.nodes[seq.tail].next.is_none());

        // Forward walk: count nodes, check symmetry at every link.
        let mut visited = 0;
        let mut key = seq.head;
        let mut last = usize::NONE;
        while key.is_some() {
            visited += 1;
            assert!(visited <= seq.len, "cycle or lost tail in forward links");

            let next = seq.nodes[key].next;
            if next.is_some() {
                assert_eq!(seq.nodes[next].prev, key, "asymmetric link pair");
            }
            last = key;
            key = next;
        }
        assert_eq!(visited, seq.len);
        assert_eq!(last, seq.tail);

        // Backward walk must visit the same count.
        let mut visited_back = 0;
        let mut key = seq.tail;
        while key.is_some() {
            visited_back += 1;
            assert!(visited_back <= seq.len, "cycle in backward links");
            key = seq.nodes[key].prev;
        }
        assert_eq!(visited_back, seq.len);
        assert_eq!(seq.nodes.len(), seq.len);
    }

    // ========================================================================
    // Construction and appends
    // ========================================================================

    #[test]
    fn new_is_empty() {
        let seq: DoublyLinkedSequence<i32> = DoublyLinkedSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert!(seq.front().is_none());
        assert!(seq.back().is_none());
        assert_eq!(collect(&seq), Vec::<i32>::new());
    }

    #[test]
    fn append_adds_to_end() {
        let mut seq = DoublyLinkedSequence::new();
        seq.append(1);
        seq.append(2);
        seq.append(3);

        assert_eq!(collect(&seq), vec![1, 2, 3]);
        assert_eq!(seq.len(), 3);
        assert_links(&seq);
    }

    #[test]
    fn prepend_adds_to_front() {
        let mut seq = DoublyLinkedSequence::new();
        seq.append(2);
        seq.append(3);
        seq.prepend(1);

        assert_eq!(collect(&seq), vec![1, 2, 3]);
        assert_links(&seq);
    }

    #[test]
    fn repeated_prepends_reverse_order() {
        let mut seq = DoublyLinkedSequence::new();
        seq.prepend(1);
        seq.prepend(2);
        seq.prepend(3);

        assert_eq!(collect(&seq), vec![3, 2, 1]);
        assert_links(&seq);
    }

    #[test]
    fn prepend_into_empty_sets_tail() {
        let mut seq = DoublyLinkedSequence::new();
        seq.prepend(1);

        assert_eq!(seq.back(), Some(&1));
        assert_eq!(seq.pop_back().unwrap(), 1);
        assert!(seq.is_empty());
        assert_links(&seq);
    }

    #[test]
    fn extend_appends_in_order() {
        let mut seq = DoublyLinkedSequence::new();
        seq.append(1);
        seq.extend([2, 3, 4]);

        assert_eq!(collect(&seq), vec![1, 2, 3, 4]);
        assert_links(&seq);
    }

    // ========================================================================
    // Insert (including direction choice)
    // ========================================================================

    #[test]
    fn insert_at_head() {
        let mut seq: DoublyLinkedSequence<i32> = [2, 3].into_iter().collect();
        seq.insert(0, 1).unwrap();
        assert_eq!(collect(&seq), vec![1, 2, 3]);
        assert_links(&seq);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut seq: DoublyLinkedSequence<i32> = [1, 2].into_iter().collect();
        seq.insert(2, 3).unwrap();
        assert_eq!(collect(&seq), vec![1, 2, 3]);
        assert_eq!(seq.back(), Some(&3));
        assert_links(&seq);
    }

    #[test]
    fn insert_near_head_walks_forward() {
        let mut seq: DoublyLinkedSequence<i32> = (0..10).collect();
        seq.insert(2, 99).unwrap();
        assert_eq!(seq.get(2), Some(&99));
        assert_eq!(seq.len(), 11);
        assert_links(&seq);
    }

    #[test]
    fn insert_near_tail_walks_backward() {
        let mut seq: DoublyLinkedSequence<i32> = (0..10).collect();
        seq.insert(8, 99).unwrap();
        assert_eq!(seq.get(8), Some(&99));
        assert_eq!(seq.get(9), Some(&8));
        assert_eq!(seq.get(10), Some(&9));
        assert_links(&seq);
    }

    #[test]
    fn insert_at_every_index_round_trips() {
        let base: DoublyLinkedSequence<i32> = (0..6).collect();
        for i in 0..=base.len() {
            let mut seq = base.clone();
            seq.insert(i, 99).unwrap();
            assert_eq!(seq.get(i), Some(&99));
            assert_eq!(seq.len(), 7);
            assert_links(&seq);
        }
    }

    #[test]
    fn insert_out_of_range_is_atomic() {
        let mut seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();
        let before = collect(&seq);

        let err = seq.insert(4, 9).unwrap_err();
        assert_eq!(err, SequenceError::OutOfRange { index: 4, len: 3 });

        assert_eq!(collect(&seq), before);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.nodes.len(), 3);
        assert_links(&seq);
    }

    #[test]
    fn insert_into_empty_at_zero() {
        let mut seq = DoublyLinkedSequence::new();
        seq.insert(0, 7).unwrap();
        assert_eq!(collect(&seq), vec![7]);
        assert_links(&seq);
    }

    // ========================================================================
    // Remove
    // ========================================================================

    #[test]
    fn remove_from_empty_returns_false() {
        let mut seq: DoublyLinkedSequence<i32> = DoublyLinkedSequence::new();
        assert!(!seq.remove(&1));
    }

    #[test]
    fn remove_head_clears_new_head_prev() {
        let mut seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();
        assert!(seq.remove(&1));
        assert_eq!(collect(&seq), vec![2, 3]);
        assert!(seq.nodes[seq.head].prev.is_none());
        assert_links(&seq);
    }

    #[test]
    fn remove_tail_clears_new_tail_next() {
        let mut seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();
        assert!(seq.remove(&3));
        assert_eq!(collect(&seq), vec![1, 2]);
        assert!(seq.nodes[seq.tail].next.is_none());
        assert_links(&seq);
    }

    #[test]
    fn remove_interior_splices_both_directions() {
        let mut seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();
        assert!(seq.remove(&2));
        assert_eq!(collect(&seq), vec![1, 3]);
        assert_links(&seq);
    }

    #[test]
    fn remove_only_element_empties() {
        let mut seq: DoublyLinkedSequence<i32> = [1].into_iter().collect();
        assert!(seq.remove(&1));
        assert!(seq.is_empty());
        assert_links(&seq);
    }

    #[test]
    fn remove_first_occurrence_only() {
        let mut seq: DoublyLinkedSequence<i32> = [1, 2, 3, 2, 4].into_iter().collect();
        assert!(seq.remove(&2));
        assert_eq!(collect(&seq), vec![1, 3, 2, 4]);
        assert_links(&seq);
    }

    #[test]
    fn remove_missing_returns_false_without_mutation() {
        let mut seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();
        let before = seq.clone();
        assert!(!seq.remove(&9));
        assert_eq!(seq, before);
    }

    // ========================================================================
    // Pops
    // ========================================================================

    #[test]
    fn pop_front_removes_first() {
        let mut seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(seq.pop_front().unwrap(), 1);
        assert_eq!(collect(&seq), vec![2, 3]);
        assert_links(&seq);
    }

    #[test]
    fn pop_back_removes_last() {
        let mut seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(seq.pop_back().unwrap(), 3);
        assert_eq!(collect(&seq), vec![1, 2]);
        assert_links(&seq);
    }

    #[test]
    fn pops_single_element_collapse_to_empty() {
        let mut seq: DoublyLinkedSequence<i32> = [1].into_iter().collect();
        assert_eq!(seq.pop_front().unwrap(), 1);
        assert!(seq.head.is_none());
        assert!(seq.tail.is_none());

        seq.append(2);
        assert_eq!(seq.pop_back().unwrap(), 2);
        assert!(seq.head.is_none());
        assert!(seq.tail.is_none());
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn pops_on_empty_fail() {
        let mut seq: DoublyLinkedSequence<i32> = DoublyLinkedSequence::new();
        assert_eq!(seq.pop_front().unwrap_err(), SequenceError::EmptyCollection);
        assert_eq!(seq.pop_back().unwrap_err(), SequenceError::EmptyCollection);
    }

    // ========================================================================
    // Queries (including direction choice)
    // ========================================================================

    #[test]
    fn get_returns_value_at_index_from_both_ends() {
        let seq: DoublyLinkedSequence<i32> = (0..10).collect();
        for i in 0..10 {
            assert_eq!(seq.get(i), Some(&(i as i32)));
        }
        assert_eq!(seq.get(10), None);
    }

    #[test]
    fn get_on_empty_returns_none() {
        let seq: DoublyLinkedSequence<i32> = DoublyLinkedSequence::new();
        assert_eq!(seq.get(0), None);
    }

    #[test]
    fn index_of_returns_first_match() {
        let seq: DoublyLinkedSequence<i32> = [10, 20, 30, 20].into_iter().collect();
        assert_eq!(seq.index_of(&20), Some(1));
        assert_eq!(seq.index_of(&99), None);
    }

    #[test]
    fn queries_do_not_mutate() {
        let seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();
        let before = seq.clone();

        let _ = seq.get(1);
        let _ = seq.get(100);
        let _ = seq.index_of(&2);
        let _ = seq.index_of(&100);

        assert_eq!(seq, before);
        assert_links(&seq);
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    #[test]
    fn iter_is_restartable() {
        let seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(seq.iter().count(), 3);
        assert_eq!(seq.iter().count(), 3);
    }

    #[test]
    fn iter_reversed_walks_prev_links() {
        let seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();
        let values: Vec<_> = seq.iter().rev().copied().collect();
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let seq: DoublyLinkedSequence<i32> = [1, 2, 3, 4].into_iter().collect();
        let mut it = seq.iter();

        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn into_iter_drains_front_to_back() {
        let seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();
        let values: Vec<_> = seq.into_iter().collect();
        assert_eq!(values, vec![1, 2, 3]);

        let seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();
        let values: Vec<_> = seq.into_iter().rev().collect();
        assert_eq!(values, vec![3, 2, 1]);
    }

    // ========================================================================
    // Whole-sequence behavior
    // ========================================================================

    #[test]
    fn clear_resets_to_empty() {
        let mut seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();
        seq.clear();
        assert!(seq.is_empty());
        assert_links(&seq);

        seq.append(4);
        assert_eq!(collect(&seq), vec![4]);
        assert_links(&seq);
    }

    #[test]
    fn slab_slot_reuse_keeps_chain_consistent() {
        let mut seq: DoublyLinkedSequence<i32> = [1, 2, 3].into_iter().collect();

        assert!(seq.remove(&2));
        seq.insert(1, 5).unwrap();

        assert_eq!(collect(&seq), vec![1, 5, 3]);
        assert_links(&seq);
    }

    #[test]
    fn end_to_end_scenario() {
        let mut seq = DoublyLinkedSequence::new();
        seq.append(1);
        seq.append(2);
        seq.append(3);
        seq.insert(1, 9).unwrap();
        assert!(seq.remove(&2));

        assert_eq!(collect(&seq), vec![1, 9, 3]);
        assert_eq!(seq.index_of(&3), Some(2));
        assert_eq!(seq.index_of(&2), None);
        assert_links(&seq);
    }

    #[test]
    fn stress_random_operations_match_vecdeque() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};
        use std::collections::VecDeque;

        let mut rng = SmallRng::seed_from_u64(7);
        let mut seq: DoublyLinkedSequence<i32> = DoublyLinkedSequence::new();
        let mut reference: VecDeque<i32> = VecDeque::new();

        for _ in 0..2000 {
            let op = rng.random_range(0..100);
            let value = rng.random_range(0..50);

            if op < 25 {
                seq.append(value);
                reference.push_back(value);
            } else if op < 45 {
                seq.prepend(value);
                reference.push_front(value);
            } else if op < 60 {
                let index = rng.random_range(0..=reference.len());
                seq.insert(index, value).unwrap();
                reference.insert(index, value);
            } else if op < 75 {
                let removed = seq.remove(&value);
                match reference.iter().position(|v| *v == value) {
                    Some(i) => {
                        assert!(removed);
                        reference.remove(i);
                    }
                    None => assert!(!removed),
                }
            } else if op < 88 {
                assert_eq!(seq.pop_front().ok(), reference.pop_front());
            } else {
                assert_eq!(seq.pop_back().ok(), reference.pop_back());
            }

            if !reference.is_empty() {
                let probe = rng.random_range(0..reference.len());
                assert_eq!(seq.get(probe), reference.get(probe));
            }
            assert_eq!(seq.len(), reference.len());
        }

        let values: Vec<_> = seq.iter().copied().collect();
        let expected: Vec<_> = reference.iter().copied().collect();
        assert_eq!(values, expected);
        assert_links(&seq);
    }
}
