//! Singly linked sequence: forward links only.
//!
//! Nodes carry a value and a `next` key. Appending is O(1) through the
//! cached tail key, but any operation that needs the tail's predecessor
//! (`pop_back`, removing the last element) has no back link to follow
//! and scans forward from the head. That scan is the trade-off against
//! [`DoublyLinkedSequence`](crate::DoublyLinkedSequence).
//!
//! # Example
//!
//! ```
//! use linkseq::SinglyLinkedSequence;
//!
//! let mut seq: SinglyLinkedSequence<&str> = SinglyLinkedSequence::new();
//!
//! seq.append("b");
//! seq.prepend("a");
//! seq.append("c");
//!
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.pop_back().unwrap(), "c");
//! assert_eq!(seq.index_of(&"b"), Some(1));
//! ```

use slab::Slab;

use crate::index::LinkKey;
use crate::{Sequence, SequenceError};

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: usize,
}

/// A singly linked sequence over a slab node arena.
///
/// The sequence tracks head, tail, and length; nodes live in the slab
/// and link forward by key. `usize::MAX` is the "no link" sentinel.
pub struct SinglyLinkedSequence<T> {
    nodes: Slab<Node<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> SinglyLinkedSequence<T> {
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

    /// Adds a value at the end. O(1) via the cached tail key.
    pub fn append(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
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
            next: self.head,
        });

        if self.tail.is_none() {
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
    /// Always walks forward from the head to find the predecessor.
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

        // Interior insert: the predecessor exists and has a successor,
        // so neither head nor tail moves.
        let prev = self.key_at(index - 1);
        let next = self.nodes[prev].next;
        let key = self.nodes.insert(Node { value, next });
        self.nodes[prev].next = key;
        self.len += 1;
        Ok(())
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `true` if an element was removed. Scans forward tracking
    /// the predecessor so the splice is a single link update.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut prev = usize::NONE;
        let mut cur = self.head;

        while cur.is_some() {
            if self.nodes[cur].value == *value {
                let next = self.nodes[cur].next;

                if prev.is_some() {
                    self.nodes[prev].next = next;
                } else {
                    self.head = next;
                }
                if cur == self.tail {
                    self.tail = prev;
                }

                self.nodes.remove(cur);
                self.len -= 1;
                return true;
            }

            prev = cur;
            cur = self.nodes[cur].next;
        }

        false
    }

    /// Removes and returns the first value.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] if the sequence is empty.
    pub fn pop_front(&mut self) -> Result<T, SequenceError> {
        if self.head.is_none() {
            return Err(SequenceError::EmptyCollection);
        }

        let node = self.nodes.remove(self.head);
        self.head = node.next;
        if self.head.is_none() {
            // Single element removed: collapse to the empty state.
            self.tail = usize::NONE;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes and returns the last value.
    ///
    /// O(n): without back links the tail's predecessor is found by a
    /// forward scan from the head.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] if the sequence is empty.
    pub fn pop_back(&mut self) -> Result<T, SequenceError> {
        if self.tail.is_none() {
            return Err(SequenceError::EmptyCollection);
        }

        let mut prev = usize::NONE;
        let mut cur = self.head;
        while cur != self.tail {
            prev = cur;
            cur = self.nodes[cur].next;
        }

        let node = self.nodes.remove(self.tail);
        debug_assert!(node.next.is_none());

        if prev.is_some() {
            self.nodes[prev].next = usize::NONE;
        } else {
            self.head = usize::NONE;
        }
        self.tail = prev;
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns a reference to the value at `index`, or `None` if
    /// `index >= len`.
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
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Returns the key of the node at `index`, walking from the head.
    fn key_at(&self, index: usize) -> usize {
        debug_assert!(index < self.len);

        let mut key = self.head;
        for _ in 0..index {
            key = self.nodes[key].next;
        }
        key
    }
}

impl<T> Sequence<T> for SinglyLinkedSequence<T> {
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
        SinglyLinkedSequence::append(self, value)
    }

    #[inline]
    fn prepend(&mut self, value: T) {
        SinglyLinkedSequence::prepend(self, value)
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        SinglyLinkedSequence::insert(self, index, value)
    }

    #[inline]
    fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        SinglyLinkedSequence::remove(self, value)
    }

    #[inline]
    fn pop_front(&mut self) -> Result<T, SequenceError> {
        SinglyLinkedSequence::pop_front(self)
    }

    #[inline]
    fn pop_back(&mut self) -> Result<T, SequenceError> {
        SinglyLinkedSequence::pop_back(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        SinglyLinkedSequence::get(self, index)
    }

    #[inline]
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        SinglyLinkedSequence::index_of(self, value)
    }

    #[inline]
    fn iter(&self) -> Iter<'_, T> {
        SinglyLinkedSequence::iter(self)
    }
}

impl<T> Default for SinglyLinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for SinglyLinkedSequence<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for SinglyLinkedSequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedSequence<T> {}

impl<T> FromIterator<T> for SinglyLinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

/// Borrowing forward iterator over a [`SinglyLinkedSequence`].
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        // `remaining` bounds the walk: even a defective link repair
        // cannot turn iteration into an endless loop.
        if self.remaining == 0 {
            return None;
        }

        let node = &self.nodes[self.cursor];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> core::iter::FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming iterator that drains the sequence front to back.
pub struct IntoIter<T> {
    seq: SinglyLinkedSequence<T>,
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

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> core::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { seq: self }
    }
}
