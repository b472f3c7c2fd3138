//! The shared operation contract implemented by both sequence variants.

use crate::SequenceError;

/// An ordered, mutable sequence of elements.
///
/// Both [`SinglyLinkedSequence`](crate::SinglyLinkedSequence) and
/// [`DoublyLinkedSequence`](crate::DoublyLinkedSequence) implement this
/// trait with identical semantics; they differ only in the cost of
/// positional and tail-adjacent operations. Code written against
/// `Sequence` can swap variants freely.
///
/// # Example
///
/// ```
/// use linkseq::{Sequence, SinglyLinkedSequence, DoublyLinkedSequence};
///
/// fn sum<S: Sequence<i32>>(seq: &S) -> i32 {
///     seq.iter().sum()
/// }
///
/// let mut a: SinglyLinkedSequence<i32> = SinglyLinkedSequence::new();
/// let mut b: DoublyLinkedSequence<i32> = DoublyLinkedSequence::new();
/// a.extend([1, 2, 3]);
/// b.extend([1, 2, 3]);
///
/// assert_eq!(sum(&a), 6);
/// assert_eq!(sum(&b), 6);
/// ```
pub trait Sequence<T> {
    /// Borrowing forward iterator over the sequence's values.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence is empty.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds a value at the end of the sequence. O(1).
    fn append(&mut self, value: T);

    /// Adds a value at the start of the sequence. O(1).
    fn prepend(&mut self, value: T);

    /// Appends every value produced by `values`, in order.
    ///
    /// No-op on an empty input.
    fn extend<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        for value in values {
            self.append(value);
        }
    }

    /// Inserts `value` before position `index`; `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if `index > len`. On error
    /// the sequence is left untouched: no node is allocated and no link
    /// is modified.
    fn insert(&mut self, index: usize, value: T) -> Result<(), SequenceError>;

    /// Removes the first element equal to `value`.
    ///
    /// Returns `true` if an element was removed, `false` if no element
    /// compared equal. Only the first match in forward order is removed.
    fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq;

    /// Removes and returns the first value.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] if the sequence is empty.
    fn pop_front(&mut self) -> Result<T, SequenceError>;

    /// Removes and returns the last value.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] if the sequence is empty.
    fn pop_back(&mut self) -> Result<T, SequenceError>;

    /// Returns a reference to the value at `index`, or `None` if
    /// `index >= len`. Never mutates.
    fn get(&self, index: usize) -> Option<&T>;

    /// Returns the 0-based position of the first element equal to
    /// `value`, or `None` if no element compares equal. Never mutates.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns a fresh forward iterator from the head.
    ///
    /// Each call restarts traversal. The iterator borrows the sequence,
    /// so the sequence cannot be mutated while one is live.
    fn iter(&self) -> Self::Iter<'_>;
}
