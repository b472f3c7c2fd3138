//! Linked sequences with slab-backed node storage.
//!
//! This crate provides two generic, ordered, mutable sequence containers
//! built for O(1) front/back insertion and removal:
//!
//! - [`SinglyLinkedSequence`] - forward links only. Tail append is O(1)
//!   via a cached tail key, but anything that needs a tail predecessor
//!   (`pop_back`, removing the last element) scans forward from the head.
//! - [`DoublyLinkedSequence`] - forward and backward links. Positional
//!   operations walk from whichever end is closer, so `get`/`insert` cost
//!   O(min(i, n-i)) instead of O(i).
//!
//! Both implement the [`Sequence`] trait, the shared operation contract.
//!
//! # Design: keys, not pointers
//!
//! Nodes live in a [`slab::Slab`] and link to each other by slab key
//! rather than by owning pointer:
//!
//! ```text
//! Box<Node<T>> chain  - owning pointers, recursive drop, pointer surgery
//! Slab<Node<T>>       - stable keys, flat drop, unlink + free the slot
//! ```
//!
//! Removal is "splice the neighbors, free the slot" - there is no
//! double-free or use-after-free to get wrong, and dropping a sequence
//! drops the slab (and every node in it) without walking the chain.
//! Keys are plain `usize` with `usize::MAX` as the "no link" sentinel;
//! node types and keys are implementation details and never escape the
//! public API.
//!
//! # Quick Start
//!
//! ```
//! use linkseq::DoublyLinkedSequence;
//!
//! let mut seq: DoublyLinkedSequence<i32> = DoublyLinkedSequence::new();
//!
//! seq.append(1);
//! seq.append(2);
//! seq.append(3);
//! seq.insert(1, 9).unwrap();
//! seq.remove(&2);
//!
//! let values: Vec<_> = seq.iter().copied().collect();
//! assert_eq!(values, vec![1, 9, 3]);
//! assert_eq!(seq.index_of(&3), Some(2));
//! ```
//!
//! # Error Policy
//!
//! Two failure kinds, both in [`SequenceError`]:
//!
//! - `insert` past the end fails with [`SequenceError::OutOfRange`] and
//!   touches nothing (no node allocated, no link modified).
//! - `pop_front`/`pop_back` on an empty sequence fail with
//!   [`SequenceError::EmptyCollection`].
//!
//! Everything else is total: `get` and `index_of` report absence with
//! `None`, `remove` reports found/not-found with `bool`.
//!
//! # Concurrency
//!
//! None. A sequence is a single-threaded value; callers needing shared
//! access wrap it in their own lock. Iterators borrow the sequence, so
//! mutation during iteration is rejected at compile time.

#![warn(missing_docs)]

mod error;
mod index;

pub mod doubly;
pub mod sequence;
pub mod singly;

pub use doubly::DoublyLinkedSequence;
pub use error::SequenceError;
pub use sequence::Sequence;
pub use singly::SinglyLinkedSequence;
