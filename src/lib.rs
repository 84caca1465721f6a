//! # lazeq
//!
//! **Lazy, chainable sequence queries** for Rust: LINQ-style operators over
//! pull-based cursors. Build a chain of transformations over vectors, maps,
//! ranges, or any iterable, and nothing runs until a terminal call drives
//! the chain to a concrete value.
//!
//! ## Key features
//!
//! - **Deferred evaluation** — operators build nodes, never results; every
//!   traversal re-evaluates the chain from its sources
//! - **Full operator set** — `filter`, `select`, `select_many`, `take`,
//!   `skip`, `page`, `distinct`, `union`, `concat`, `group_by`,
//!   `order_by`, `join`, `group_join`, `of_type`
//! - **Rich finalizers** — `to_vec`, `first`, `single`, `count`,
//!   `aggregate`, `sum`, `min`/`max`, `element_at`, `is_equal`,
//!   `is_elements_equal`, and more
//! - **Native fast paths** — chains sitting directly on in-memory data
//!   substitute eager bulk operations for the pull protocol, with
//!   identical output
//! - **Type-safe** — one `Sequence` trait, statically dispatched; no
//!   boxing anywhere in a chain
//!
//! ## Quick start
//!
//! ```
//! use lazeq::{from, Sequence};
//!
//! let even_tens = from(vec![1, 2, 3, 4, 5])
//!     .filter(|n: &i32| n % 2 == 0)
//!     .select(|n: &i32| n * 10)
//!     .to_vec();
//! assert_eq!(even_tens, vec![20, 40]);
//! ```
//!
//! ## Core concepts
//!
//! ### Sequences
//!
//! A [`Sequence`] is anything traversable front-to-back, any number of
//! independent times. Sources ([`Items`], [`Range`], [`Repeat`]) sit at
//! the bottom; every operator wraps its upstream sequence and is itself a
//! sequence, so chains nest without bound. Use [`from`] to wrap native
//! shapes — vectors, arrays, slices, maps (as `(key, value)` pairs), or
//! integer ranges — in the right source adapter:
//!
//! ```
//! use lazeq::{from, range, Sequence};
//!
//! assert_eq!(from([3, 1, 2]).order_by(|n: &i32| *n).to_vec(), vec![1, 2, 3]);
//! assert_eq!(range(5, 2).to_vec(), vec![5, 4, 3]);
//! ```
//!
//! ### Cursors
//!
//! Traversal state lives in a [`Cursor`]: a single-use, forward-only
//! handle obtained per traversal. One [`step`](Cursor::step) does one unit
//! of upstream work, so side effects in predicates and selectors happen in
//! strict left-to-right order, once per visited element, and elements a
//! downstream consumer never asks for are never visited:
//!
//! ```
//! use lazeq::{from, Sequence};
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let taken = from(vec![1, 2, 3, 4, 5])
//!     .select(|n: &i32| {
//!         calls.set(calls.get() + 1);
//!         n * 2
//!     })
//!     .take(2)
//!     .to_vec();
//! assert_eq!(taken, vec![2, 4]);
//! assert_eq!(calls.get(), 2);
//! ```
//!
//! ### Grouping and joining
//!
//! [`group_by`](Sequence::group_by) partitions into [`Grouping`]s — each a
//! key plus a realized sequence of its elements, in first-encountered-key
//! order. [`join`](Sequence::join) (inner) and
//! [`group_join`](Sequence::group_join) (left-outer) match two sequences
//! on extracted keys through the same single-pass grouping engine.
//!
//! ### Fast paths
//!
//! Sequences backed by concrete memory report it through
//! [`realized`](Sequence::realized); finalizers and eligible operators
//! then switch to eager bulk operations. The substitution never changes
//! output, only cost. `take`/`skip` preserve realized backing, so e.g.
//! `from(v).skip(10).count()` is O(1).
//!
//! ## Error handling
//!
//! Only cardinality-demanding finalizers can fail —
//! [`single`](Sequence::single), seedless
//! [`aggregate`](Sequence::aggregate), [`try_first`](Sequence::try_first)
//! — returning [`SequenceError`].
//! Panics in caller-supplied closures are never caught.
//!
//! ## Module overview
//!
//! - [`sequence`] — the `Sequence` trait: all operators and finalizers
//! - [`cursor`] — the traversal contract and the `Iterator` bridge
//! - [`source`] — leaf producers and the `from` dispatcher
//! - [`ops`] — operator node implementations
//! - [`error`] — the finalizer error type
//! - [`testing`] — assertion helpers for sequence tests

pub mod cursor;
pub mod error;
pub mod ops;
pub mod sequence;
pub mod source;
pub mod testing;

mod finalize;

pub use cursor::{Cursor, Iter};
pub use error::{Result, SequenceError};
pub use ops::group::Grouping;
pub use ops::order::Compare;
pub use sequence::{SeqBound, Sequence};
pub use source::{IntoSequence, Items, Range, Repeat, from, from_iter, range, repeat};
