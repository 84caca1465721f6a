//! Error types reported by terminal operations.
//!
//! Only finalizers that place a cardinality demand on their input can fail:
//! [`single`](crate::Sequence::single) and friends, the seedless
//! [`aggregate`](crate::Sequence::aggregate), and
//! [`try_first`](crate::Sequence::try_first). Everything else is total.
//! Panics raised inside caller-supplied predicates, selectors, or comparers
//! are never caught or wrapped; they surface at the step that invoked them.

use thiserror::Error;

/// Failure raised by a finalizer whose cardinality demand was not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The sequence produced no items where at least one was required.
    #[error("sequence contains no items")]
    EmptySequence,
    /// A second item was seen where exactly one was required.
    #[error("sequence contains multiple items")]
    MultipleItems,
}

/// Convenience alias used by all fallible finalizers.
pub type Result<T> = std::result::Result<T, SequenceError>;
