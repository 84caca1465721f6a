//! Deduplication: [`Distinct`] (hash-set policy) and [`DistinctWith`]
//! (caller-supplied equality, linear-scan policy).
//!
//! Both keep first occurrences in their original order. The seen working
//! set belongs to a single traversal and is cleared the moment that
//! traversal naturally exhausts.

use std::collections::HashSet;
use std::hash::Hash;

use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Drops duplicate values using hash-set membership.
pub struct Distinct<S> {
    source: S,
}

impl<S> Distinct<S> {
    pub(crate) fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: Eq + Hash,
{
    type Item = S::Item;
    type Cursor<'a>
        = DistinctCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        DistinctCursor {
            source: self.source.cursor(),
            seen: HashSet::new(),
        }
    }
}

pub struct DistinctCursor<C>
where
    C: Cursor,
{
    source: C,
    seen: HashSet<C::Item>,
}

impl<C> Cursor for DistinctCursor<C>
where
    C: Cursor,
    C::Item: Eq + Hash + Clone,
{
    type Item = C::Item;

    fn step(&mut self) -> Option<C::Item> {
        loop {
            match self.source.step() {
                Some(item) => {
                    if self.seen.insert(item.clone()) {
                        return Some(item);
                    }
                }
                None => {
                    self.seen.clear();
                    return None;
                }
            }
        }
    }
}

/// Drops duplicates under a caller-supplied equality. Arbitrary equality
/// cannot be hashed, so membership is a linear scan — O(n²) worst case.
pub struct DistinctWith<S, E> {
    source: S,
    eq: E,
}

impl<S, E> DistinctWith<S, E> {
    pub(crate) fn new(source: S, eq: E) -> Self {
        Self { source, eq }
    }
}

impl<S, E> Sequence for DistinctWith<S, E>
where
    S: Sequence,
    E: Fn(&S::Item, &S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = DistinctWithCursor<S::Cursor<'a>, &'a E>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        DistinctWithCursor {
            source: self.source.cursor(),
            seen: Vec::new(),
            eq: &self.eq,
        }
    }
}

pub struct DistinctWithCursor<C, E>
where
    C: Cursor,
{
    source: C,
    seen: Vec<C::Item>,
    eq: E,
}

impl<C, E> Cursor for DistinctWithCursor<C, E>
where
    C: Cursor,
    C::Item: Clone,
    E: Fn(&C::Item, &C::Item) -> bool,
{
    type Item = C::Item;

    fn step(&mut self) -> Option<C::Item> {
        loop {
            match self.source.step() {
                Some(item) => {
                    if !self.seen.iter().any(|seen| (self.eq)(seen, &item)) {
                        self.seen.push(item.clone());
                        return Some(item);
                    }
                }
                None => {
                    self.seen.clear();
                    return None;
                }
            }
        }
    }
}
