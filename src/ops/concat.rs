//! Sequence concatenation and set union: [`Concat`], [`Union`],
//! [`UnionWith`].

use std::collections::HashSet;
use std::hash::Hash;

use crate::cursor::{Cursor, Iter};
use crate::sequence::Sequence;

/// All of `A`, then all of `B`.
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor<'a>
        = ConcatCursor<A::Cursor<'a>, B::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ConcatCursor {
            first: self.first.cursor(),
            second: self.second.cursor(),
            on_second: false,
        }
    }

    fn to_vec(&self) -> Vec<A::Item> {
        match (self.first.realized(), self.second.realized()) {
            (Some(a), Some(b)) => {
                let mut out = Vec::with_capacity(a.len() + b.len());
                out.extend_from_slice(a);
                out.extend_from_slice(b);
                out
            }
            _ => Iter::new(self.cursor()).collect(),
        }
    }
}

pub struct ConcatCursor<A, B> {
    first: A,
    second: B,
    on_second: bool,
}

impl<A, B> Cursor for ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn step(&mut self) -> Option<A::Item> {
        if !self.on_second {
            if let Some(item) = self.first.step() {
                return Some(item);
            }
            self.on_second = true;
        }
        self.second.step()
    }
}

/// Every value present in `A` or `B`, each exactly once, hash-set policy.
pub struct Union<A, B> {
    first: A,
    second: B,
}

impl<A, B> Union<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Sequence for Union<A, B>
where
    A: Sequence,
    A::Item: Eq + Hash,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor<'a>
        = UnionCursor<A::Cursor<'a>, B::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        UnionCursor {
            source: ConcatCursor {
                first: self.first.cursor(),
                second: self.second.cursor(),
                on_second: false,
            },
            seen: HashSet::new(),
        }
    }
}

pub struct UnionCursor<A, B>
where
    A: Cursor,
{
    source: ConcatCursor<A, B>,
    seen: HashSet<A::Item>,
}

impl<A, B> Cursor for UnionCursor<A, B>
where
    A: Cursor,
    A::Item: Eq + Hash + Clone,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn step(&mut self) -> Option<A::Item> {
        loop {
            match self.source.step() {
                Some(item) => {
                    if self.seen.insert(item.clone()) {
                        return Some(item);
                    }
                }
                None => {
                    // Working set is released as soon as the traversal
                    // naturally exhausts, not when the cursor is dropped.
                    self.seen.clear();
                    return None;
                }
            }
        }
    }
}

/// [`Union`] under a caller-supplied equality; membership degrades to a
/// linear scan over the values emitted so far.
pub struct UnionWith<A, B, E> {
    first: A,
    second: B,
    eq: E,
}

impl<A, B, E> UnionWith<A, B, E> {
    pub(crate) fn new(first: A, second: B, eq: E) -> Self {
        Self { first, second, eq }
    }
}

impl<A, B, E> Sequence for UnionWith<A, B, E>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    E: Fn(&A::Item, &A::Item) -> bool,
{
    type Item = A::Item;
    type Cursor<'a>
        = UnionWithCursor<A::Cursor<'a>, B::Cursor<'a>, &'a E>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        UnionWithCursor {
            source: ConcatCursor {
                first: self.first.cursor(),
                second: self.second.cursor(),
                on_second: false,
            },
            seen: Vec::new(),
            eq: &self.eq,
        }
    }
}

pub struct UnionWithCursor<A, B, E>
where
    A: Cursor,
{
    source: ConcatCursor<A, B>,
    seen: Vec<A::Item>,
    eq: E,
}

impl<A, B, E> Cursor for UnionWithCursor<A, B, E>
where
    A: Cursor,
    A::Item: Clone,
    B: Cursor<Item = A::Item>,
    E: Fn(&A::Item, &A::Item) -> bool,
{
    type Item = A::Item;

    fn step(&mut self) -> Option<A::Item> {
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
