//! Key-based joins: the inner [`Join`] and the left-outer [`GroupJoin`].
//!
//! Both build a grouping lookup over the entire inner source the first
//! time a traversal needs it, then probe it while pulling the outer source
//! one element at a time:
//!
//! - `Join` pairs each outer element with *every* matching inner element;
//!   outer elements with no match emit nothing.
//! - `GroupJoin` emits exactly one output per outer element, paired with
//!   its full (possibly empty) matched group.
//!
//! The lookup belongs to one traversal and is released when the outer
//! source exhausts.

use std::hash::Hash;

use crate::cursor::Cursor;
use crate::ops::group::GroupMap;
use crate::sequence::{SeqBound, Sequence};

/// Inner join of `Outer` against `Inner` on matching keys.
pub struct Join<Outer, Inner, OK, IK, RF> {
    outer: Outer,
    inner: Inner,
    outer_key: OK,
    inner_key: IK,
    result: RF,
}

impl<Outer, Inner, OK, IK, RF> Join<Outer, Inner, OK, IK, RF> {
    pub(crate) fn new(outer: Outer, inner: Inner, outer_key: OK, inner_key: IK, result: RF) -> Self {
        Self {
            outer,
            inner,
            outer_key,
            inner_key,
            result,
        }
    }
}

impl<Outer, Inner, K, O, OK, IK, RF> Sequence for Join<Outer, Inner, OK, IK, RF>
where
    Outer: Sequence,
    Inner: Sequence,
    K: Eq + Hash + SeqBound,
    OK: Fn(&Outer::Item) -> K,
    IK: Fn(&Inner::Item) -> K,
    O: SeqBound,
    RF: Fn(&Outer::Item, &Inner::Item) -> O,
{
    type Item = O;
    type Cursor<'a>
        = JoinCursor<'a, Outer, Inner, OK, IK, RF, K>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        JoinCursor {
            outer: self.outer.cursor(),
            inner: &self.inner,
            outer_key: &self.outer_key,
            inner_key: &self.inner_key,
            result: &self.result,
            lookup: None,
            current: None,
            done: false,
        }
    }
}

pub struct JoinCursor<'a, Outer, Inner, OK, IK, RF, K>
where
    Outer: Sequence + 'a,
    Inner: Sequence,
{
    outer: Outer::Cursor<'a>,
    inner: &'a Inner,
    outer_key: &'a OK,
    inner_key: &'a IK,
    result: &'a RF,
    lookup: Option<GroupMap<K, Inner::Item>>,
    /// Outer element currently being matched, its key, and the index of
    /// the next match to emit.
    current: Option<(Outer::Item, K, usize)>,
    done: bool,
}

impl<'a, Outer, Inner, K, O, OK, IK, RF> Cursor for JoinCursor<'a, Outer, Inner, OK, IK, RF, K>
where
    Outer: Sequence,
    Inner: Sequence,
    K: Eq + Hash + Clone,
    OK: Fn(&Outer::Item) -> K,
    IK: Fn(&Inner::Item) -> K,
    RF: Fn(&Outer::Item, &Inner::Item) -> O,
{
    type Item = O;

    fn step(&mut self) -> Option<O> {
        loop {
            if let Some((outer_item, key, next)) = self.current.take() {
                let emitted = self
                    .lookup
                    .as_ref()
                    .and_then(|map| map.get(&key))
                    .filter(|matches| next < matches.len())
                    .map(|matches| (self.result)(&outer_item, &matches[next]));
                if let Some(value) = emitted {
                    self.current = Some((outer_item, key, next + 1));
                    return Some(value);
                }
                // This outer element is spent; fall through to pull the next.
            }
            if self.done {
                return None;
            }
            if self.lookup.is_none() {
                self.lookup = Some(build_lookup(self.inner, self.inner_key));
            }
            match self.outer.step() {
                Some(outer_item) => {
                    let key = (self.outer_key)(&outer_item);
                    let matched = self
                        .lookup
                        .as_ref()
                        .and_then(|map| map.get(&key))
                        .is_some();
                    if matched {
                        self.current = Some((outer_item, key, 0));
                    }
                    // Unmatched outer elements emit nothing.
                }
                None => {
                    self.lookup = None;
                    self.done = true;
                    return None;
                }
            }
        }
    }
}

/// Left-outer grouped join of `Outer` against `Inner`.
pub struct GroupJoin<Outer, Inner, OK, IK, RF> {
    outer: Outer,
    inner: Inner,
    outer_key: OK,
    inner_key: IK,
    result: RF,
}

impl<Outer, Inner, OK, IK, RF> GroupJoin<Outer, Inner, OK, IK, RF> {
    pub(crate) fn new(outer: Outer, inner: Inner, outer_key: OK, inner_key: IK, result: RF) -> Self {
        Self {
            outer,
            inner,
            outer_key,
            inner_key,
            result,
        }
    }
}

impl<Outer, Inner, K, O, OK, IK, RF> Sequence for GroupJoin<Outer, Inner, OK, IK, RF>
where
    Outer: Sequence,
    Inner: Sequence,
    K: Eq + Hash + SeqBound,
    OK: Fn(&Outer::Item) -> K,
    IK: Fn(&Inner::Item) -> K,
    O: SeqBound,
    RF: Fn(&Outer::Item, &[Inner::Item]) -> O,
{
    type Item = O;
    type Cursor<'a>
        = GroupJoinCursor<'a, Outer, Inner, OK, IK, RF, K>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        GroupJoinCursor {
            outer: self.outer.cursor(),
            inner: &self.inner,
            outer_key: &self.outer_key,
            inner_key: &self.inner_key,
            result: &self.result,
            lookup: None,
            done: false,
        }
    }
}

pub struct GroupJoinCursor<'a, Outer, Inner, OK, IK, RF, K>
where
    Outer: Sequence + 'a,
    Inner: Sequence,
{
    outer: Outer::Cursor<'a>,
    inner: &'a Inner,
    outer_key: &'a OK,
    inner_key: &'a IK,
    result: &'a RF,
    lookup: Option<GroupMap<K, Inner::Item>>,
    done: bool,
}

impl<'a, Outer, Inner, K, O, OK, IK, RF> Cursor for GroupJoinCursor<'a, Outer, Inner, OK, IK, RF, K>
where
    Outer: Sequence,
    Inner: Sequence,
    K: Eq + Hash + Clone,
    OK: Fn(&Outer::Item) -> K,
    IK: Fn(&Inner::Item) -> K,
    RF: Fn(&Outer::Item, &[Inner::Item]) -> O,
{
    type Item = O;

    fn step(&mut self) -> Option<O> {
        if self.done {
            return None;
        }
        if self.lookup.is_none() {
            self.lookup = Some(build_lookup(self.inner, self.inner_key));
        }
        match self.outer.step() {
            Some(outer_item) => {
                let key = (self.outer_key)(&outer_item);
                let matches = self
                    .lookup
                    .as_ref()
                    .and_then(|map| map.get(&key))
                    .unwrap_or(&[]);
                Some((self.result)(&outer_item, matches))
            }
            None => {
                self.lookup = None;
                self.done = true;
                None
            }
        }
    }
}

/// One eager pass over the inner source, keyed by its key selector.
fn build_lookup<Inner, K, IK>(inner: &Inner, inner_key: &IK) -> GroupMap<K, Inner::Item>
where
    Inner: Sequence,
    K: Eq + Hash + Clone,
    IK: Fn(&Inner::Item) -> K,
{
    let mut map = GroupMap::new();
    let mut cursor = inner.cursor();
    while let Some(item) = cursor.step() {
        map.insert(inner_key(&item), item);
    }
    map
}
