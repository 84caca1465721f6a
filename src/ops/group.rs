//! The grouping engine: single-pass, hash-keyed partitioning consumed
//! lazily by [`GroupBy`] and, as a lookup, by the join operators.
//!
//! The group map is built in one eager pass the first time a traversal
//! needs it: every element is keyed by `key(item, position)` and appended,
//! in original relative order, to the list for its key. Keys keep
//! first-encountered order. The map belongs to that one traversal and is
//! gone once its cursor is exhausted or dropped.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cursor::{Cursor, SliceCursor};
use crate::sequence::{SeqBound, Sequence};

/// Insertion-ordered multimap from key to element list.
pub(crate) struct GroupMap<K, V> {
    index: HashMap<K, usize>,
    groups: Vec<(K, Vec<V>)>,
}

impl<K, V> GroupMap<K, V>
where
    K: Eq + Hash + Clone,
{
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&slot) => self.groups[slot].1.push(value),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![value]));
            }
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<&[V]> {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    pub(crate) fn into_groups(self) -> Vec<(K, Vec<V>)> {
        self.groups
    }
}

/// A key paired with the materialized list of elements sharing it.
///
/// Produced only by [`GroupBy`]; itself a realized [`Sequence`] over its
/// elements, so groups chain like any other producer.
#[derive(Debug, Clone)]
pub struct Grouping<K, T> {
    key: K,
    elements: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    pub(crate) fn new(key: K, elements: Vec<T>) -> Self {
        Self { key, elements }
    }

    /// The key shared by every element of this group.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The group's elements, in their original relative order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }
}

impl<K: SeqBound, T: SeqBound> Sequence for Grouping<K, T> {
    type Item = T;
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(&self.elements)
    }

    fn realized(&self) -> Option<&[T]> {
        Some(&self.elements)
    }
}

/// Partitions `S` into one [`Grouping`] per distinct key.
pub struct GroupBy<S, KF, EF> {
    source: S,
    key: KF,
    element: EF,
}

impl<S, KF, EF> GroupBy<S, KF, EF> {
    pub(crate) fn new(source: S, key: KF, element: EF) -> Self {
        Self {
            source,
            key,
            element,
        }
    }
}

impl<S, K, E, KF, EF> Sequence for GroupBy<S, KF, EF>
where
    S: Sequence,
    K: Eq + Hash + SeqBound,
    E: SeqBound,
    KF: Fn(&S::Item, usize) -> K,
    EF: Fn(&S::Item) -> E,
{
    type Item = Grouping<K, E>;
    type Cursor<'a>
        = GroupByCursor<S::Cursor<'a>, &'a KF, &'a EF, K, E>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        GroupByCursor {
            source: Some(self.source.cursor()),
            key: &self.key,
            element: &self.element,
            groups: None,
        }
    }
}

pub struct GroupByCursor<C, KF, EF, K, E> {
    source: Option<C>,
    key: KF,
    element: EF,
    groups: Option<std::vec::IntoIter<Grouping<K, E>>>,
}

impl<C, K, E, KF, EF> Cursor for GroupByCursor<C, KF, EF, K, E>
where
    C: Cursor,
    K: Eq + Hash + Clone,
    KF: Fn(&C::Item, usize) -> K,
    EF: Fn(&C::Item) -> E,
{
    type Item = Grouping<K, E>;

    fn step(&mut self) -> Option<Grouping<K, E>> {
        if self.groups.is_none() {
            let mut map = GroupMap::new();
            if let Some(mut source) = self.source.take() {
                let mut position = 0;
                while let Some(item) = source.step() {
                    map.insert((self.key)(&item, position), (self.element)(&item));
                    position += 1;
                }
            }
            let groupings: Vec<_> = map
                .into_groups()
                .into_iter()
                .map(|(key, elements)| Grouping::new(key, elements))
                .collect();
            self.groups = Some(groupings.into_iter());
        }
        self.groups.as_mut()?.next()
    }
}
