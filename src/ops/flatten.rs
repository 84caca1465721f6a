//! The flattening state machine: [`SelectMany`] and its pair-producing
//! variant [`SelectManyPairs`].
//!
//! Both hold `{outer cursor, current inner iterator or none}` and advance
//! iteratively: when no inner iterator is live, outer elements are pulled
//! (and their extracted sequences adopted) until one yields; an outer
//! element whose extracted sequence is empty contributes nothing and is
//! silently skipped. Exhaustion is reached only when the outer cursor is
//! exhausted and no inner iterator remains.

use crate::cursor::Cursor;
use crate::sequence::{SeqBound, Sequence};

/// Flattens the sequences extracted from each element, yielding inner
/// values.
pub struct SelectMany<S, F> {
    source: S,
    extract: F,
}

impl<S, F> SelectMany<S, F> {
    pub(crate) fn new(source: S, extract: F) -> Self {
        Self { source, extract }
    }
}

impl<S, F, I> Sequence for SelectMany<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> I,
    I: IntoIterator,
    I::Item: SeqBound,
{
    type Item = I::Item;
    type Cursor<'a>
        = SelectManyCursor<S::Cursor<'a>, &'a F, I>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SelectManyCursor {
            source: self.source.cursor(),
            extract: &self.extract,
            inner: None,
        }
    }
}

pub struct SelectManyCursor<C, F, I>
where
    I: IntoIterator,
{
    source: C,
    extract: F,
    inner: Option<I::IntoIter>,
}

impl<C, F, I> Cursor for SelectManyCursor<C, F, I>
where
    C: Cursor,
    F: Fn(&C::Item) -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    fn step(&mut self) -> Option<I::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(value) = inner.next() {
                    return Some(value);
                }
                self.inner = None;
            }
            let outer = self.source.step()?;
            self.inner = Some((self.extract)(&outer).into_iter());
        }
    }
}

/// Flattens like [`SelectMany`], but yields `(outer, inner)` pairs so each
/// inner value stays attached to the element it came from.
pub struct SelectManyPairs<S, F> {
    source: S,
    extract: F,
}

impl<S, F> SelectManyPairs<S, F> {
    pub(crate) fn new(source: S, extract: F) -> Self {
        Self { source, extract }
    }
}

impl<S, F, I> Sequence for SelectManyPairs<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> I,
    I: IntoIterator,
    I::Item: SeqBound,
{
    type Item = (S::Item, I::Item);
    type Cursor<'a>
        = SelectManyPairsCursor<S::Cursor<'a>, &'a F, I>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SelectManyPairsCursor {
            source: self.source.cursor(),
            extract: &self.extract,
            current: None,
        }
    }
}

pub struct SelectManyPairsCursor<C, F, I>
where
    C: Cursor,
    I: IntoIterator,
{
    source: C,
    extract: F,
    current: Option<(C::Item, I::IntoIter)>,
}

impl<C, F, I> Cursor for SelectManyPairsCursor<C, F, I>
where
    C: Cursor,
    C::Item: Clone,
    F: Fn(&C::Item) -> I,
    I: IntoIterator,
{
    type Item = (C::Item, I::Item);

    fn step(&mut self) -> Option<(C::Item, I::Item)> {
        loop {
            if let Some((outer, inner)) = &mut self.current {
                if let Some(value) = inner.next() {
                    return Some((outer.clone(), value));
                }
                self.current = None;
            }
            let outer = self.source.step()?;
            let inner = (self.extract)(&outer).into_iter();
            self.current = Some((outer, inner));
        }
    }
}
