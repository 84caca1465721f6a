//! Predicate filtering: [`Where`] and the downcasting [`OfType`].

use std::any::Any;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::cursor::{Cursor, Iter};
use crate::sequence::{SeqBound, Sequence};

/// Keeps the elements of `S` satisfying a predicate.
pub struct Where<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Where<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for Where<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = WhereCursor<S::Cursor<'a>, &'a P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        WhereCursor {
            source: self.source.cursor(),
            predicate: &self.predicate,
        }
    }

    fn to_vec(&self) -> Vec<S::Item> {
        match self.source.realized() {
            Some(items) => {
                let mut out = Vec::new();
                for item in items {
                    if (self.predicate)(item) {
                        out.push(item.clone());
                    }
                }
                out
            }
            None => Iter::new(self.cursor()).collect(),
        }
    }
}

pub struct WhereCursor<C, P> {
    source: C,
    predicate: P,
}

impl<C, P> Cursor for WhereCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn step(&mut self) -> Option<C::Item> {
        loop {
            let item = self.source.step()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }
}

/// Keeps the type-erased elements of `S` that downcast to `U`, yielding
/// them as `U`.
pub struct OfType<S, U> {
    source: S,
    _target: PhantomData<fn() -> U>,
}

impl<S, U> OfType<S, U> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            _target: PhantomData,
        }
    }
}

impl<S, U> Sequence for OfType<S, U>
where
    S: Sequence<Item = Rc<dyn Any>>,
    U: SeqBound,
{
    type Item = U;
    type Cursor<'a>
        = OfTypeCursor<S::Cursor<'a>, U>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        OfTypeCursor {
            source: self.source.cursor(),
            _target: PhantomData,
        }
    }
}

pub struct OfTypeCursor<C, U> {
    source: C,
    _target: PhantomData<fn() -> U>,
}

impl<C, U> Cursor for OfTypeCursor<C, U>
where
    C: Cursor<Item = Rc<dyn Any>>,
    U: SeqBound,
{
    type Item = U;

    fn step(&mut self) -> Option<U> {
        loop {
            let value = self.source.step()?;
            if let Some(hit) = value.downcast_ref::<U>() {
                return Some(hit.clone());
            }
        }
    }
}
