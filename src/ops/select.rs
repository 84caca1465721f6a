//! Element projection: [`Select`].

use crate::cursor::{Cursor, Iter};
use crate::sequence::{SeqBound, Sequence};

/// Applies a projection to every element of `S`.
pub struct Select<S, F> {
    source: S,
    projection: F,
}

impl<S, F> Select<S, F> {
    pub(crate) fn new(source: S, projection: F) -> Self {
        Self { source, projection }
    }
}

impl<S, O, F> Sequence for Select<S, F>
where
    S: Sequence,
    O: SeqBound,
    F: Fn(&S::Item) -> O,
{
    type Item = O;
    type Cursor<'a>
        = SelectCursor<S::Cursor<'a>, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SelectCursor {
            source: self.source.cursor(),
            projection: &self.projection,
        }
    }

    fn to_vec(&self) -> Vec<O> {
        match self.source.realized() {
            Some(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push((self.projection)(item));
                }
                out
            }
            None => Iter::new(self.cursor()).collect(),
        }
    }
}

pub struct SelectCursor<C, F> {
    source: C,
    projection: F,
}

impl<C, O, F> Cursor for SelectCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> O,
{
    type Item = O;

    fn step(&mut self) -> Option<O> {
        let item = self.source.step()?;
        Some((self.projection)(&item))
    }
}
