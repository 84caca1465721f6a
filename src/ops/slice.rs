//! Positional slicing: [`Take`], [`Skip`], and the chunking [`Page`].
//!
//! `Take` and `Skip` over a realized upstream stay realized (they expose
//! the corresponding subslice), so downstream fast paths keep working.

use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Yields at most the first `count` elements of `S`.
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor<'a>
        = TakeCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        TakeCursor {
            source: self.source.cursor(),
            remaining: self.count,
        }
    }

    fn realized(&self) -> Option<&[S::Item]> {
        self.source
            .realized()
            .map(|items| &items[..self.count.min(items.len())])
    }
}

pub struct TakeCursor<C> {
    source: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn step(&mut self) -> Option<C::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.source.step() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }
}

/// Discards the first `count` elements of `S` and yields the rest.
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor<'a>
        = SkipCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SkipCursor {
            source: self.source.cursor(),
            remaining: self.count,
        }
    }

    fn realized(&self) -> Option<&[S::Item]> {
        self.source
            .realized()
            .map(|items| &items[self.count.min(items.len())..])
    }
}

pub struct SkipCursor<C> {
    source: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn step(&mut self) -> Option<C::Item> {
        // The discard burst runs on the first step only.
        while self.remaining > 0 {
            self.remaining -= 1;
            if self.source.step().is_none() {
                self.remaining = 0;
                return None;
            }
        }
        self.source.step()
    }
}

/// Chunks `S` into pages of at most `size` elements.
pub struct Page<S> {
    source: S,
    size: usize,
}

impl<S> Page<S> {
    pub(crate) fn new(source: S, size: usize) -> Self {
        Self { source, size }
    }
}

impl<S: Sequence> Sequence for Page<S> {
    type Item = Vec<S::Item>;
    type Cursor<'a>
        = PageCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        PageCursor {
            source: self.source.cursor(),
            size: self.size,
        }
    }
}

pub struct PageCursor<C> {
    source: C,
    size: usize,
}

impl<C: Cursor> Cursor for PageCursor<C> {
    type Item = Vec<C::Item>;

    fn step(&mut self) -> Option<Vec<C::Item>> {
        if self.size == 0 {
            return None;
        }
        let mut page = Vec::new();
        while page.len() < self.size {
            match self.source.step() {
                Some(item) => page.push(item),
                None => break,
            }
        }
        if page.is_empty() { None } else { Some(page) }
    }
}
