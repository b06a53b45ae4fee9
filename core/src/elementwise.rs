//! Element-wise lazy transforms: map, filter and reject.
//!
//! These nodes compose per element with no intermediate buffer: a chain of
//! any length fuses into a single traversal when a terminal call runs.

use crate::control::Flow;
use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;

/// Lazily applies a mapper function to every parent element.
#[derive(Debug, Clone)]
pub struct MapSequence<S, F> {
    parent: S,
    mapper: F,
}

impl<S, F> MapSequence<S, F> {
    pub(crate) const fn new(parent: S, mapper: F) -> Self {
        Self { parent, mapper }
    }
}

impl<S, B, F> Sequence for MapSequence<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> B,
{
    type Item = B;

    fn each<C>(&self, mut consumer: C) -> SeqResult<Flow>
    where
        C: FnMut(B) -> Flow,
    {
        self.parent.each(|item| consumer((self.mapper)(item)))
    }

    /// Index arithmetic shortcut: touches exactly one parent element.
    fn get(&self, index: usize) -> SeqResult<B> {
        Ok((self.mapper)(self.parent.get(index)?))
    }

    fn len(&self) -> SeqResult<usize> {
        self.parent.len()
    }

    fn is_unbounded(&self) -> bool {
        self.parent.is_unbounded()
    }
}

/// Lazily forwards only the parent elements matching a predicate.
#[derive(Debug, Clone)]
pub struct FilterSequence<S, P> {
    parent: S,
    predicate: P,
}

impl<S, P> FilterSequence<S, P> {
    pub(crate) const fn new(parent: S, predicate: P) -> Self {
        Self { parent, predicate }
    }
}

impl<S, P> Sequence for FilterSequence<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn each<C>(&self, mut consumer: C) -> SeqResult<Flow>
    where
        C: FnMut(S::Item) -> Flow,
    {
        self.parent.each(|item| {
            if (self.predicate)(&item) {
                consumer(item)
            } else {
                Flow::Continue
            }
        })
    }

    /// No index arithmetic is possible here: scans the parent from the
    /// start and stops at the `index`-th surviving element.
    fn get(&self, index: usize) -> SeqResult<S::Item> {
        let mut found = None;
        let mut survivors = 0_usize;
        self.parent.each(|item| {
            if (self.predicate)(&item) {
                if survivors == index {
                    found = Some(item);
                    return Flow::Stop;
                }
                survivors += 1;
            }
            Flow::Continue
        })?;
        found.ok_or(SeqError::IndexOutOfBounds {
            index,
            len: survivors,
        })
    }

    /// Counting survivors would require a traversal, so length is
    /// intentionally unsupported.
    fn len(&self) -> SeqResult<usize> {
        Err(SeqError::LengthUndefined { node: "filter" })
    }

    fn is_unbounded(&self) -> bool {
        self.parent.is_unbounded()
    }
}

/// Lazily drops the parent elements matching a predicate.
#[derive(Debug, Clone)]
pub struct RejectSequence<S, P> {
    parent: S,
    predicate: P,
}

impl<S, P> RejectSequence<S, P> {
    pub(crate) const fn new(parent: S, predicate: P) -> Self {
        Self { parent, predicate }
    }
}

impl<S, P> Sequence for RejectSequence<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn each<C>(&self, mut consumer: C) -> SeqResult<Flow>
    where
        C: FnMut(S::Item) -> Flow,
    {
        self.parent.each(|item| {
            if (self.predicate)(&item) {
                Flow::Continue
            } else {
                consumer(item)
            }
        })
    }

    fn get(&self, index: usize) -> SeqResult<S::Item> {
        let mut found = None;
        let mut survivors = 0_usize;
        self.parent.each(|item| {
            if !(self.predicate)(&item) {
                if survivors == index {
                    found = Some(item);
                    return Flow::Stop;
                }
                survivors += 1;
            }
            Flow::Continue
        })?;
        found.ok_or(SeqError::IndexOutOfBounds {
            index,
            len: survivors,
        })
    }

    fn len(&self) -> SeqResult<usize> {
        Err(SeqError::LengthUndefined { node: "reject" })
    }

    fn is_unbounded(&self) -> bool {
        self.parent.is_unbounded()
    }
}
