//! Prefix and suffix lazy transforms: take and drop.

use crate::control::Flow;
use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;

/// Lazily bounds its parent to the first `count` elements.
///
/// This is the canonical raiser of the stop signal: once the budget is
/// spent, the node signals its parent to stop pulling, so upstream stages
/// (a filter over a large source, an unbounded generator) do no more work
/// than needed.
#[derive(Debug, Clone)]
pub struct TakeSequence<S> {
    parent: S,
    count: usize,
}

impl<S> TakeSequence<S> {
    pub(crate) const fn new(parent: S, count: usize) -> Self {
        Self { parent, count }
    }
}

impl<S: Sequence> Sequence for TakeSequence<S> {
    type Item = S::Item;

    fn each<C>(&self, mut consumer: C) -> SeqResult<Flow>
    where
        C: FnMut(S::Item) -> Flow,
    {
        if self.count == 0 {
            return Ok(Flow::Stop);
        }
        let mut remaining = self.count;
        self.parent.each(|item| {
            remaining -= 1;
            // Deliver the element first; the budget check raises our own
            // stop signal so the parent pulls nothing further.
            if consumer(item).is_stop() || remaining == 0 {
                Flow::Stop
            } else {
                Flow::Continue
            }
        })
    }

    fn get(&self, index: usize) -> SeqResult<S::Item> {
        if index >= self.count {
            return Err(SeqError::IndexOutOfBounds {
                index,
                len: self.count,
            });
        }
        self.parent.get(index)
    }

    fn len(&self) -> SeqResult<usize> {
        Ok(self.parent.len()?.min(self.count))
    }

    /// A take node is always bounded, even over a generated root.
    fn is_unbounded(&self) -> bool {
        false
    }
}

/// Lazily skips the first `count` elements of its parent.
#[derive(Debug, Clone)]
pub struct DropSequence<S> {
    parent: S,
    count: usize,
}

impl<S> DropSequence<S> {
    pub(crate) const fn new(parent: S, count: usize) -> Self {
        Self { parent, count }
    }
}

impl<S: Sequence> Sequence for DropSequence<S> {
    type Item = S::Item;

    fn each<C>(&self, mut consumer: C) -> SeqResult<Flow>
    where
        C: FnMut(S::Item) -> Flow,
    {
        let mut to_skip = self.count;
        self.parent.each(|item| {
            if to_skip > 0 {
                to_skip -= 1;
                Flow::Continue
            } else {
                consumer(item)
            }
        })
    }

    fn get(&self, index: usize) -> SeqResult<S::Item> {
        self.parent.get(index.saturating_add(self.count))
    }

    fn len(&self) -> SeqResult<usize> {
        Ok(self.parent.len()?.saturating_sub(self.count))
    }

    fn is_unbounded(&self) -> bool {
        self.parent.is_unbounded()
    }
}
