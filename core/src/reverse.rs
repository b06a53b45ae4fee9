//! Order inversion without materialization.

use crate::control::Flow;
use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;

/// Lazily yields its parent's elements in reverse encounter order.
///
/// When the parent's length is defined the node walks `parent.get(i)` from
/// the last index down, allocating no backing buffer. A parent whose
/// length is undefined but bounded (a filter over an array) forces one
/// buffering pass; an unbounded parent is refused outright.
#[derive(Debug, Clone)]
pub struct ReverseSequence<S> {
    parent: S,
}

impl<S> ReverseSequence<S> {
    pub(crate) const fn new(parent: S) -> Self {
        Self { parent }
    }
}

impl<S: Sequence> Sequence for ReverseSequence<S> {
    type Item = S::Item;

    fn each<C>(&self, mut consumer: C) -> SeqResult<Flow>
    where
        C: FnMut(S::Item) -> Flow,
    {
        let len = match self.parent.len() {
            Ok(len) => Some(len),
            Err(SeqError::LengthUndefined { .. }) => None,
            Err(err) => return Err(err),
        };

        if let Some(len) = len {
            for index in (0..len).rev() {
                if consumer(self.parent.get(index)?).is_stop() {
                    return Ok(Flow::Stop);
                }
            }
            return Ok(Flow::Continue);
        }

        if self.parent.is_unbounded() {
            return Err(SeqError::UnboundedMaterialization {
                operation: "reverse",
            });
        }

        // Length-undefined but bounded parent: one buffering pass.
        let mut buffer = Vec::new();
        self.parent.each(|item| {
            buffer.push(item);
            Flow::Continue
        })?;
        for item in buffer.into_iter().rev() {
            if consumer(item).is_stop() {
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    /// Pure index arithmetic: `get(i)` reads the mirrored parent index.
    fn get(&self, index: usize) -> SeqResult<S::Item> {
        let len = self.parent.len()?;
        if index >= len {
            return Err(SeqError::IndexOutOfBounds { index, len });
        }
        self.parent.get(len - 1 - index)
    }

    fn len(&self) -> SeqResult<usize> {
        self.parent.len()
    }

    fn is_unbounded(&self) -> bool {
        self.parent.is_unbounded()
    }
}
