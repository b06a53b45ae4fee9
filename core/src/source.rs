//! Source adapters: the roots every chain is built from.

use std::rc::Rc;

use crate::control::Flow;
use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;

/// Wraps an ordered, finite collection as the root of a chain.
///
/// The elements are moved behind a shared handle, so cloning the sequence
/// (to branch several chains off one source) does not copy them.
#[must_use]
pub fn wrap<T>(items: Vec<T>) -> ArraySequence<T> {
    ArraySequence::new(items)
}

/// Wraps an index-to-value function as an unbounded sequence root.
///
/// The domain starts at index 0 and has no upper bound; `len` is undefined
/// and a traversal only ends when the consumer raises the stop signal.
#[must_use]
pub fn generate<F, T>(generator: F) -> GeneratedSequence<F>
where
    F: Fn(usize) -> T,
{
    GeneratedSequence::new(generator)
}

/// A sequence backed by a concrete, finite collection.
#[derive(Debug, Clone)]
pub struct ArraySequence<T> {
    items: Rc<[T]>,
}

impl<T> ArraySequence<T> {
    /// Creates a sequence over `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T> From<Vec<T>> for ArraySequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Clone> Sequence for ArraySequence<T> {
    type Item = T;

    fn each<C>(&self, mut consumer: C) -> SeqResult<Flow>
    where
        C: FnMut(T) -> Flow,
    {
        for item in self.items.iter() {
            if consumer(item.clone()).is_stop() {
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    fn get(&self, index: usize) -> SeqResult<T> {
        self.items.get(index).cloned().ok_or_else(|| {
            SeqError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            }
        })
    }

    fn len(&self) -> SeqResult<usize> {
        Ok(self.items.len())
    }

    fn is_unbounded(&self) -> bool {
        false
    }
}

/// A conceptually infinite sequence driven by an index-to-value function.
#[derive(Debug, Clone)]
pub struct GeneratedSequence<F> {
    generator: F,
}

impl<F> GeneratedSequence<F> {
    /// Creates a sequence that yields `generator(0)`, `generator(1)`, ...
    pub const fn new(generator: F) -> Self {
        Self { generator }
    }
}

impl<F, T> Sequence for GeneratedSequence<F>
where
    F: Fn(usize) -> T,
{
    type Item = T;

    /// Walks indices upward until the consumer stops the traversal.
    ///
    /// Diverges if the consumer never returns [`Flow::Stop`]; bound the
    /// chain with `take` before materializing.
    fn each<C>(&self, mut consumer: C) -> SeqResult<Flow>
    where
        C: FnMut(T) -> Flow,
    {
        let mut index = 0_usize;
        loop {
            if consumer((self.generator)(index)).is_stop() {
                return Ok(Flow::Stop);
            }
            index += 1;
        }
    }

    fn get(&self, index: usize) -> SeqResult<T> {
        Ok((self.generator)(index))
    }

    fn len(&self) -> SeqResult<usize> {
        Err(SeqError::LengthUndefined { node: "generate" })
    }

    fn is_unbounded(&self) -> bool {
        true
    }
}
