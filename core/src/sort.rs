//! Key-ordered materializing transform.

use std::cell::OnceCell;
use std::fmt;

use crate::control::Flow;
use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;

/// Sorts its parent's elements ascending by a computed key.
///
/// A materializing node: the first terminal call pulls every parent
/// element via `each` (respecting upstream laziness), computes the key
/// once per element, stable-sorts, and caches the buffer for later
/// `each`/`get`/`len` calls on this same node instance. Clones start with
/// an empty cache and re-materialize on demand.
pub struct SortSequence<S, K>
where
    S: Sequence,
{
    parent: S,
    key: K,
    cache: OnceCell<Vec<S::Item>>,
}

impl<S, K> fmt::Debug for SortSequence<S, K>
where
    S: Sequence + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortSequence")
            .field("parent", &self.parent)
            .field("materialized", &self.cache.get().is_some())
            .finish_non_exhaustive()
    }
}

impl<S, K> SortSequence<S, K>
where
    S: Sequence,
{
    pub(crate) fn new(parent: S, key: K) -> Self {
        Self {
            parent,
            key,
            cache: OnceCell::new(),
        }
    }
}

impl<S, K> Clone for SortSequence<S, K>
where
    S: Sequence + Clone,
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            parent: self.parent.clone(),
            key: self.key.clone(),
            cache: OnceCell::new(),
        }
    }
}

impl<S, K> SortSequence<S, K>
where
    S: Sequence,
    S::Item: Clone,
{
    /// Returns the sorted buffer, materializing it on first use.
    fn sorted<B>(&self) -> SeqResult<&[S::Item]>
    where
        K: Fn(&S::Item) -> B,
        B: Ord,
    {
        if let Some(buffer) = self.cache.get() {
            return Ok(buffer);
        }
        if self.parent.is_unbounded() {
            return Err(SeqError::UnboundedMaterialization {
                operation: "sort_by",
            });
        }
        let mut keyed: Vec<(B, S::Item)> = Vec::new();
        self.parent.each(|item| {
            keyed.push(((self.key)(&item), item));
            Flow::Continue
        })?;
        // Vec::sort_by is stable: equal keys keep encounter order.
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        let buffer: Vec<S::Item> = keyed.into_iter().map(|(_, item)| item).collect();
        Ok(self.cache.get_or_init(|| buffer))
    }
}

impl<S, K, B> Sequence for SortSequence<S, K>
where
    S: Sequence,
    S::Item: Clone,
    K: Fn(&S::Item) -> B,
    B: Ord,
{
    type Item = S::Item;

    fn each<C>(&self, mut consumer: C) -> SeqResult<Flow>
    where
        C: FnMut(S::Item) -> Flow,
    {
        for item in self.sorted()? {
            if consumer(item.clone()).is_stop() {
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    fn get(&self, index: usize) -> SeqResult<S::Item> {
        let buffer = self.sorted()?;
        buffer
            .get(index)
            .cloned()
            .ok_or_else(|| SeqError::IndexOutOfBounds {
                index,
                len: buffer.len(),
            })
    }

    fn len(&self) -> SeqResult<usize> {
        Ok(self.sorted()?.len())
    }

    fn is_unbounded(&self) -> bool {
        self.parent.is_unbounded()
    }
}
