//! The core [`Sequence`] trait: traversal capabilities and chaining
//! combinators.

use crate::control::Flow;
use crate::elementwise::{FilterSequence, MapSequence, RejectSequence};
use crate::error::{SeqError, SeqResult};
use crate::reverse::ReverseSequence;
use crate::slice::{DropSequence, TakeSequence};
use crate::sort::SortSequence;
use crate::uniq::UniqSequence;

/// An immutable, lazily-evaluated view over zero or more elements.
///
/// Derived sequences are built with the chaining combinators ([`map`],
/// [`filter`], [`take`], ...), none of which touch a single element of the
/// underlying source. Element access happens only inside the terminal
/// operations: [`each`], [`get`], [`len`] and [`to_vec`].
///
/// Dispatch is static: the node kinds form a closed set of concrete types,
/// and every chain monomorphizes into a single fused traversal.
///
/// [`map`]: Sequence::map
/// [`filter`]: Sequence::filter
/// [`take`]: Sequence::take
/// [`each`]: Sequence::each
/// [`get`]: Sequence::get
/// [`len`]: Sequence::len
/// [`to_vec`]: Sequence::to_vec
pub trait Sequence {
    /// The element type produced by this sequence.
    type Item;

    /// Walks the elements in order, invoking `consumer` for each.
    ///
    /// A [`Flow::Stop`] verdict from the consumer terminates the walk
    /// immediately: the stop signal propagates through every intervening
    /// node back to the root, and no further elements are pulled from any
    /// stage for this traversal.
    ///
    /// The returned [`Flow`] reports whether a stop signal was raised
    /// during the walk (by the consumer or by a bounding node such as
    /// `take`); `Continue` means the source was exhausted.
    fn each<C>(&self, consumer: C) -> SeqResult<Flow>
    where
        C: FnMut(Self::Item) -> Flow;

    /// Returns the element at `index`.
    ///
    /// Node kinds whose index arithmetic allows it (map, take, drop,
    /// reverse) resolve this without iteration; filter, reject and uniq
    /// fall back to an early-stopped scan.
    fn get(&self, index: usize) -> SeqResult<Self::Item>;

    /// Returns the number of elements a full traversal would yield.
    ///
    /// Never traverses, except for a sort node reporting its materialized
    /// buffer. Fails with [`SeqError::LengthUndefined`] for unbounded
    /// chains and for node kinds (filter, reject, uniq) whose length would
    /// require a counting pass.
    fn len(&self) -> SeqResult<usize>;

    /// Returns `true` if this chain can yield unboundedly many elements.
    ///
    /// Generated sources are unbounded; `take` restores boundedness; every
    /// other node inherits its parent's flag. Materializing operations use
    /// this to fail fast instead of diverging.
    fn is_unbounded(&self) -> bool;

    /// Returns `true` if a full traversal would yield no elements.
    fn is_empty(&self) -> SeqResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Lazily applies `mapper` to every element.
    fn map<B, F>(self, mapper: F) -> MapSequence<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> B,
    {
        MapSequence::new(self, mapper)
    }

    /// Lazily keeps only the elements matching `predicate`.
    ///
    /// Chained filters compose as a logical AND evaluated per element,
    /// with no intermediate buffer.
    fn filter<P>(self, predicate: P) -> FilterSequence<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        FilterSequence::new(self, predicate)
    }

    /// Lazily drops the elements matching `predicate` (the complement of
    /// [`filter`](Sequence::filter)).
    fn reject<P>(self, predicate: P) -> RejectSequence<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        RejectSequence::new(self, predicate)
    }

    /// Lazily inverts the encounter order.
    fn reverse(self) -> ReverseSequence<Self>
    where
        Self: Sized,
    {
        ReverseSequence::new(self)
    }

    /// Lazily bounds the sequence to its first `count` elements.
    ///
    /// During traversal the node raises the stop signal itself once the
    /// budget is spent, short-circuiting all upstream work.
    fn take(self, count: usize) -> TakeSequence<Self>
    where
        Self: Sized,
    {
        TakeSequence::new(self, count)
    }

    /// Lazily skips the first `count` elements.
    fn drop(self, count: usize) -> DropSequence<Self>
    where
        Self: Sized,
    {
        DropSequence::new(self, count)
    }

    /// Sorts ascending by the key `key` computes per element.
    ///
    /// This is a materializing node: the first terminal call pulls every
    /// parent element into a buffer, sorts it stably (ties keep encounter
    /// order) and caches it for later calls on the same node.
    fn sort_by<B, K>(self, key: K) -> SortSequence<Self, K>
    where
        Self: Sized,
        K: Fn(&Self::Item) -> B,
        B: Ord,
    {
        SortSequence::new(self, key)
    }

    /// Lazily keeps the first occurrence of each distinct value, in
    /// encounter order.
    fn uniq(self) -> UniqSequence<Self>
    where
        Self: Sized,
    {
        UniqSequence::new(self)
    }

    /// Materializes the sequence into a single `Vec`.
    ///
    /// Runs one fused traversal over the whole chain: an arbitrarily long
    /// run of element-wise transforms allocates exactly this one output
    /// buffer. Fails with [`SeqError::UnboundedMaterialization`] instead
    /// of diverging on an unbounded chain.
    fn to_vec(&self) -> SeqResult<Vec<Self::Item>> {
        if self.is_unbounded() {
            return Err(SeqError::UnboundedMaterialization {
                operation: "to_vec",
            });
        }
        let mut items = Vec::new();
        self.each(|item| {
            items.push(item);
            Flow::Continue
        })?;
        Ok(items)
    }
}
