//! Distinct-value transform preserving first-seen order.

use std::collections::HashSet;
use std::hash::Hash;

use crate::control::Flow;
use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;

/// Lazily forwards the first occurrence of each distinct parent value.
///
/// Uniqueness membership cannot be resolved locally, so every terminal
/// call walks the parent from the start with a fresh seen-set; nothing is
/// cached across calls.
#[derive(Debug, Clone)]
pub struct UniqSequence<S> {
    parent: S,
}

impl<S> UniqSequence<S> {
    pub(crate) const fn new(parent: S) -> Self {
        Self { parent }
    }
}

impl<S> Sequence for UniqSequence<S>
where
    S: Sequence,
    S::Item: Clone + Eq + Hash,
{
    type Item = S::Item;

    fn each<C>(&self, mut consumer: C) -> SeqResult<Flow>
    where
        C: FnMut(S::Item) -> Flow,
    {
        let mut seen = HashSet::new();
        self.parent.each(|item| {
            if seen.insert(item.clone()) {
                consumer(item)
            } else {
                Flow::Continue
            }
        })
    }

    /// Sequential scan, early-stopped at the `index`-th distinct value.
    fn get(&self, index: usize) -> SeqResult<S::Item> {
        let mut seen = HashSet::new();
        let mut found = None;
        let mut distinct = 0_usize;
        self.parent.each(|item| {
            if seen.insert(item.clone()) {
                if distinct == index {
                    found = Some(item);
                    return Flow::Stop;
                }
                distinct += 1;
            }
            Flow::Continue
        })?;
        found.ok_or(SeqError::IndexOutOfBounds {
            index,
            len: distinct,
        })
    }

    fn len(&self) -> SeqResult<usize> {
        Err(SeqError::LengthUndefined { node: "uniq" })
    }

    fn is_unbounded(&self) -> bool {
        self.parent.is_unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::wrap;

    #[test]
    fn keeps_first_occurrences_in_order() {
        let distinct = wrap(vec!["M", "F", "F", "M", "M", "F"])
            .uniq()
            .to_vec()
            .unwrap();
        assert_eq!(distinct, ["M", "F"]);
    }

    #[test]
    fn passes_already_distinct_values_through() {
        let distinct = wrap(vec![1, 2, 3]).uniq().to_vec().unwrap();
        assert_eq!(distinct, [1, 2, 3]);
    }

    #[test]
    fn get_scans_to_the_distinct_value() {
        let seq = wrap(vec![5, 5, 6, 6, 7]).uniq();
        assert_eq!(seq.get(0).unwrap(), 5);
        assert_eq!(seq.get(2).unwrap(), 7);
    }

    #[test]
    fn get_past_the_distinct_values() {
        let seq = wrap(vec![1, 1, 2]).uniq();
        let err = seq.get(2).unwrap_err();
        assert_eq!(err, SeqError::IndexOutOfBounds { index: 2, len: 2 });
    }

    #[test]
    fn length_is_unsupported() {
        let err = wrap(vec![1, 2]).uniq().len().unwrap_err();
        assert_eq!(err, SeqError::LengthUndefined { node: "uniq" });
    }

    #[test]
    fn composes_with_map() {
        let parities = wrap(vec![1, 2, 3, 4, 5])
            .map(|x| x % 2)
            .uniq()
            .to_vec()
            .unwrap();
        assert_eq!(parities, [1, 0]);
    }
}
