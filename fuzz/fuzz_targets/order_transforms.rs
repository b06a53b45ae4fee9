#![no_main]

use std::collections::HashSet;

use lazyseq::{wrap, Sequence};
use libfuzzer_sys::fuzz_target;

// Check the order-changing transforms (reverse, sort_by, uniq) against
// eager models on arbitrary data.
fuzz_target!(|data: &[u8]| {
    let items: Vec<i64> = data.iter().map(|&b| i64::from(b % 32)).collect();

    let reversed = wrap(items.clone()).reverse().to_vec().unwrap();
    let model_reversed: Vec<i64> = items.iter().rev().copied().collect();
    assert_eq!(reversed, model_reversed);

    let sorted = wrap(items.clone()).sort_by(|x| *x).to_vec().unwrap();
    let mut model_sorted = items.clone();
    model_sorted.sort_unstable();
    assert_eq!(sorted, model_sorted);

    let distinct = wrap(items.clone()).uniq().to_vec().unwrap();
    let mut seen = HashSet::new();
    let model_distinct: Vec<i64> = items
        .iter()
        .copied()
        .filter(|x| seen.insert(*x))
        .collect();
    assert_eq!(distinct, model_distinct);

    // Mirrored indexing agrees with the reversed materialization.
    let seq = wrap(items);
    let rev = seq.reverse();
    for (index, expected) in model_reversed.iter().enumerate() {
        assert_eq!(rev.get(index).unwrap(), *expected);
    }
});
