#![no_main]

use lazyseq::{wrap, Sequence};
use libfuzzer_sys::fuzz_target;

// Drive a map -> filter -> drop -> take chain with fuzz-chosen data and
// parameters, and check every terminal call against the eager model.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let modulus = i64::from(data[0] % 7) + 2;
    let skip = usize::from(data[1] % 16);
    let limit = usize::from(data[2] % 16);
    let items: Vec<i64> = data[3..].iter().map(|&b| i64::from(b)).collect();

    let seq = wrap(items.clone())
        .map(|x| x * 3 + 1)
        .filter(move |x| x % modulus != 0)
        .drop(skip)
        .take(limit);

    let model: Vec<i64> = items
        .iter()
        .map(|&x| x * 3 + 1)
        .filter(|x| x % modulus != 0)
        .skip(skip)
        .take(limit)
        .collect();

    let materialized = seq.to_vec().expect("bounded chain must materialize");
    assert_eq!(materialized, model);

    for (index, expected) in model.iter().enumerate() {
        assert_eq!(seq.get(index).expect("in-bounds get"), *expected);
    }
    assert!(seq.get(model.len().max(limit)).is_err());
});
