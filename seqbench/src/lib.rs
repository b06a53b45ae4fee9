//! Pipeline benchmarking and reference comparison for the lazyseq engine.
//!
//! This crate provides:
//!
//! - A catalog of pipeline shapes ported from the engine's comparison suite
//! - A lazy runner (the engine) and an eager reference runner built on
//!   `itertools`/std iterator chains
//! - Deterministic dataset generation for reproducible runs
//!
//! # Design Principles
//!
//! - **Reproducible** - Datasets are deterministic given a seed.
//! - **Comparable** - Every pipeline has a lazy and a reference rendition
//!   that must produce identical output.
//! - **Measurable** - Output format suitable for CI regression tracking.

use itertools::Itertools;
use lazyseq::{wrap, SeqResult, Sequence};

/// Identifies one benchmarked pipeline shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// `map(square)`
    Map,
    /// `filter(is_even)`
    Filter,
    /// `map(inc) -> filter(is_even)`
    MapFilter,
    /// `map(inc) -> map(square) -> map(dec)`
    MapX3,
    /// Five chained increments.
    MapX5,
    /// `filter(is_even) -> take(5)`
    FilterTake,
    /// `filter(is_even) -> drop(100) -> take(5)`
    FilterDropTake,
    /// `sort_by(identity)` over a shuffled dataset.
    SortBy,
    /// `uniq` over a dataset with repeats.
    Uniq,
}

impl Pipeline {
    /// Every pipeline shape, in report order.
    pub const ALL: [Self; 9] = [
        Self::Map,
        Self::Filter,
        Self::MapFilter,
        Self::MapX3,
        Self::MapX5,
        Self::FilterTake,
        Self::FilterDropTake,
        Self::SortBy,
        Self::Uniq,
    ];

    /// Stable name used in reports and benchmark IDs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Filter => "filter",
            Self::MapFilter => "map_filter",
            Self::MapX3 => "map_x3",
            Self::MapX5 => "map_x5",
            Self::FilterTake => "filter_take",
            Self::FilterDropTake => "filter_drop_take",
            Self::SortBy => "sort_by",
            Self::Uniq => "uniq",
        }
    }

    /// Returns `true` if the pipeline is only interesting over a shuffled
    /// dataset with repeated values.
    #[must_use]
    pub const fn uses_shuffled_data(self) -> bool {
        matches!(self, Self::SortBy | Self::Uniq)
    }
}

fn inc(x: i64) -> i64 {
    x + 1
}

fn dec(x: i64) -> i64 {
    x - 1
}

fn square(x: i64) -> i64 {
    x * x
}

fn is_even(x: &i64) -> bool {
    x % 2 == 0
}

/// Builds the `1..=size` dataset used by the comparison suite.
#[must_use]
pub fn create_array(size: u32) -> Vec<i64> {
    (1..=i64::from(size)).collect()
}

/// Builds a seeded dataset with repeated values for sort/uniq pipelines.
#[must_use]
pub fn create_shuffled_array(size: u32, seed: u64) -> Vec<i64> {
    let mut rng = Rng::new(seed);
    (0..size).map(|_| i64::from(rng.next_u32() % 1000)).collect()
}

/// Runs `pipeline` through the lazy engine.
pub fn run_lazy(pipeline: Pipeline, data: &[i64]) -> SeqResult<Vec<i64>> {
    let seq = wrap(data.to_vec());
    match pipeline {
        Pipeline::Map => seq.map(square).to_vec(),
        Pipeline::Filter => seq.filter(is_even).to_vec(),
        Pipeline::MapFilter => seq.map(inc).filter(is_even).to_vec(),
        Pipeline::MapX3 => seq.map(inc).map(square).map(dec).to_vec(),
        Pipeline::MapX5 => seq.map(inc).map(inc).map(inc).map(inc).map(inc).to_vec(),
        Pipeline::FilterTake => seq.filter(is_even).take(5).to_vec(),
        Pipeline::FilterDropTake => seq.filter(is_even).drop(100).take(5).to_vec(),
        Pipeline::SortBy => seq.sort_by(|x| *x).to_vec(),
        Pipeline::Uniq => seq.uniq().to_vec(),
    }
}

/// Runs `pipeline` through the eager reference implementation.
#[must_use]
pub fn run_reference(pipeline: Pipeline, data: &[i64]) -> Vec<i64> {
    let iter = data.iter().copied();
    match pipeline {
        Pipeline::Map => iter.map(square).collect(),
        Pipeline::Filter => iter.filter(is_even).collect(),
        Pipeline::MapFilter => iter.map(inc).filter(is_even).collect(),
        Pipeline::MapX3 => iter.map(inc).map(square).map(dec).collect(),
        Pipeline::MapX5 => iter.map(inc).map(inc).map(inc).map(inc).map(inc).collect(),
        Pipeline::FilterTake => iter.filter(is_even).take(5).collect(),
        Pipeline::FilterDropTake => iter.filter(is_even).skip(100).take(5).collect(),
        Pipeline::SortBy => iter.sorted_by_key(|x| *x).collect(),
        Pipeline::Uniq => iter.unique().collect(),
    }
}

/// Small deterministic LCG, enough for reproducible datasets.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Creates a generator from a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the next pseudo-random value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasets_are_deterministic() {
        assert_eq!(create_array(5), [1, 2, 3, 4, 5]);
        assert_eq!(
            create_shuffled_array(16, 42),
            create_shuffled_array(16, 42)
        );
        assert_ne!(create_shuffled_array(16, 1), create_shuffled_array(16, 2));
    }

    #[test]
    fn pipeline_names_are_unique() {
        let mut names: Vec<&str> = Pipeline::ALL.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Pipeline::ALL.len());
    }

    #[test]
    fn filter_drop_take_windows_the_survivors() {
        let data = create_array(1000);
        let result = run_lazy(Pipeline::FilterDropTake, &data).unwrap();
        // Evens are 2, 4, ..; dropping 100 survivors lands on 202.
        assert_eq!(result, [202, 204, 206, 208, 210]);
    }

    #[test]
    fn shuffled_pipelines_flagged() {
        assert!(Pipeline::SortBy.uses_shuffled_data());
        assert!(Pipeline::Uniq.uses_shuffled_data());
        assert!(!Pipeline::Map.uses_shuffled_data());
    }
}
