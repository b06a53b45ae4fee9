//! Lazy sequence evaluation over collections and generated values.
//!
//! `lazyseq` wraps an underlying collection (or an index-driven generator)
//! and exposes chainable transformations that defer all element access to
//! the moment a terminal operation demands results.
//!
//! # Features
//!
//! - Chainable lazy transforms: map, filter, reject, reverse, take, drop,
//!   sort_by, uniq
//! - Terminal operations: `each`, `get`, `len`, `to_vec`
//! - Explicit stop-signal propagation that bounds upstream work
//! - Per-node random-access shortcuts that avoid iteration where index
//!   arithmetic allows
//! - Single-buffer materialization across fused element-wise stages
//!
//! # Design Principles
//!
//! - **Lazy by construction** - building a chain touches zero elements.
//! - **Explicit control flow** - consumers return [`Flow::Continue`] or
//!   [`Flow::Stop`]; cancellation is a first-class, statically checked
//!   contract, not a falsy-return convention.
//! - **No hidden buffers** - only sort (and reverse over a parent whose
//!   length cannot be computed) materializes upstream elements.
//!
//! # Example
//!
//! ```
//! use lazyseq::{wrap, Sequence};
//!
//! let evens = wrap(vec![1, 2, 3, 4, 5, 6])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10)
//!     .to_vec()
//!     .unwrap();
//! assert_eq!(evens, [20, 40, 60]);
//! ```

mod control;
mod elementwise;
mod error;
mod reverse;
mod sequence;
mod slice;
mod sort;
mod source;
mod uniq;

pub use control::Flow;
pub use elementwise::{FilterSequence, MapSequence, RejectSequence};
pub use error::{SeqError, SeqResult};
pub use reverse::ReverseSequence;
pub use sequence::Sequence;
pub use slice::{DropSequence, TakeSequence};
pub use sort::SortSequence;
pub use source::{generate, wrap, ArraySequence, GeneratedSequence};
pub use uniq::UniqSequence;
