#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

/// A separate-chaining hash table with a fixed bucket count.
///
/// This module provides the `ChainTable` under measurement: append-only
/// chains, first-match removal, and no resizing regardless of load factor.
pub mod chain_table;

pub mod dataset;

/// The bucket-index functions under comparison.
///
/// This module provides the `HashFn` strategy enum mapping
/// `(key, bucket count)` to a bucket index.
pub mod hash_fn;

pub mod runner;

pub use chain_table::ChainTable;
pub use dataset::Scenario;
pub use hash_fn::HashFn;
pub use runner::TrialTiming;
