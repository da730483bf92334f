//! RankTest: rank-based non-parametric statistical tests
//!
//! This crate provides the computational core of rank-based hypothesis
//! testing for independent samples: pooled mid-rank assignment with tie
//! averaging, and the Kruskal-Wallis H test with tie correction and a
//! chi-square p-value. Each invocation is a pure function of its inputs;
//! no state is held between calls.
//!
//! # Example
//! ```rust
//! use ranktest::stats;
//!
//! let treatment_a = vec![8.5, 9.2, 9.6, 8.8, 9.1, 9.3];
//! let treatment_b = vec![7.5, 7.8, 8.2, 7.1, 7.3, 7.6];
//! let control = vec![6.5, 6.8, 6.2, 6.9, 6.4, 6.3];
//!
//! let groups: Vec<&[f64]> = vec![&treatment_a, &treatment_b, &control];
//! let result = stats::kruskal_wallis(&groups, 0.05).unwrap();
//!
//! assert_eq!(result.df, 2);
//! assert!(result.significant);
//! ```

pub mod error;
pub mod stats;

// Re-export core types
pub use error::{Error, Result};
pub use stats::distributions::{ChiSquared, Distribution};
pub use stats::nonparametric::{kruskal_wallis, kruskal_wallis_named, KruskalWallisResult};
pub use stats::rank::{assign_ranks, rank_groups, GroupSummary, RankTable};
