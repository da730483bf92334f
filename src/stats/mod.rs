//! RankTest Statistics Module
//!
//! This module provides rank-based statistical functionality for comparing
//! independent samples without assuming normality. It implements pooled
//! ranking with mid-rank tie handling and the Kruskal-Wallis H test.

// Feature modules
pub mod distributions;
pub mod nonparametric;
pub mod rank;

// Re-export public types and functions
pub use distributions::{ChiSquared, Distribution};
pub use nonparametric::{kruskal_wallis, kruskal_wallis_named, KruskalWallisResult};
pub use rank::{assign_ranks, rank_groups, GroupSummary, RankTable};
