//! Pooled ranking with mid-rank tie handling
//!
//! This module merges the observations of several groups into one pool,
//! assigns 1-based ranks in ascending value order, and averages the ranks
//! of tied observations (mid-rank rule). It also records the tie census
//! needed by the tie-correction factor of rank-based test statistics.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Per-group ranking summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Position of the group in the caller-supplied input
    pub group: usize,
    /// Caller-supplied label, or a generated default
    pub name: String,
    /// Number of observations in the group
    pub size: usize,
    /// Sum of the ranks assigned to the group's observations
    pub rank_sum: f64,
    /// Mean rank of the group's observations
    pub mean_rank: f64,
}

/// Result of ranking the pooled observations of several groups
#[derive(Debug, Clone)]
pub struct RankTable {
    /// Total number of pooled observations
    pub n_total: usize,
    /// Per-group summaries, preserving input order of the admitted groups
    pub summaries: Vec<GroupSummary>,
    /// One `t^3 - t` term per run of `t > 1` equal values in the pool
    pub tie_terms: Vec<f64>,
}

/// Assign 1-based ranks to a slice, averaging the ranks of tied values
///
/// Tied observations all receive the arithmetic mean of the positional
/// ranks their run spans. Example: `[5.0, 7.0, 7.0, 9.0]` gets ranks
/// `[1.0, 2.5, 2.5, 4.0]`.
pub fn assign_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; n];

    let mut i = 0;
    while i < n {
        let mut j = i;
        while j < n && values[order[j]] == values[order[i]] {
            j += 1;
        }

        // Mean of the 1-based positional ranks i+1 ..= j
        let avg_rank = (i + j - 1) as f64 / 2.0 + 1.0;

        for &idx in &order[i..j] {
            ranks[idx] = avg_rank;
        }

        i = j;
    }

    ranks
}

/// Pool the observations of several groups and rank them jointly
///
/// Empty groups are dropped before ranking; the remaining groups keep their
/// original input index in [`GroupSummary::group`]. Fails with
/// [`Error::InvalidInput`] if fewer than 2 non-empty groups remain, if any
/// observation is non-finite, or if `names` does not match `groups` in
/// length.
pub fn rank_groups(groups: &[&[f64]], names: Option<&[&str]>) -> Result<RankTable> {
    if let Some(names) = names {
        if names.len() != groups.len() {
            return Err(Error::InvalidInput(format!(
                "Expected {} group names, found {}",
                groups.len(),
                names.len()
            )));
        }
    }

    // Ordering and mid-ranking are undefined for NaN and infinities.
    for (i, group) in groups.iter().enumerate() {
        if let Some(value) = group.iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "Group {} contains a non-finite value ({})",
                i, value
            )));
        }
    }

    let admitted: Vec<usize> = groups
        .iter()
        .enumerate()
        .filter(|(_, g)| !g.is_empty())
        .map(|(i, _)| i)
        .collect();

    if admitted.len() < 2 {
        return Err(Error::InvalidInput(format!(
            "At least 2 non-empty groups are required, found {}",
            admitted.len()
        )));
    }

    let n_total: usize = admitted.iter().map(|&i| groups[i].len()).sum();

    // Pool all admitted observations, tagged with their admitted position.
    let mut pooled: Vec<(f64, usize)> = Vec::with_capacity(n_total);
    for (pos, &i) in admitted.iter().enumerate() {
        for &value in groups[i] {
            pooled.push((value, pos));
        }
    }

    // Stable sort: tied values keep input order, which mid-ranking makes
    // irrelevant to the result anyway.
    pooled.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut rank_sums = vec![0.0; admitted.len()];
    let mut tie_terms = Vec::new();

    let mut i = 0;
    while i < n_total {
        let mut j = i;
        while j < n_total && pooled[j].0 == pooled[i].0 {
            j += 1;
        }

        let avg_rank = (i + j - 1) as f64 / 2.0 + 1.0;
        for &(_, pos) in &pooled[i..j] {
            rank_sums[pos] += avg_rank;
        }

        let t = (j - i) as f64;
        if j - i > 1 {
            tie_terms.push(t * t * t - t);
        }

        i = j;
    }

    let summaries = admitted
        .iter()
        .enumerate()
        .map(|(pos, &idx)| {
            let size = groups[idx].len();
            let rank_sum = rank_sums[pos];
            GroupSummary {
                group: idx,
                name: names
                    .map(|n| n[idx].to_string())
                    .unwrap_or_else(|| format!("Group {}", idx + 1)),
                size,
                rank_sum,
                mean_rank: rank_sum / size as f64,
            }
        })
        .collect();

    Ok(RankTable {
        n_total,
        summaries,
        tie_terms,
    })
}
