//! Non-parametric statistical tests
//!
//! Rank-based tests for comparing independent samples without assuming a
//! particular distribution for the underlying data.

use crate::error::{Error, Result};
use crate::stats::distributions::{ChiSquared, Distribution};
use crate::stats::rank::{rank_groups, GroupSummary, RankTable};
use serde::{Deserialize, Serialize};

/// Kruskal-Wallis H test result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KruskalWallisResult {
    /// Tie-corrected H statistic
    pub h_statistic: f64,
    /// p-value under the asymptotic chi-square approximation
    pub p_value: f64,
    /// Degrees of freedom (number of admitted groups minus 1)
    pub df: usize,
    /// Whether significant at the caller-supplied significance level
    pub significant: bool,
    /// Per-group ranking summaries, preserving input order
    pub group_summaries: Vec<GroupSummary>,
}

/// Perform the Kruskal-Wallis H test
///
/// # Description
/// Tests whether `k >= 2` independent groups come from the same distribution
/// by comparing their mean ranks in the pooled sample. Tied observations
/// receive averaged ranks and the statistic is divided by the tie-correction
/// factor `C = 1 - sum(t^3 - t) / (N^3 - N)`. The p-value is the chi-square
/// survival function at H with `k - 1` degrees of freedom.
///
/// Empty groups are dropped before ranking; at least 2 non-empty groups must
/// remain. All observations must be finite and `alpha` must lie in (0, 1).
///
/// # Example
/// ```rust
/// use ranktest::stats;
///
/// let g1 = vec![1.0, 2.0, 3.0];
/// let g2 = vec![4.0, 5.0, 6.0];
/// let g3 = vec![7.0, 8.0, 9.0];
/// let groups: Vec<&[f64]> = vec![&g1, &g2, &g3];
///
/// let result = stats::kruskal_wallis(&groups, 0.05).unwrap();
/// println!("H = {}", result.h_statistic);
/// println!("p = {}", result.p_value);
/// println!("Significant: {}", result.significant);
/// ```
pub fn kruskal_wallis(groups: &[&[f64]], alpha: f64) -> Result<KruskalWallisResult> {
    kruskal_wallis_impl(groups, None, alpha)
}

/// Perform the Kruskal-Wallis H test with labeled groups
///
/// # Description
/// Same test as [`kruskal_wallis`], but each group carries a caller-supplied
/// name that is reported back in the per-group summaries. Names play no role
/// in the computation.
///
/// # Example
/// ```rust
/// use ranktest::stats;
///
/// let a = vec![8.5, 9.2, 9.6, 8.8, 9.1, 9.3];
/// let b = vec![7.5, 7.8, 8.2, 7.1, 7.3, 7.6];
/// let c = vec![6.5, 6.8, 6.2, 6.9, 6.4, 6.3];
/// let groups: Vec<(&str, &[f64])> = vec![
///     ("Treatment A", &a),
///     ("Treatment B", &b),
///     ("Control Group", &c),
/// ];
///
/// let result = stats::kruskal_wallis_named(&groups, 0.05).unwrap();
/// assert_eq!(result.group_summaries[0].name, "Treatment A");
/// ```
pub fn kruskal_wallis_named(
    groups: &[(&str, &[f64])],
    alpha: f64,
) -> Result<KruskalWallisResult> {
    let names: Vec<&str> = groups.iter().map(|(name, _)| *name).collect();
    let values: Vec<&[f64]> = groups.iter().map(|(_, g)| *g).collect();
    kruskal_wallis_impl(&values, Some(&names), alpha)
}

fn kruskal_wallis_impl(
    groups: &[&[f64]],
    names: Option<&[&str]>,
    alpha: f64,
) -> Result<KruskalWallisResult> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(Error::InvalidInput(format!(
            "Significance level must be in (0, 1), got {}",
            alpha
        )));
    }

    let table = rank_groups(groups, names)?;
    compute(table, alpha)
}

/// H statistic, degrees of freedom and p-value from a rank table
fn compute(table: RankTable, alpha: f64) -> Result<KruskalWallisResult> {
    let n = table.n_total as f64;
    let k = table.summaries.len();

    let cubic = n * n * n - n;
    if cubic == 0.0 {
        return Err(Error::DegenerateInput(
            "Tie correction is undefined for a pooled sample of size <= 1".into(),
        ));
    }

    // C = 1 - sum(t^3 - t) / (N^3 - N); C = 0 means every observation is
    // tied with every other, leaving no rank variance to test.
    let correction = 1.0 - table.tie_terms.iter().sum::<f64>() / cubic;
    if correction == 0.0 {
        return Err(Error::DegenerateInput(
            "All pooled observations are identical".into(),
        ));
    }

    let sum_term: f64 = table
        .summaries
        .iter()
        .map(|g| g.rank_sum * g.rank_sum / g.size as f64)
        .sum();
    let h_raw = 12.0 / (n * (n + 1.0)) * sum_term - 3.0 * (n + 1.0);
    let h_statistic = h_raw / correction;

    let df = k - 1;
    let chi_sq = ChiSquared::new(df as f64)?;
    let p_value = chi_sq.survival(h_statistic);

    Ok(KruskalWallisResult {
        h_statistic,
        p_value,
        df,
        significant: p_value < alpha,
        group_summaries: table.summaries,
    })
}
