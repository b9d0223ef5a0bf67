//! Farthest-points palette selection.
//!
//! Given a pool of colors, pick the `n` whose *worst* pairwise difference is
//! as large as possible: the discrete max-min problem. Exact solutions are
//! combinatorial, so this uses a deterministic local search: seed with the
//! first `n` pool entries, then repeatedly try to swap each free slot for
//! the pool point that would raise its minimum distance, until a full sweep
//! makes no swap. The objective is monotone under swaps, so the loop
//! terminates.

use crate::api::Error;
use crate::color::Xyz;
use crate::difference::color_difference_matrix_xyz;
use crate::matrix::Matrix;
use crate::metrics::MetricType;

/// Select `n` maximally distinct colors from a combined pool.
///
/// `colors` must be laid out as `[fixed anchors | candidates | background]`:
/// the first `n_fixed` entries are anchors that will occupy the first
/// `n_fixed` output positions unchanged, and when `has_bg` is true the last
/// entry is a background color that is never selected but whose distance is
/// folded into every minimum, steering selection away from it.
///
/// Returns `n` indices into `colors`. The first `n_fixed` are `0..n_fixed`;
/// the rest point into the candidate range and are ordered by descending
/// distinctness (each element's minimum distance to the other non-anchor
/// picks).
///
/// The seed and all tie-breaks are deterministic, so equal inputs produce
/// bitwise equal output.
///
/// # Errors
///
/// - [`Error::FixedExceedsRequest`] when `n < n_fixed`.
/// - [`Error::NotEnoughCandidates`] when the candidate range holds fewer
///   than `n - n_fixed` colors.
/// - Any error from the underlying difference-matrix build.
pub fn farthest_points(
    n: usize,
    colors: &[Xyz],
    metric_type: MetricType,
    has_bg: bool,
    n_fixed: usize,
    max_memory_gb: f64,
) -> Result<Vec<usize>, Error> {
    let total = colors.len();
    let n_bg = usize::from(has_bg);
    let n_candidates = total.saturating_sub(n_fixed + n_bg);

    if n < n_fixed {
        return Err(Error::FixedExceedsRequest { n, n_fixed });
    }
    if n - n_fixed > n_candidates {
        return Err(Error::NotEnoughCandidates {
            requested: n - n_fixed,
            available: n_candidates,
        });
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let dist = color_difference_matrix_xyz(colors, metric_type, max_memory_gb)?;
    let bg_index = has_bg.then(|| total - 1);

    let mut selected: Vec<usize> = (0..n).collect();
    let mut pool: Vec<usize> = (n..n_fixed + n_candidates).collect();

    let mut sweeps = 0usize;
    let mut changed = true;

    while changed {
        changed = false;
        sweeps += 1;

        // Anchors are frozen; only the free slots are sweepable.
        for slot in n_fixed..n {
            let mut best = min_distance(&dist, &selected, slot, selected[slot], bg_index);
            let mut best_pool_idx = None;

            for (k, &candidate) in pool.iter().enumerate() {
                let d = min_distance(&dist, &selected, slot, candidate, bg_index);
                if d > best {
                    best = d;
                    best_pool_idx = Some(k);
                }
            }

            if let Some(k) = best_pool_idx {
                std::mem::swap(&mut selected[slot], &mut pool[k]);
                changed = true;
            }
        }
    }

    tracing::trace!(sweeps, n, "farthest-points search converged");

    // Order the free picks by distinctness: most isolated first. Anchors
    // keep their caller-given order at the front.
    let tail: Vec<usize> = selected[n_fixed..].to_vec();
    let tail_min = |idx: usize| -> f64 {
        tail.iter()
            .filter(|&&other| other != idx)
            .map(|&other| dist[(other, idx)])
            .fold(f64::MAX, f64::min)
    };
    selected[n_fixed..].sort_by(|&a, &b| tail_min(b).total_cmp(&tail_min(a)));

    Ok(selected)
}

/// Minimum distance from `idx` to the selected set (skipping the slot being
/// re-evaluated), extended with the background when present.
fn min_distance(
    dist: &Matrix<f64>,
    selected: &[usize],
    skip_slot: usize,
    idx: usize,
    bg_index: Option<usize>,
) -> f64 {
    let mut min = f64::MAX;

    for (slot, &sel) in selected.iter().enumerate() {
        if slot != skip_slot {
            min = min.min(dist[(sel, idx)]);
        }
    }

    if let Some(bg) = bg_index {
        min = min.min(dist[(idx, bg)]);
    }

    min
}
