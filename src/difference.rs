//! Pairwise color-difference matrices.
//!
//! [`color_difference_matrix`] evaluates a metric over every unordered pair
//! of an input pool and returns the symmetric result. The fill is the only
//! O(N²) memory consumer in the crate, so it is guarded by an explicit
//! budget, and the row loop runs on a worker pool sized by
//! [`crate::threads`].

use rayon::prelude::*;

use crate::api::Error;
use crate::color::{self, Lab, Xyz};
use crate::matrix::Matrix;
use crate::metrics::{self, ColorMetric, MetricType};
use crate::threads;

const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

/// Estimated size in bytes of an `n` x `n` matrix of `f64`.
#[inline]
fn estimate_matrix_bytes(n: usize) -> f64 {
    (n as f64) * (n as f64) * std::mem::size_of::<f64>() as f64
}

/// Build the symmetric difference matrix for `colors` under `metric`.
///
/// Element `(i, j)` is `metric.difference(&colors[i], &colors[j])`; the
/// diagonal is zero. Rows are computed in parallel; each cell depends only
/// on its two colors, so the result is bitwise independent of the thread
/// count.
///
/// # Errors
///
/// - [`Error::EmptyInput`] when `colors` is empty.
/// - [`Error::MatrixTooLarge`] when `N² * 8` bytes would exceed
///   `max_memory_gb`; the check runs before any allocation.
pub fn color_difference_matrix<C, M>(
    colors: &[C],
    metric: &M,
    max_memory_gb: f64,
) -> Result<Matrix<f64>, Error>
where
    C: Copy + Sync,
    M: ColorMetric<C> + Sync,
{
    let n = colors.len();

    if n == 0 {
        return Err(Error::EmptyInput);
    }

    let required_gb = estimate_matrix_bytes(n) / BYTES_PER_GB;
    if required_gb > max_memory_gb {
        return Err(Error::MatrixTooLarge {
            n,
            required_gb,
            limit_gb: max_memory_gb,
        });
    }

    tracing::debug!(n, required_gb, "filling color difference matrix");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads::get())
        .build()
        .map_err(|e| Error::Internal(format!("failed to build worker pool: {e}")))?;

    // Upper-triangle rows, computed independently per row.
    let rows: Vec<Vec<f64>> = pool.install(|| {
        (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| metric.difference(&colors[i], &colors[j]))
                    .collect()
            })
            .collect()
    });

    let mut result = Matrix::new(n, n);
    for (i, row) in rows.iter().enumerate() {
        for (offset, &d) in row.iter().enumerate() {
            let j = i + 1 + offset;
            result[(i, j)] = d;
            result[(j, i)] = d;
        }
    }

    Ok(result)
}

/// Build a difference matrix for an XYZ pool with a runtime-selected metric.
///
/// The pool is converted once to the metric's native space (DIN99d or Lab)
/// so the pairwise fill touches pre-converted values only.
pub fn color_difference_matrix_xyz(
    colors: &[Xyz],
    metric_type: MetricType,
    max_memory_gb: f64,
) -> Result<Matrix<f64>, Error> {
    match metric_type {
        MetricType::Din99d => {
            let converted: Vec<color::Din99d> =
                colors.iter().map(|&c| c.into()).collect();
            color_difference_matrix(&converted, &metrics::Din99d::new(), max_memory_gb)
        }
        MetricType::Cie76 => {
            let converted: Vec<Lab> = colors.iter().map(|&c| c.into()).collect();
            color_difference_matrix(&converted, &metrics::Cie76, max_memory_gb)
        }
        MetricType::Ciede2000 => {
            let converted: Vec<Lab> = colors.iter().map(|&c| c.into()).collect();
            color_difference_matrix(&converted, &metrics::Ciede2000::new(), max_memory_gb)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    fn pool() -> Vec<Xyz> {
        [
            Rgb::new(0.0, 0.0, 0.0),
            Rgb::new(1.0, 1.0, 1.0),
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::new(0.0, 0.7, 0.9),
        ]
        .into_iter()
        .map(Xyz::from)
        .collect()
    }

    #[test]
    fn test_matrix_is_symmetric_with_zero_diagonal() {
        for metric in [MetricType::Din99d, MetricType::Cie76, MetricType::Ciede2000] {
            let m = color_difference_matrix_xyz(&pool(), metric, 1.0).unwrap();
            assert_eq!(m.nrow(), 4);
            assert_eq!(m.ncol(), 4);
            for i in 0..4 {
                assert_eq!(m[(i, i)], 0.0);
                for j in 0..4 {
                    assert_eq!(m[(i, j)], m[(j, i)], "asymmetry at ({i}, {j})");
                    if i != j {
                        assert!(m[(i, j)] > 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_memory_guard_rejects_before_allocation() {
        // 12000^2 * 8 bytes is ~1.07 GB, just over a 1.0 GB budget.
        let colors = vec![Xyz::new(0.3, 0.4, 0.5); 12000];
        let err = color_difference_matrix_xyz(&colors, MetricType::Din99d, 1.0);
        match err {
            Err(Error::MatrixTooLarge {
                n,
                required_gb,
                limit_gb,
            }) => {
                assert_eq!(n, 12000);
                assert!(required_gb > limit_gb);
            }
            other => panic!("expected MatrixTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let empty: Vec<Xyz> = vec![];
        assert!(matches!(
            color_difference_matrix_xyz(&empty, MetricType::Din99d, 1.0),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_single_color_gives_1x1_zero() {
        let one = vec![Xyz::new(0.2, 0.2, 0.2)];
        let m = color_difference_matrix_xyz(&one, MetricType::Cie76, 1.0).unwrap();
        assert_eq!(m.nrow(), 1);
        assert_eq!(m[(0, 0)], 0.0);
    }

    #[test]
    fn test_matches_direct_metric_evaluation() {
        let colors = pool();
        let m = color_difference_matrix_xyz(&colors, MetricType::Ciede2000, 1.0).unwrap();
        for i in 0..colors.len() {
            for j in 0..colors.len() {
                if i != j {
                    let direct = MetricType::Ciede2000.difference(colors[i], colors[j]);
                    assert!((m[(i, j)] - direct).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_thread_count_does_not_change_values() {
        let colors: Vec<Xyz> = (0..60)
            .map(|i| {
                let t = i as f64 / 59.0;
                Xyz::from(Rgb::new(t, (1.0 - t) * 0.8, 0.2 + 0.6 * t))
            })
            .collect();

        crate::threads::set(1).unwrap();
        let serial = color_difference_matrix_xyz(&colors, MetricType::Din99d, 1.0).unwrap();
        crate::threads::set(4).unwrap();
        let parallel = color_difference_matrix_xyz(&colors, MetricType::Din99d, 1.0).unwrap();

        assert_eq!(serial, parallel);
    }
}
