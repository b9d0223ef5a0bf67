//! Process-wide worker-thread configuration.
//!
//! The distance-matrix fill is the only parallel section in the crate; it
//! sizes its worker pool from this module. The count defaults to half the
//! available hardware parallelism (minimum 1) and can be changed at runtime
//! with [`set`].
//!
//! The setter is atomic, but changing the count while a matrix build is in
//! flight is not supported: set it once before starting work.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::api::Error;

/// 0 means "not configured yet"; resolved lazily to the default.
static NUM_THREADS: AtomicUsize = AtomicUsize::new(0);

/// Set the number of worker threads used for parallel computations.
///
/// # Errors
///
/// Returns [`Error::NonPositive`] if `n` is zero.
pub fn set(n: usize) -> Result<(), Error> {
    if n == 0 {
        return Err(Error::NonPositive {
            parameter: "thread count",
            value: 0.0,
        });
    }
    NUM_THREADS.store(n, Ordering::Relaxed);
    Ok(())
}

/// Current worker-thread count.
///
/// Before the first [`set`] call this is half the available hardware
/// parallelism, but at least 1.
pub fn get() -> usize {
    match NUM_THREADS.load(Ordering::Relaxed) {
        0 => default_threads(),
        n => n,
    }
}

fn default_threads() -> usize {
    let available = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(2);
    (available / 2).max(1)
}
