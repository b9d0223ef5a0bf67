//! Candidate-pool generation by quasi-random sampling.
//!
//! When the caller describes a *region* of a cylindrical color space instead
//! of an explicit color list, candidates are drawn with a 3-dimensional
//! Halton sequence (bases 2, 3 and 5). Unlike a pseudo-random sample, the
//! sequence is deterministic and low-discrepancy: points cover the region
//! evenly at any pool size, which keeps palette output reproducible.
//!
//! ```
//! use qualpal::generate;
//!
//! let pool = generate::hsl_candidates([0.0, 360.0], [0.4, 0.9], [0.3, 0.8], 100).unwrap();
//! assert_eq!(pool.len(), 100);
//! ```

use crate::api::Error;
use crate::color::{Hsl, Lchab};

/// The cylindrical color space a candidate region is described in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// Hue / saturation / lightness.
    Hsl,
    /// Lightness / chroma / hue (CIE LCh(ab)).
    Lchab,
}

/// Radical-inverse function: the digits of `index` in `base`, mirrored
/// around the radix point. Produces values in `(0, 1)` for `index >= 1`.
fn halton(mut index: u64, base: u64) -> f64 {
    let mut factor = 1.0;
    let mut result = 0.0;
    let inv_base = 1.0 / base as f64;

    while index > 0 {
        factor *= inv_base;
        result += factor * (index % base) as f64;
        index /= base;
    }

    result
}

/// Affine map from `[0, 1]` onto `[range[0], range[1]]`.
#[inline]
fn scale(unit: f64, range: [f64; 2]) -> f64 {
    range[0] + unit * (range[1] - range[0])
}

/// Sample `n_points` HSL colors from the given region.
///
/// Hue bounds may be negative (e.g. `[-30, 30]` for a region straddling
/// red); sampled hues below zero are wrapped by +360 so the emitted colors
/// are always in canonical form.
///
/// # Errors
///
/// Returns a domain error when the ranges violate
/// `-360 <= h_min <= h_max <= 360` with a span of at most 360,
/// `0 <= s <= 1`, `0 <= l <= 1`, or when `n_points` is zero.
pub fn hsl_candidates(
    h_lim: [f64; 2],
    s_lim: [f64; 2],
    l_lim: [f64; 2],
    n_points: usize,
) -> Result<Vec<Hsl>, Error> {
    validate_hsl_ranges(h_lim, s_lim, l_lim)?;
    validate_n_points(n_points)?;

    let colors = (1..=n_points as u64)
        .map(|i| {
            let h = scale(halton(i, 2), h_lim);
            let s = scale(halton(i, 3), s_lim);
            let l = scale(halton(i, 5), l_lim);
            Hsl::new(if h < 0.0 { h + 360.0 } else { h }, s, l)
        })
        .collect();

    Ok(colors)
}

/// Sample `n_points` LCh(ab) colors from the given region.
///
/// The axis order of the arguments mirrors [`hsl_candidates`] (angle,
/// radial, height), i.e. hue, chroma, lightness; the emitted colors carry
/// the components in LCh order.
///
/// # Errors
///
/// Returns a domain error when the ranges violate `0 <= h <= 360`,
/// `c >= 0`, `0 <= l <= 100`, or when `n_points` is zero.
pub fn lchab_candidates(
    h_lim: [f64; 2],
    c_lim: [f64; 2],
    l_lim: [f64; 2],
    n_points: usize,
) -> Result<Vec<Lchab>, Error> {
    validate_lchab_ranges(h_lim, c_lim, l_lim)?;
    validate_n_points(n_points)?;

    let colors = (1..=n_points as u64)
        .map(|i| {
            let h = scale(halton(i, 2), h_lim);
            let c = scale(halton(i, 3), c_lim);
            let l = scale(halton(i, 5), l_lim);
            Lchab::new(l, c, h)
        })
        .collect();

    Ok(colors)
}

pub(crate) fn validate_hsl_ranges(
    h_lim: [f64; 2],
    s_lim: [f64; 2],
    l_lim: [f64; 2],
) -> Result<(), Error> {
    if h_lim[0] > h_lim[1] || h_lim[0] < -360.0 || h_lim[1] > 360.0 {
        return Err(Error::InvalidColorspace(format!(
            "hue range [{}, {}] must satisfy -360 <= min <= max <= 360",
            h_lim[0], h_lim[1]
        )));
    }
    if h_lim[1] - h_lim[0] > 360.0 {
        return Err(Error::InvalidColorspace(format!(
            "hue range [{}, {}] must not span more than 360 degrees",
            h_lim[0], h_lim[1]
        )));
    }
    if s_lim[0] > s_lim[1] || s_lim[0] < 0.0 || s_lim[1] > 1.0 {
        return Err(Error::InvalidColorspace(format!(
            "saturation range [{}, {}] must satisfy 0 <= min <= max <= 1",
            s_lim[0], s_lim[1]
        )));
    }
    if l_lim[0] > l_lim[1] || l_lim[0] < 0.0 || l_lim[1] > 1.0 {
        return Err(Error::InvalidColorspace(format!(
            "lightness range [{}, {}] must satisfy 0 <= min <= max <= 1",
            l_lim[0], l_lim[1]
        )));
    }
    Ok(())
}

pub(crate) fn validate_lchab_ranges(
    h_lim: [f64; 2],
    c_lim: [f64; 2],
    l_lim: [f64; 2],
) -> Result<(), Error> {
    if h_lim[0] > h_lim[1] || h_lim[0] < 0.0 || h_lim[1] > 360.0 {
        return Err(Error::InvalidColorspace(format!(
            "hue range [{}, {}] must satisfy 0 <= min <= max <= 360",
            h_lim[0], h_lim[1]
        )));
    }
    if c_lim[0] > c_lim[1] || c_lim[0] < 0.0 {
        return Err(Error::InvalidColorspace(format!(
            "chroma range [{}, {}] must satisfy 0 <= min <= max",
            c_lim[0], c_lim[1]
        )));
    }
    if l_lim[0] > l_lim[1] || l_lim[0] < 0.0 || l_lim[1] > 100.0 {
        return Err(Error::InvalidColorspace(format!(
            "lightness range [{}, {}] must satisfy 0 <= min <= max <= 100",
            l_lim[0], l_lim[1]
        )));
    }
    Ok(())
}

fn validate_n_points(n_points: usize) -> Result<(), Error> {
    if n_points == 0 {
        return Err(Error::NonPositive {
            parameter: "number of points",
            value: 0.0,
        });
    }
    Ok(())
}
