//! qualpal: qualitative color palettes that maximize perceptual
//! distinctness.
//!
//! Given a pool of candidate colors (an explicit list, a built-in palette,
//! or a sampled region of a color space), the crate selects the `n` colors
//! that are as mutually distinguishable as possible, optionally accounting
//! for simulated color-vision deficiencies, a fixed background color, and
//! pre-existing colors that must be kept.
//!
//! # Quick start
//!
//! The [`Qualpal`] builder is the primary entry point:
//!
//! ```
//! use qualpal::{ColorSpace, Qualpal};
//!
//! let palette = Qualpal::new()
//!     .input_colorspace([0.0, 360.0], [0.4, 0.9], [0.3, 0.8], ColorSpace::Hsl)
//!     .unwrap()
//!     .generate(6)
//!     .unwrap();
//!
//! assert_eq!(palette.len(), 6);
//! println!("{}", palette[0].hex());
//! ```
//!
//! # Pipeline overview
//!
//! ```text
//! input pool               (RGB list | hex list | preset | Halton sample)
//!     |
//!     +--- prepend fixed anchors, append background
//!     |
//!     v
//! CVD simulation           (per configured deficiency, in linear RGB)
//!     |
//!     v
//! XYZ conversion           (hub color space)
//!     |
//!     v
//! difference matrix        (DIN99d / CIE76 / CIEDE2000; parallel fill,
//!     |                     memory-guarded)
//!     v
//! farthest-points search   (max-min local search; anchors frozen,
//!     |                     background repels)
//!     v
//! original RGB colors at the selected indices
//! ```
//!
//! # Color science
//!
//! Selection quality is only as good as the distance metric under it, so
//! the crate carries a full set of color-space transforms
//! ([`Rgb`], [`Hsl`], [`Xyz`], [`Lab`], [`Lchab`], [`Din99d`]) with tight
//! round-trip guarantees, and three perceptual metrics:
//!
//! - **DIN99d** (default): Euclidean distance in a log-compressed, rotated
//!   derivative of Lab, with a power transform that tracks perceived
//!   difference magnitude well for palette-sized separations.
//! - **CIE76**: plain Lab distance; fast and simple but overstates chroma
//!   differences in saturated regions.
//! - **CIEDE2000**: the CIE recommendation for small color differences.
//!
//! Color-vision deficiencies are simulated with the Machado (2009)
//! physiologically-based model, so a palette optimized with
//! [`Qualpal::cvd`] stays distinguishable for anomalous trichromats at the
//! configured severities.
//!
//! # Analysis
//!
//! [`analyze_palette`] turns the same machinery on existing palettes: it
//! reports pairwise difference matrices, per-color nearest-neighbor
//! distances, and background separation for normal vision and each
//! simulated deficiency.

pub mod analyze;
pub mod api;
pub mod color;
pub mod cvd;
pub mod difference;
pub mod generate;
pub mod matrix;
pub mod metrics;
pub mod palettes;
pub mod select;
pub mod threads;


pub use analyze::{analyze_palette, PaletteAnalysis, PaletteAnalysisMap};
pub use api::{Error, Qualpal, Result};
pub use color::{Din99d, Hsl, Lab, Lchab, Rgb, Xyz, D65};
pub use cvd::{simulate_cvd, Deficiency};
pub use difference::{color_difference_matrix, color_difference_matrix_xyz};
pub use generate::ColorSpace;
pub use matrix::Matrix;
pub use metrics::MetricType;
pub use select::farthest_points;
