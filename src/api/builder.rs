//! The `Qualpal` builder, the primary entry point of the crate.

use std::collections::BTreeMap;
use std::str::FromStr;

use super::error::{Error, Result};
use crate::color::{Rgb, Xyz};
use crate::cvd::{simulate_cvd, Deficiency};
use crate::generate::{self, ColorSpace};
use crate::palettes;
use crate::select::farthest_points;
use crate::metrics::MetricType;

/// Where the candidate pool comes from.
#[derive(Debug, Clone)]
enum InputSource {
    /// An explicit list of RGB colors.
    Rgb(Vec<Rgb>),
    /// Colors parsed from hex strings.
    Hex(Vec<Rgb>),
    /// A built-in palette reference, resolved at selection time.
    Preset(String),
    /// A sampled region of a cylindrical color space.
    Colorspace {
        h_lim: [f64; 2],
        s_or_c_lim: [f64; 2],
        l_lim: [f64; 2],
        space: ColorSpace,
    },
}

/// Fluent builder for qualitative palette generation.
///
/// Configure exactly one input source plus any options, then call
/// [`generate`](Self::generate) (or [`extend`](Self::extend) to grow an
/// existing palette). The builder takes `&self` for both, so one configured
/// instance can produce palettes of several sizes.
///
/// # Example
///
/// ```
/// use qualpal::{ColorSpace, Qualpal};
///
/// let palette = Qualpal::new()
///     .input_colorspace([0.0, 360.0], [0.3, 0.8], [0.4, 0.9], ColorSpace::Hsl)
///     .unwrap()
///     .generate(5)
///     .unwrap();
///
/// assert_eq!(palette.len(), 5);
/// ```
///
/// With a background and CVD-aware selection:
///
/// ```
/// use std::collections::BTreeMap;
/// use qualpal::{Deficiency, Qualpal, Rgb};
///
/// let palette = Qualpal::new()
///     .input_preset("ColorBrewer:Set3")
///     .unwrap()
///     .background(Rgb::new(1.0, 1.0, 1.0))
///     .cvd(BTreeMap::from([(Deficiency::Deutan, 0.7)]))
///     .unwrap()
///     .generate(4)
///     .unwrap();
///
/// assert_eq!(palette.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Qualpal {
    source: Option<InputSource>,
    n_points: Option<usize>,
    cvd: BTreeMap<Deficiency, f64>,
    bg: Option<Rgb>,
    metric: MetricType,
    max_memory_gb: Option<f64>,
}

/// Grid size used for colorspace input when none is configured.
const DEFAULT_N_POINTS: usize = 1000;

/// Memory budget in GB used when none is configured.
const DEFAULT_MAX_MEMORY_GB: f64 = 1.0;

impl Qualpal {
    /// Create an unconfigured builder.
    ///
    /// Defaults: DIN99d metric, 1000 colorspace points, 1 GB memory budget,
    /// no CVD simulation, no background. An input source must be set before
    /// generating.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit list of RGB colors as the candidate pool.
    pub fn input_rgb(mut self, colors: Vec<Rgb>) -> Self {
        self.source = Some(InputSource::Rgb(colors));
        self
    }

    /// Use a list of hex color strings as the candidate pool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHex`] for any string not of the form
    /// `#RRGGBB` or `#RGB`.
    pub fn input_hex<S: AsRef<str>>(mut self, colors: &[S]) -> Result<Self> {
        let parsed: Result<Vec<Rgb>> =
            colors.iter().map(|s| Rgb::from_str(s.as_ref())).collect();
        self.source = Some(InputSource::Hex(parsed?));
        Ok(self)
    }

    /// Use a built-in palette (`"Package:Name"`) as the candidate pool.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the reference is malformed or unknown;
    /// see [`palettes::get_palette`].
    pub fn input_preset(mut self, reference: &str) -> Result<Self> {
        palettes::get_palette(reference)?;
        self.source = Some(InputSource::Preset(reference.to_string()));
        Ok(self)
    }

    /// Sample the candidate pool from a region of a cylindrical color
    /// space.
    ///
    /// For [`ColorSpace::Hsl`] the ranges are hue (degrees), saturation and
    /// lightness; for [`ColorSpace::Lchab`] they are hue, chroma and
    /// lightness. The pool size defaults to 1000 points; see
    /// [`colorspace_size`](Self::colorspace_size).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColorspace`] when a range violates the
    /// bounds of the chosen space.
    pub fn input_colorspace(
        mut self,
        h_lim: [f64; 2],
        s_or_c_lim: [f64; 2],
        l_lim: [f64; 2],
        space: ColorSpace,
    ) -> Result<Self> {
        match space {
            ColorSpace::Hsl => generate::validate_hsl_ranges(h_lim, s_or_c_lim, l_lim)?,
            ColorSpace::Lchab => {
                generate::validate_lchab_ranges(h_lim, s_or_c_lim, l_lim)?
            }
        }
        self.source = Some(InputSource::Colorspace {
            h_lim,
            s_or_c_lim,
            l_lim,
            space,
        });
        Ok(self)
    }

    /// Configure color-vision-deficiency simulation, mapping each
    /// deficiency to a severity in `[0, 1]`.
    ///
    /// Selection then optimizes distinctness of the palette *as seen under
    /// every configured deficiency* (severity 0 entries are ignored).
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeverityOutOfRange`] for severities outside
    /// `[0, 1]`.
    pub fn cvd(mut self, cvd: BTreeMap<Deficiency, f64>) -> Result<Self> {
        for (&deficiency, &severity) in &cvd {
            if !(0.0..=1.0).contains(&severity) {
                return Err(Error::SeverityOutOfRange {
                    deficiency,
                    severity,
                });
            }
        }
        self.cvd = cvd;
        Ok(self)
    }

    /// Set a background color that every selected color must stay
    /// distinguishable from.
    pub fn background(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Select the color-difference metric (default: DIN99d with the power
    /// transform).
    pub fn metric(mut self, metric: MetricType) -> Self {
        self.metric = metric;
        self
    }

    /// Cap the memory used by the internal difference matrix, in GB
    /// (default: 1.0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositive`] when `gb <= 0`.
    pub fn memory_limit(mut self, gb: f64) -> Result<Self> {
        if gb <= 0.0 {
            return Err(Error::NonPositive {
                parameter: "memory limit",
                value: gb,
            });
        }
        self.max_memory_gb = Some(gb);
        Ok(self)
    }

    /// Set the number of candidates sampled in colorspace mode
    /// (default: 1000).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositive`] when `n_points` is zero.
    pub fn colorspace_size(mut self, n_points: usize) -> Result<Self> {
        if n_points == 0 {
            return Err(Error::NonPositive {
                parameter: "number of points",
                value: 0.0,
            });
        }
        self.n_points = Some(n_points);
        Ok(self)
    }

    /// Generate a palette of `n` maximally distinct colors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoInputSource`] when no input was configured, a
    /// domain error when the pool cannot supply `n` colors, or a resource
    /// error when the difference matrix would exceed the memory budget.
    pub fn generate(&self, n: usize) -> Result<Vec<Rgb>> {
        self.select(n, &[])
    }

    /// Extend an existing palette to `n` colors.
    ///
    /// The `fixed` colors are kept, in order, as the head of the result;
    /// the remaining `n - fixed.len()` colors are chosen from the candidate
    /// pool to maximize distinctness against the anchors and each other.
    pub fn extend(&self, fixed: &[Rgb], n: usize) -> Result<Vec<Rgb>> {
        self.select(n, fixed)
    }

    fn candidate_pool(&self) -> Result<Vec<Rgb>> {
        let n_points = self.n_points.unwrap_or(DEFAULT_N_POINTS);

        let pool = match self.source.as_ref().ok_or(Error::NoInputSource)? {
            InputSource::Rgb(colors) | InputSource::Hex(colors) => colors.clone(),
            InputSource::Preset(reference) => palettes::get_palette(reference)?
                .iter()
                .map(|hex| Rgb::from_str(hex))
                .collect::<Result<Vec<Rgb>>>()?,
            InputSource::Colorspace {
                h_lim,
                s_or_c_lim,
                l_lim,
                space,
            } => match space {
                ColorSpace::Hsl => {
                    generate::hsl_candidates(*h_lim, *s_or_c_lim, *l_lim, n_points)?
                        .into_iter()
                        .map(Rgb::from)
                        .collect()
                }
                ColorSpace::Lchab => {
                    generate::lchab_candidates(*h_lim, *s_or_c_lim, *l_lim, n_points)?
                        .into_iter()
                        .map(Rgb::from)
                        .collect()
                }
            },
        };

        if pool.is_empty() {
            return Err(Error::EmptyInput);
        }

        Ok(pool)
    }

    fn select(&self, n: usize, fixed: &[Rgb]) -> Result<Vec<Rgb>> {
        let pool = self.candidate_pool()?;
        let n_fixed = fixed.len();
        let max_memory_gb = self.max_memory_gb.unwrap_or(DEFAULT_MAX_MEMORY_GB);

        if n < n_fixed {
            return Err(Error::FixedExceedsRequest { n, n_fixed });
        }
        if pool.len() < n - n_fixed {
            return Err(Error::NotEnoughCandidates {
                requested: n - n_fixed,
                available: pool.len(),
            });
        }

        tracing::debug!(
            pool_size = pool.len(),
            n,
            n_fixed,
            metric = %self.metric,
            "selecting palette"
        );

        // Selector layout: anchors first, then candidates, background last.
        let mut all: Vec<Rgb> = Vec::with_capacity(n_fixed + pool.len() + 1);
        all.extend_from_slice(fixed);
        all.extend_from_slice(&pool);
        if let Some(bg) = self.bg {
            all.push(bg);
        }

        // Distances are measured on the CVD-simulated copies, but the
        // returned palette is always the original colors.
        let mut all_mod = all.clone();
        for (&deficiency, &severity) in &self.cvd {
            if severity > 0.0 {
                for color in &mut all_mod {
                    *color = simulate_cvd(*color, deficiency, severity)?;
                }
            }
        }

        let xyz: Vec<Xyz> = all_mod.iter().map(|&c| Xyz::from(c)).collect();

        let indices = farthest_points(
            n,
            &xyz,
            self.metric,
            self.bg.is_some(),
            n_fixed,
            max_memory_gb,
        )?;

        Ok(indices.into_iter().map(|i| all[i]).collect())
    }
}
