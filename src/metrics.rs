//! Perceptual color-difference metrics.
//!
//! Three metrics are available, all symmetric and non-negative:
//!
//! - [`Din99d`]: Euclidean distance in the DIN99d space, by default with a
//!   power transform (`d^0.74 * 1.28`) that further linearizes perceived
//!   magnitude. The crate-wide default.
//! - [`Cie76`]: plain Euclidean distance in Lab.
//! - [`Ciede2000`]: the CIE Delta E 2000 formula.
//!
//! Each metric accepts any color type that converts into its native space,
//! so callers can hand over [`crate::Rgb`], [`crate::Xyz`], or already
//! converted values interchangeably. [`MetricType`] is the runtime tag used
//! where the metric is chosen by configuration rather than by type.

use std::fmt;
use std::str::FromStr;

use crate::api::Error;
use crate::color::{self, Lab};

/// Runtime selector for the supported color-difference metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricType {
    /// DIN99d difference with the default power transform.
    #[default]
    Din99d,
    /// CIE76 (Delta E 1976) difference.
    Cie76,
    /// CIEDE2000 (Delta E 2000) difference.
    Ciede2000,
}

impl MetricType {
    /// Compute the difference between two colors with this metric's default
    /// parameters.
    pub fn difference<C>(self, a: C, b: C) -> f64
    where
        C: Copy + Into<color::Din99d> + Into<Lab>,
    {
        match self {
            MetricType::Din99d => Din99d::default().difference(&a, &b),
            MetricType::Cie76 => Cie76.difference(&a, &b),
            MetricType::Ciede2000 => Ciede2000::default().difference(&a, &b),
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetricType::Din99d => "din99d",
            MetricType::Cie76 => "cie76",
            MetricType::Ciede2000 => "ciede2000",
        };
        f.write_str(name)
    }
}

impl FromStr for MetricType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "din99d" => Ok(MetricType::Din99d),
            "cie76" => Ok(MetricType::Cie76),
            "ciede2000" => Ok(MetricType::Ciede2000),
            _ => Err(Error::UnknownMetric {
                name: s.to_string(),
            }),
        }
    }
}

/// A color-difference function over colors of type `C`.
///
/// Implementations must be referentially transparent: the difference matrix
/// fill evaluates them concurrently and in unspecified order.
pub trait ColorMetric<C> {
    /// Perceptual difference between `a` and `b` (non-negative, symmetric,
    /// zero for identical inputs).
    fn difference(&self, a: &C, b: &C) -> f64;
}

/// DIN99d color difference with optional power transform.
///
/// The power transform (`d^0.74 * 1.28`) is on by default; use
/// [`Din99d::raw`] for untransformed Euclidean DIN99d distances.
#[derive(Debug, Clone, Copy)]
pub struct Din99d {
    use_power_transform: bool,
    power: f64,
    scale: f64,
}

impl Default for Din99d {
    fn default() -> Self {
        Self {
            use_power_transform: true,
            power: 0.74,
            scale: 1.28,
        }
    }
}

impl Din99d {
    /// The default metric: power transform enabled with `power = 0.74`,
    /// `scale = 1.28`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain Euclidean DIN99d distance, without the power transform.
    pub fn raw() -> Self {
        Self {
            use_power_transform: false,
            ..Self::default()
        }
    }
}

impl<C: Copy + Into<color::Din99d>> ColorMetric<C> for Din99d {
    fn difference(&self, a: &C, b: &C) -> f64 {
        let x: color::Din99d = (*a).into();
        let y: color::Din99d = (*b).into();

        let d = hypot3(x.l - y.l, x.a - y.a, x.b - y.b);

        if self.use_power_transform {
            d.powf(self.power) * self.scale
        } else {
            d
        }
    }
}

/// CIE76 (Delta E 1976): Euclidean distance in Lab.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cie76;

impl<C: Copy + Into<Lab>> ColorMetric<C> for Cie76 {
    fn difference(&self, a: &C, b: &C) -> f64 {
        let x: Lab = (*a).into();
        let y: Lab = (*b).into();
        hypot3(x.l - y.l, x.a - y.a, x.b - y.b)
    }
}

/// CIEDE2000 (Delta E 2000) color difference.
///
/// Implements the full formula, including the chroma-dependent `G`
/// correction, the hue-mean branch rules, and the blue-region rotation term.
#[derive(Debug, Clone, Copy)]
pub struct Ciede2000 {
    k_l: f64,
    k_c: f64,
    k_h: f64,
}

impl Default for Ciede2000 {
    fn default() -> Self {
        Self {
            k_l: 1.0,
            k_c: 1.0,
            k_h: 1.0,
        }
    }
}

impl Ciede2000 {
    /// The reference conditions: `K_L = K_C = K_H = 1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom parametric weighting factors; each must be positive.
    pub fn with_weights(k_l: f64, k_c: f64, k_h: f64) -> Result<Self, Error> {
        for (parameter, value) in [("K_L", k_l), ("K_C", k_c), ("K_H", k_h)] {
            if value <= 0.0 {
                return Err(Error::NonPositive { parameter, value });
            }
        }
        Ok(Self { k_l, k_c, k_h })
    }
}

impl<C: Copy + Into<Lab>> ColorMetric<C> for Ciede2000 {
    fn difference(&self, a: &C, b: &C) -> f64 {
        let x: Lab = (*a).into();
        let y: Lab = (*b).into();

        const POW25_7: f64 = 6103515625.0; // 25^7

        let l_mean = (x.l + y.l) / 2.0;
        let c1 = x.a.hypot(x.b);
        let c2 = y.a.hypot(y.b);
        let c_mean = (c1 + c2) / 2.0;

        let g = 0.5 * (1.0 - (c_mean.powi(7) / (c_mean.powi(7) + POW25_7)).sqrt());
        let a1_prime = x.a * (1.0 + g);
        let a2_prime = y.a * (1.0 + g);

        let c1_prime = a1_prime.hypot(x.b);
        let c2_prime = a2_prime.hypot(y.b);
        let c_mean_prime = (c1_prime + c2_prime) / 2.0;

        let h1_prime = atan2d(x.b, a1_prime);
        let h2_prime = atan2d(y.b, a2_prime);

        let h_mean_prime = if (h1_prime - h2_prime).abs() <= 180.0 {
            (h1_prime + h2_prime) / 2.0
        } else if h1_prime + h2_prime < 360.0 {
            (h1_prime + h2_prime + 360.0) / 2.0
        } else {
            (h1_prime + h2_prime - 360.0) / 2.0
        };

        let t = 1.0 - 0.17 * cosd(h_mean_prime - 30.0)
            + 0.24 * cosd(2.0 * h_mean_prime)
            + 0.32 * cosd(3.0 * h_mean_prime + 6.0)
            - 0.20 * cosd(4.0 * h_mean_prime - 63.0);

        let mut delta_h_prime = h2_prime - h1_prime;
        if delta_h_prime.abs() > 180.0 {
            if h2_prime <= h1_prime {
                delta_h_prime += 360.0;
            } else {
                delta_h_prime -= 360.0;
            }
        }

        let delta_l_prime = y.l - x.l;
        let delta_c_prime = c2_prime - c1_prime;
        let delta_hh_prime =
            2.0 * (c1_prime * c2_prime).sqrt() * sind(delta_h_prime / 2.0);

        let s_l = 1.0
            + (0.015 * (l_mean - 50.0).powi(2)) / (20.0 + (l_mean - 50.0).powi(2)).sqrt();
        let s_c = 1.0 + 0.045 * c_mean_prime;
        let s_h = 1.0 + 0.015 * c_mean_prime * t;

        let delta_theta = 30.0 * (-((h_mean_prime - 275.0) / 25.0).powi(2)).exp();
        let r_c =
            2.0 * (c_mean_prime.powi(7) / (c_mean_prime.powi(7) + POW25_7)).sqrt();
        let r_t = -r_c * sind(2.0 * delta_theta);

        let dl = delta_l_prime / (self.k_l * s_l);
        let dc = delta_c_prime / (self.k_c * s_c);
        let dh = delta_hh_prime / (self.k_h * s_h);

        let out = (dl * dl + dc * dc + dh * dh + r_t * dc * dh).sqrt();

        debug_assert!(out.is_finite(), "CIEDE2000 must be finite");

        out
    }
}

#[inline]
fn hypot3(a: f64, b: f64, c: f64) -> f64 {
    (a * a + b * b + c * c).sqrt()
}

#[inline]
fn cosd(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

#[inline]
fn sind(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// `atan2` in degrees, mapped to `[0, 360)`.
#[inline]
fn atan2d(y: f64, x: f64) -> f64 {
    let deg = y.atan2(x).to_degrees();
    if deg >= 0.0 {
        deg
    } else {
        deg + 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    #[test]
    fn test_metric_type_string_round_trip() {
        for (name, metric) in [
            ("din99d", MetricType::Din99d),
            ("cie76", MetricType::Cie76),
            ("ciede2000", MetricType::Ciede2000),
        ] {
            assert_eq!(name.parse::<MetricType>().unwrap(), metric);
            assert_eq!(metric.to_string(), name);
        }
        assert!("cie1931".parse::<MetricType>().is_err());
    }

    #[test]
    fn test_metrics_are_zero_on_identical_inputs() {
        let lab = Lab::new(50.0, 10.0, -20.0);
        assert_eq!(Cie76.difference(&lab, &lab), 0.0);
        assert_eq!(Ciede2000::new().difference(&lab, &lab), 0.0);
        assert_eq!(Din99d::new().difference(&lab, &lab), 0.0);
    }

    #[test]
    fn test_metrics_are_symmetric_and_nonnegative() {
        let pairs = [
            (Rgb::new(0.1, 0.9, 0.4), Rgb::new(0.8, 0.2, 0.6)),
            (Rgb::new(0.0, 0.0, 0.0), Rgb::new(1.0, 1.0, 1.0)),
            (Rgb::new(0.5, 0.5, 0.5), Rgb::new(0.5, 0.5, 0.6)),
        ];
        for (a, b) in pairs {
            for metric in [MetricType::Din99d, MetricType::Cie76, MetricType::Ciede2000] {
                let ab = metric.difference(a, b);
                let ba = metric.difference(b, a);
                assert!(ab >= 0.0);
                assert!(
                    (ab - ba).abs() < 1e-12,
                    "{metric} asymmetric: {ab} vs {ba}"
                );
            }
        }
    }

    #[test]
    fn test_cie76_is_lab_euclidean() {
        let a = Lab::new(50.0, 0.0, 0.0);
        let b = Lab::new(100.0, 0.0, 0.0);
        assert!((Cie76.difference(&a, &b) - 50.0).abs() < 1e-12);

        let c = Lab::new(50.0, 3.0, 4.0);
        assert!((Cie76.difference(&a, &c) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_din99d_power_transform() {
        let a = Rgb::new(0.0, 0.0, 0.0);
        let b = Rgb::new(1.0, 1.0, 1.0);

        let raw = Din99d::raw().difference(&a, &b);
        let transformed = Din99d::new().difference(&a, &b);

        // Black to white is ~100 raw; the transform maps d to d^0.74 * 1.28.
        assert!((raw - 100.0).abs() < 0.01, "raw distance {raw}");
        assert!(
            (transformed - raw.powf(0.74) * 1.28).abs() < 1e-9,
            "transform mismatch: {transformed}"
        );
    }

    /// Reference pairs from the published CIEDE2000 test data
    /// (Sharma, Wu & Dalal 2005), including the hue-mean branch cases.
    #[test]
    fn test_ciede2000_reference_pairs() {
        let cases = [
            (
                Lab::new(50.0, 2.6772, -79.7751),
                Lab::new(50.0, 0.0, -82.7485),
                2.0425,
            ),
            (
                Lab::new(50.0, 3.1571, -77.2803),
                Lab::new(50.0, 0.0, -82.7485),
                2.8615,
            ),
            (
                Lab::new(50.0, 2.8361, -74.0200),
                Lab::new(50.0, 0.0, -82.7485),
                3.4412,
            ),
            (
                Lab::new(50.0, 0.0, 0.0),
                Lab::new(50.0, -1.0, 2.0),
                2.3669,
            ),
            // These two pairs differ only in the sign region of b2 and pin
            // the hue-mean branch selection.
            (
                Lab::new(50.0, 2.4900, -0.0010),
                Lab::new(50.0, -2.4900, 0.0009),
                7.1792,
            ),
            (
                Lab::new(50.0, 2.4900, -0.0010),
                Lab::new(50.0, -2.4900, 0.0011),
                7.2195,
            ),
            (
                Lab::new(2.0776, 0.0795, -1.1350),
                Lab::new(0.9033, -0.0636, -0.5514),
                0.9082,
            ),
        ];

        let metric = Ciede2000::new();
        for (a, b, expected) in cases {
            let got = metric.difference(&a, &b);
            assert!(
                (got - expected).abs() < 1e-3,
                "CIEDE2000({a:?}, {b:?}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_ciede2000_rejects_nonpositive_weights() {
        assert!(Ciede2000::with_weights(0.0, 1.0, 1.0).is_err());
        assert!(Ciede2000::with_weights(1.0, -1.0, 1.0).is_err());
        assert!(Ciede2000::with_weights(2.0, 1.0, 0.5).is_ok());
    }
}
