//! DIN99d color type.
//!
//! DIN99d compresses Lab so that equal Euclidean distances match perceived
//! differences more closely, especially for large differences. That makes it
//! the default space for palette optimization here.

use super::{Hsl, Lab, Lchab, Rgb, Xyz, D65};

/// Rotation angle shared by the forward and inverse transforms.
const U: f64 = 50.0 * std::f64::consts::PI / 180.0;

/// A color in the DIN99d color space.
///
/// The components mirror Lab (`l`, `a`, `b`) but live in the compressed
/// DIN99d geometry. Euclidean distance in this space is the basis of the
/// default palette metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Din99d {
    /// DIN99d lightness
    pub l: f64,
    /// DIN99d green-red component
    pub a: f64,
    /// DIN99d blue-yellow component
    pub b: f64,
}

impl Din99d {
    /// Create a DIN99d color from component values.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert from XYZ under the given reference white point.
    ///
    /// The transform blends a little Z into X (`x' = 1.12x - 0.12z`,
    /// applied to the white point as well), converts to Lab under that
    /// adjusted white, then rotates and logarithmically compresses the
    /// chroma plane and the lightness axis.
    pub fn from_xyz_with_white_point(xyz: Xyz, white_point: [f64; 3]) -> Self {
        let adjusted = Xyz::new(1.12 * xyz.x - 0.12 * xyz.z, xyz.y, xyz.z);
        let adjusted_white = [
            1.12 * white_point[0] - 0.12 * white_point[2],
            white_point[1],
            white_point[2],
        ];

        let lab = Lab::from_xyz_with_white_point(adjusted, adjusted_white);

        let e = lab.a * U.cos() + lab.b * U.sin();
        let f = 1.14 * (lab.b * U.cos() - lab.a * U.sin());
        let g = e.hypot(f);

        let c99d = 22.5 * (0.06 * g).ln_1p();
        let h99d = f.atan2(e) + U;

        let l99d = 325.22 * (0.0036 * lab.l).ln_1p();

        Self::new(l99d, c99d * h99d.cos(), c99d * h99d.sin())
    }

    /// Invert the transform back to XYZ under the given white point.
    pub(crate) fn to_xyz_with_white_point(din: Din99d, white_point: [f64; 3]) -> Xyz {
        let l = (din.l / 325.22).exp_m1() / 0.0036;

        let c99d = din.a.hypot(din.b);
        let h = din.b.atan2(din.a) - U;
        let g = (c99d / 22.5).exp_m1() / 0.06;

        let e = g * h.cos();
        let f = g * h.sin();

        let a = e * U.cos() - (f / 1.14) * U.sin();
        let b = e * U.sin() + (f / 1.14) * U.cos();

        let adjusted_white = [
            1.12 * white_point[0] - 0.12 * white_point[2],
            white_point[1],
            white_point[2],
        ];
        let adjusted = Xyz::from_lab_with_white_point(Lab::new(l, a, b), adjusted_white);

        Xyz::new((adjusted.x + 0.12 * adjusted.z) / 1.12, adjusted.y, adjusted.z)
    }
}

impl From<Xyz> for Din99d {
    /// Convert from XYZ under the default D65 white point.
    fn from(xyz: Xyz) -> Self {
        Self::from_xyz_with_white_point(xyz, D65)
    }
}

impl From<Rgb> for Din99d {
    fn from(rgb: Rgb) -> Self {
        Self::from(Xyz::from(rgb))
    }
}

impl From<Hsl> for Din99d {
    fn from(hsl: Hsl) -> Self {
        Self::from(Xyz::from(hsl))
    }
}

impl From<Lab> for Din99d {
    fn from(lab: Lab) -> Self {
        Self::from(Xyz::from(lab))
    }
}

impl From<Lchab> for Din99d {
    fn from(lch: Lchab) -> Self {
        Self::from(Xyz::from(lch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_is_origin() {
        let black = Din99d::from(Rgb::new(0.0, 0.0, 0.0));
        assert!(black.l.abs() < 1e-9);
        assert!(black.a.abs() < 1e-9);
        assert!(black.b.abs() < 1e-9);
    }

    #[test]
    fn test_white_lightness_near_100() {
        // 325.22 * ln(1 + 0.36) is 100 to within a few 1e-4.
        let white = Din99d::from(Rgb::new(1.0, 1.0, 1.0));
        assert!((white.l - 100.0).abs() < 0.01, "got {}", white.l);
        // The sRGB matrix rows do not sum to exactly 1, so white carries a
        // residual chroma on the order of 1e-5.
        assert!(white.a.abs() < 1e-3);
        assert!(white.b.abs() < 1e-3);
    }

    #[test]
    fn test_grays_stay_on_neutral_axis() {
        for v in [0.2, 0.5, 0.8] {
            let gray = Din99d::from(Rgb::new(v, v, v));
            assert!(gray.a.abs() < 1e-3, "a = {} for gray {v}", gray.a);
            assert!(gray.b.abs() < 1e-3, "b = {} for gray {v}", gray.b);
        }
    }

    #[test]
    fn test_xyz_round_trip() {
        let samples = [
            Xyz::new(0.2, 0.3, 0.4),
            Xyz::new(0.5, 0.4, 0.1),
            Xyz::new(0.05, 0.08, 0.2),
        ];
        for xyz in samples {
            let back = Xyz::from(Din99d::from(xyz));
            assert!((back.x - xyz.x).abs() < 1e-6, "x: {} vs {}", back.x, xyz.x);
            assert!((back.y - xyz.y).abs() < 1e-6, "y: {} vs {}", back.y, xyz.y);
            assert!((back.z - xyz.z).abs() < 1e-6, "z: {} vs {}", back.z, xyz.z);
        }
    }

    #[test]
    fn test_lightness_compression_is_monotone() {
        let mut last = -1.0;
        for v in [0.0, 0.1, 0.3, 0.5, 0.7, 0.9, 1.0] {
            let l = Din99d::from(Rgb::new(v, v, v)).l;
            assert!(l > last, "lightness must increase with input gray level");
            last = l;
        }
    }
}
