//! HSL color type.

use super::{Din99d, Lab, Lchab, Rgb, Xyz};

/// A color in HSL (hue, saturation, lightness).
///
/// HSL is the intuitive space for describing regions of colors, which is why
/// the candidate sampler accepts ranges in it. Hue is in degrees `[0, 360)`,
/// saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, `0.0..360.0`
    pub h: f64,
    /// Saturation, `0.0..=1.0`
    pub s: f64,
    /// Lightness, `0.0..=1.0`
    pub l: f64,
}

impl Hsl {
    /// Create an HSL color from component values.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl From<Rgb> for Hsl {
    /// Convert from sRGB.
    ///
    /// Achromatic inputs (`max == min`) get hue 0; saturation is defined as
    /// 0 when lightness is exactly 0 or 1.
    fn from(rgb: Rgb) -> Self {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        let c = max - min;

        let l = 0.5 * (max + min);

        let h_prime = if c == 0.0 {
            0.0
        } else if max == rgb.r {
            ((rgb.g - rgb.b) / c).rem_euclid(6.0)
        } else if max == rgb.g {
            (rgb.b - rgb.r) / c + 2.0
        } else {
            (rgb.r - rgb.g) / c + 4.0
        };

        let s = if l == 0.0 || l == 1.0 {
            0.0
        } else {
            c / (1.0 - (2.0 * l - 1.0).abs())
        };

        Self::new(h_prime * 60.0, s, l)
    }
}

impl From<Xyz> for Hsl {
    fn from(xyz: Xyz) -> Self {
        Self::from(Rgb::from(xyz))
    }
}

impl From<Lab> for Hsl {
    fn from(lab: Lab) -> Self {
        Self::from(Rgb::from(lab))
    }
}

impl From<Lchab> for Hsl {
    fn from(lch: Lchab) -> Self {
        Self::from(Rgb::from(lch))
    }
}

impl From<Din99d> for Hsl {
    fn from(din: Din99d) -> Self {
        Self::from(Rgb::from(din))
    }
}
