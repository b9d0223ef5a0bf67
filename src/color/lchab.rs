//! Cylindrical CIE LCh(ab) color type.

use super::{Din99d, Hsl, Lab, Rgb, Xyz};

/// A color in LCh(ab), the cylindrical form of [`Lab`].
///
/// Chroma and hue replace the Cartesian `a`/`b` axes, which makes the space
/// convenient for sampling ranges of lightness, colorfulness and hue
/// independently.
///
/// - `l`: lightness, 0 to 100
/// - `c`: chroma, >= 0
/// - `h`: hue in degrees, `[0, 360)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lchab {
    /// Lightness, `0.0..=100.0`
    pub l: f64,
    /// Chroma (radial distance from the neutral axis), `>= 0.0`
    pub c: f64,
    /// Hue angle in degrees, `0.0..360.0`
    pub h: f64,
}

impl Lchab {
    /// Create an LCh(ab) color from component values.
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }
}

impl From<Lab> for Lchab {
    /// Convert from Lab: `c = hypot(a, b)`, `h = atan2(b, a)` wrapped to
    /// `[0, 360)`.
    ///
    /// At `c = 0` the hue is undefined and comes out as 0; converting back
    /// still recovers the same Lab color.
    fn from(lab: Lab) -> Self {
        let c = lab.a.hypot(lab.b);
        let h = lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0);
        Self::new(lab.l, c, h)
    }
}

impl From<Xyz> for Lchab {
    fn from(xyz: Xyz) -> Self {
        Self::from(Lab::from(xyz))
    }
}

impl From<Rgb> for Lchab {
    fn from(rgb: Rgb) -> Self {
        Self::from(Lab::from(rgb))
    }
}

impl From<Hsl> for Lchab {
    fn from(hsl: Hsl) -> Self {
        Self::from(Lab::from(hsl))
    }
}

impl From<Din99d> for Lchab {
    fn from(din: Din99d) -> Self {
        Self::from(Lab::from(din))
    }
}
