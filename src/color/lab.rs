//! CIE L*a*b* color type.

use super::{Din99d, Hsl, Lchab, Rgb, Xyz, D65};

/// A color in CIE L\*a\*b\*.
///
/// Lab is approximately perceptually uniform: Euclidean distance in it is
/// the CIE76 color difference, and it is the starting point for CIEDE2000.
///
/// - `l`: lightness, 0 (black) to 100 (white)
/// - `a`: green-red axis
/// - `b`: blue-yellow axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness, `0.0..=100.0`
    pub l: f64,
    /// Green-red axis, negative toward green
    pub a: f64,
    /// Blue-yellow axis, negative toward blue
    pub b: f64,
}

impl Lab {
    /// Create a Lab color from component values.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert from XYZ under the given reference white point.
    ///
    /// Uses the CIE formula with `epsilon = 216/24389` and
    /// `kappa = 24389/27`, matching the inverse in
    /// [`Xyz::from_lab_with_white_point`] so round trips are exact to
    /// floating-point precision.
    pub fn from_xyz_with_white_point(xyz: Xyz, white_point: [f64; 3]) -> Self {
        const EPSILON: f64 = 216.0 / 24389.0;
        const KAPPA: f64 = 24389.0 / 27.0;

        let xr = xyz.x / white_point[0];
        let yr = xyz.y / white_point[1];
        let zr = xyz.z / white_point[2];

        let f = |t: f64| {
            if t > EPSILON {
                t.cbrt()
            } else {
                (KAPPA * t + 16.0) / 116.0
            }
        };

        let fx = f(xr);
        let fy = f(yr);
        let fz = f(zr);

        Self::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}

impl From<Xyz> for Lab {
    /// Convert from XYZ under the default D65 white point.
    fn from(xyz: Xyz) -> Self {
        Self::from_xyz_with_white_point(xyz, D65)
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        Self::from(Xyz::from(rgb))
    }
}

impl From<Hsl> for Lab {
    fn from(hsl: Hsl) -> Self {
        Self::from(Xyz::from(hsl))
    }
}

impl From<Lchab> for Lab {
    /// Convert from the cylindrical form: `a = c·cos(h)`, `b = c·sin(h)`.
    fn from(lch: Lchab) -> Self {
        let h_rad = lch.h.to_radians();
        Self::new(lch.l, lch.c * h_rad.cos(), lch.c * h_rad.sin())
    }
}

impl From<Din99d> for Lab {
    fn from(din: Din99d) -> Self {
        Self::from(Xyz::from(din))
    }
}
