//! CIE 1931 XYZ color type, the hub of the conversion graph.

use super::{Din99d, Hsl, Lab, Lchab, Rgb};

/// The D65 standard illuminant, the default white point throughout.
pub const D65: [f64; 3] = [0.95047, 1.0, 1.08883];

/// A color in CIE 1931 XYZ tristimulus coordinates.
///
/// XYZ is device-independent and linear in light, which makes it the natural
/// interchange point: every conversion between two non-adjacent spaces in
/// this crate routes through `Xyz`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    /// X tristimulus component
    pub x: f64,
    /// Y tristimulus component (luminance)
    pub y: f64,
    /// Z tristimulus component
    pub z: f64,
}

impl Xyz {
    /// Create an XYZ color from component values.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert from Lab under the given reference white point.
    ///
    /// Uses the CIE inverse with `epsilon = 216/24389` and
    /// `kappa = 24389/27`.
    pub fn from_lab_with_white_point(lab: Lab, white_point: [f64; 3]) -> Self {
        const EPSILON: f64 = 216.0 / 24389.0;
        const KAPPA: f64 = 24389.0 / 27.0;

        let fy = (lab.l + 16.0) / 116.0;
        let fx = lab.a / 500.0 + fy;
        let fz = fy - lab.b / 200.0;

        let fx3 = fx.powi(3);
        let fz3 = fz.powi(3);

        let xr = if fx3 > EPSILON {
            fx3
        } else {
            (116.0 * fx - 16.0) / KAPPA
        };
        let yr = if lab.l > KAPPA * EPSILON {
            ((lab.l + 16.0) / 116.0).powi(3)
        } else {
            lab.l / KAPPA
        };
        let zr = if fz3 > EPSILON {
            fz3
        } else {
            (116.0 * fz - 16.0) / KAPPA
        };

        Self::new(
            xr * white_point[0],
            yr * white_point[1],
            zr * white_point[2],
        )
    }
}

impl From<Rgb> for Xyz {
    /// Convert from sRGB: inverse companding per channel, then the sRGB
    /// matrix (D65-referenced).
    fn from(rgb: Rgb) -> Self {
        const RGB_TO_XYZ: [[f64; 3]; 3] = [
            [0.4124564, 0.3575761, 0.1804375],
            [0.2126729, 0.7151522, 0.0721750],
            [0.0193339, 0.1191920, 0.9503041],
        ];

        let decompand = |v: f64| {
            if v <= 0.04045 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        };

        let linear = [decompand(rgb.r), decompand(rgb.g), decompand(rgb.b)];
        let xyz = super::mul3(&RGB_TO_XYZ, linear);

        Self::new(xyz[0], xyz[1], xyz[2])
    }
}

impl From<Lab> for Xyz {
    /// Convert from Lab under the default D65 white point.
    fn from(lab: Lab) -> Self {
        Self::from_lab_with_white_point(lab, D65)
    }
}

impl From<Hsl> for Xyz {
    fn from(hsl: Hsl) -> Self {
        Self::from(Rgb::from(hsl))
    }
}

impl From<Lchab> for Xyz {
    fn from(lch: Lchab) -> Self {
        Self::from(Lab::from(lch))
    }
}

impl From<Din99d> for Xyz {
    /// Invert the DIN99d transform (D65-referenced).
    ///
    /// The forward transform is a bijection on its domain, so this recovers
    /// the original tristimulus values up to floating-point error.
    fn from(din: Din99d) -> Self {
        Din99d::to_xyz_with_white_point(din, D65)
    }
}
