//! Color-vision-deficiency (CVD) simulation.
//!
//! [`simulate_cvd`] transforms an sRGB color to approximate how it appears
//! to an observer with anomalous trichromacy, using the Machado (2009)
//! physiological model: decode to linear RGB, apply a severity-interpolated
//! 3x3 matrix, re-encode, and clamp.
//!
//! ```
//! use qualpal::{simulate_cvd, Deficiency, Rgb};
//!
//! let red = Rgb::new(1.0, 0.0, 0.0);
//! let seen = simulate_cvd(red, Deficiency::Deutan, 1.0).unwrap();
//! // Full deuteranopia pulls pure red strongly toward yellow-brown.
//! assert!(seen.g > 0.3);
//! ```

mod machado;

use std::fmt;
use std::str::FromStr;

use crate::api::Error;
use crate::color::{mul3, Rgb};

/// The three classes of anomalous trichromacy.
///
/// The `Ord` impl follows the deficiency names alphabetically, which fixes
/// the iteration (and therefore simulation) order when several deficiencies
/// are configured in one map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Deficiency {
    /// Deuteranomaly (green-weak), the most common form.
    Deutan,
    /// Protanomaly (red-weak).
    Protan,
    /// Tritanomaly (blue-weak), rare.
    Tritan,
}

impl Deficiency {
    /// All deficiency types, in the canonical order.
    pub const ALL: [Deficiency; 3] =
        [Deficiency::Deutan, Deficiency::Protan, Deficiency::Tritan];

    fn table(self) -> &'static [[[f64; 3]; 3]; machado::STEPS] {
        match self {
            Deficiency::Protan => &machado::PROTAN,
            Deficiency::Deutan => &machado::DEUTAN,
            Deficiency::Tritan => &machado::TRITAN,
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Deficiency::Deutan => "deutan",
            Deficiency::Protan => "protan",
            Deficiency::Tritan => "tritan",
        };
        f.write_str(name)
    }
}

impl FromStr for Deficiency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deutan" => Ok(Deficiency::Deutan),
            "protan" => Ok(Deficiency::Protan),
            "tritan" => Ok(Deficiency::Tritan),
            _ => Err(Error::UnknownDeficiency {
                name: s.to_string(),
            }),
        }
    }
}

/// Simulate a color-vision deficiency at the given severity.
///
/// Severity 0.0 returns the input unchanged; 1.0 applies the full
/// (dichromatic) simulation; intermediate severities interpolate linearly
/// between the published coefficient matrices, which are sampled at 0.1
/// steps. The matrix is applied in linear RGB and the result is clamped to
/// the sRGB gamut.
///
/// # Errors
///
/// Returns [`Error::SeverityOutOfRange`] unless `0.0 <= severity <= 1.0`.
pub fn simulate_cvd(rgb: Rgb, deficiency: Deficiency, severity: f64) -> Result<Rgb, Error> {
    if !(0.0..=1.0).contains(&severity) {
        return Err(Error::SeverityOutOfRange {
            deficiency,
            severity,
        });
    }

    let table = deficiency.table();

    let scaled = severity * (machado::STEPS - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = lower.min(machado::STEPS - 2) + 1;
    let t = scaled - lower as f64;

    let mut m = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            m[i][j] = table[lower][i][j] * (1.0 - t) + table[upper][i][j] * t;
        }
    }

    let decompand = |v: f64| {
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    let compand = |v: f64| {
        let v = if v > 0.0031308 {
            1.055 * v.powf(1.0 / 2.4) - 0.055
        } else {
            12.92 * v
        };
        v.clamp(0.0, 1.0)
    };

    let linear = [decompand(rgb.r), decompand(rgb.g), decompand(rgb.b)];
    let simulated = mul3(&m, linear);

    Ok(Rgb::new(
        compand(simulated[0]),
        compand(simulated[1]),
        compand(simulated[2]),
    ))
}
