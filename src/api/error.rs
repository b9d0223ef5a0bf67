//! Unified error type for the public API.

use thiserror::Error;

use crate::cvd::Deficiency;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes of the public API.
///
/// Variants fall into two families: domain errors (invalid caller input,
/// each message naming the offending parameter and its legal range) and the
/// resource error [`Error::MatrixTooLarge`]. Violated internal invariants
/// are debug assertions, not error values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A hex color string did not match `#RGB` or `#RRGGBB`.
    #[error("invalid hex color {value:?}: expected \"#RRGGBB\" or \"#RGB\"")]
    InvalidHex {
        /// The rejected input.
        value: String,
    },

    /// An unrecognized color-vision-deficiency name.
    #[error("unknown color vision deficiency {name:?}: expected \"protan\", \"deutan\", or \"tritan\"")]
    UnknownDeficiency {
        /// The rejected name.
        name: String,
    },

    /// A CVD severity outside `[0, 1]`.
    #[error("severity {severity} for {deficiency} is out of range: must be within [0, 1]")]
    SeverityOutOfRange {
        /// The deficiency the severity was given for.
        deficiency: Deficiency,
        /// The rejected severity.
        severity: f64,
    },

    /// An unrecognized metric name.
    #[error("unknown metric {name:?}: expected \"din99d\", \"cie76\", or \"ciede2000\"")]
    UnknownMetric {
        /// The rejected name.
        name: String,
    },

    /// A palette reference without the `Package:Name` shape.
    #[error("invalid palette reference {reference:?}: expected format \"Package:Name\"")]
    MalformedPaletteReference {
        /// The rejected reference.
        reference: String,
    },

    /// A palette reference naming a package that does not exist.
    #[error("palette package {package:?} not found")]
    UnknownPalettePackage {
        /// The missing package.
        package: String,
    },

    /// A palette reference naming a palette missing from its package.
    #[error("palette {name:?} not found in package {package:?}")]
    UnknownPaletteName {
        /// The package that was searched.
        package: String,
        /// The missing palette name.
        name: String,
    },

    /// A colorspace range violated its bounds; the message carries the
    /// parameter and the legal range.
    #[error("{0}")]
    InvalidColorspace(String),

    /// The input pool resolved to zero colors.
    #[error("no input colors provided")]
    EmptyInput,

    /// `generate`/`extend` was called before any input source was set.
    #[error("no input source configured: set an RGB list, hex list, preset, or colorspace first")]
    NoInputSource,

    /// More fixed colors were supplied than palette slots requested.
    #[error("requested palette size {n} is smaller than the {n_fixed} fixed colors")]
    FixedExceedsRequest {
        /// Requested palette size.
        n: usize,
        /// Number of fixed colors supplied.
        n_fixed: usize,
    },

    /// The candidate pool cannot cover the requested number of new colors.
    #[error("requested {requested} new colors but only {available} candidates are available")]
    NotEnoughCandidates {
        /// Colors still needed after the fixed ones.
        requested: usize,
        /// Size of the candidate pool.
        available: usize,
    },

    /// A parameter that must be strictly positive was zero or negative.
    #[error("{parameter} must be greater than zero (got {value})")]
    NonPositive {
        /// Which parameter was rejected.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The difference matrix would exceed the configured memory budget.
    #[error(
        "distance matrix for {n} colors would require {required_gb:.2} GB, \
         exceeding the limit of {limit_gb:.2} GB"
    )]
    MatrixTooLarge {
        /// Number of colors.
        n: usize,
        /// Estimated matrix size in GB.
        required_gb: f64,
        /// Configured budget in GB.
        limit_gb: f64,
    },

    /// An unexpected runtime failure (e.g. the worker pool could not be
    /// built).
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_parameter() {
        let err = Error::SeverityOutOfRange {
            deficiency: Deficiency::Protan,
            severity: 1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("protan"));
        assert!(msg.contains("1.5"));
        assert!(msg.contains("[0, 1]"));

        let err = Error::MatrixTooLarge {
            n: 20000,
            required_gb: 2.98,
            limit_gb: 1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("20000"));
        assert!(msg.contains("2.98"));
        assert!(msg.contains("1.00"));
    }
}
