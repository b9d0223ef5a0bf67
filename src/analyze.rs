//! Palette distinguishability analysis.
//!
//! [`analyze_palette`] quantifies how well a palette holds up, for normal
//! vision and under simulated color-vision deficiencies: the full pairwise
//! difference matrix, each color's nearest-neighbor distance, and (when a
//! background is given) the closest approach to the background.

use std::collections::BTreeMap;

use crate::api::Error;
use crate::color::{Rgb, Xyz};
use crate::cvd::{simulate_cvd, Deficiency};
use crate::difference::color_difference_matrix_xyz;
use crate::matrix::Matrix;
use crate::metrics::MetricType;

/// Analysis results for one vision condition.
#[derive(Debug, Clone)]
pub struct PaletteAnalysis {
    /// Pairwise color differences, `N` x `N`.
    pub difference_matrix: Matrix<f64>,
    /// For each color, the minimum difference to any other palette color.
    /// `NaN` for a single-color palette.
    pub min_distances: Vec<f64>,
    /// Minimum difference between the background and any palette color;
    /// `NaN` when no background was given.
    pub bg_min_distance: f64,
}

/// Map from vision condition (`"normal"`, `"deutan"`, `"protan"`,
/// `"tritan"`) to its analysis. Ordered so iteration is deterministic.
pub type PaletteAnalysisMap = BTreeMap<String, PaletteAnalysis>;

/// Analyze a palette under normal vision and the given CVD simulations.
///
/// The result always contains the `"normal"` entry; each deficiency in
/// `cvd` contributes an entry analyzed at its severity (an empty map means
/// normal vision only). The background, when present, is simulated along
/// with the palette.
///
/// # Errors
///
/// Returns a domain error for severities outside `[0, 1]` and a resource
/// error when a difference matrix would exceed `max_memory_gb`.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use qualpal::{analyze_palette, Deficiency, MetricType, Rgb};
///
/// let palette = [Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 0.0, 1.0)];
/// let cvd = BTreeMap::from([(Deficiency::Deutan, 1.0)]);
/// let result = analyze_palette(&palette, MetricType::Din99d, &cvd, None, 1.0).unwrap();
///
/// assert!(result.contains_key("normal"));
/// assert!(result.contains_key("deutan"));
/// ```
pub fn analyze_palette(
    colors: &[Rgb],
    metric: MetricType,
    cvd: &BTreeMap<Deficiency, f64>,
    bg: Option<Rgb>,
    max_memory_gb: f64,
) -> Result<PaletteAnalysisMap, Error> {
    for (&deficiency, &severity) in cvd {
        if !(0.0..=1.0).contains(&severity) {
            return Err(Error::SeverityOutOfRange {
                deficiency,
                severity,
            });
        }
    }

    let mut result = PaletteAnalysisMap::new();

    let mut visions: Vec<(String, Option<Deficiency>, f64)> =
        vec![("normal".to_string(), None, 0.0)];
    for (&deficiency, &severity) in cvd {
        visions.push((deficiency.to_string(), Some(deficiency), severity));
    }

    for (tag, deficiency, severity) in visions {
        let (sim_colors, sim_bg) = match deficiency {
            Some(d) if severity > 0.0 => {
                let sim: Result<Vec<Rgb>, Error> = colors
                    .iter()
                    .map(|&c| simulate_cvd(c, d, severity))
                    .collect();
                let bg = bg.map(|b| simulate_cvd(b, d, severity)).transpose()?;
                (sim?, bg)
            }
            _ => (colors.to_vec(), bg),
        };

        let xyz: Vec<Xyz> = sim_colors.iter().map(|&c| Xyz::from(c)).collect();
        let difference_matrix = color_difference_matrix_xyz(&xyz, metric, max_memory_gb)?;

        let n = difference_matrix.nrow();
        let min_distances: Vec<f64> = (0..n)
            .map(|i| {
                (0..n)
                    .filter(|&j| j != i)
                    .map(|j| difference_matrix[(i, j)])
                    .fold(f64::NAN, f64::min)
            })
            .collect();

        let bg_min_distance = match sim_bg {
            Some(background) => {
                let bg_xyz = Xyz::from(background);
                xyz.iter()
                    .map(|&c| metric.difference(c, bg_xyz))
                    .fold(f64::MAX, f64::min)
            }
            None => f64::NAN,
        };

        result.insert(
            tag,
            PaletteAnalysis {
                difference_matrix,
                min_distances,
                bg_min_distance,
            },
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<Rgb> {
        vec![
            Rgb::new(0.9, 0.1, 0.1),
            Rgb::new(0.1, 0.8, 0.2),
            Rgb::new(0.1, 0.2, 0.9),
        ]
    }

    #[test]
    fn test_empty_cvd_map_gives_normal_only() {
        let result =
            analyze_palette(&palette(), MetricType::Din99d, &BTreeMap::new(), None, 1.0)
                .unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.contains_key("normal"));
    }

    #[test]
    fn test_all_deficiencies_present() {
        let cvd = BTreeMap::from([
            (Deficiency::Deutan, 1.0),
            (Deficiency::Protan, 1.0),
            (Deficiency::Tritan, 0.5),
        ]);
        let result =
            analyze_palette(&palette(), MetricType::Ciede2000, &cvd, None, 1.0).unwrap();
        let keys: Vec<&str> = result.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["deutan", "normal", "protan", "tritan"]);
    }

    #[test]
    fn test_min_distances_match_matrix() {
        let result =
            analyze_palette(&palette(), MetricType::Din99d, &BTreeMap::new(), None, 1.0)
                .unwrap();
        let normal = &result["normal"];
        let m = &normal.difference_matrix;

        for i in 0..3 {
            let expected = (0..3)
                .filter(|&j| j != i)
                .map(|j| m[(i, j)])
                .fold(f64::MAX, f64::min);
            assert_eq!(normal.min_distances[i], expected);
        }
        assert!(normal.bg_min_distance.is_nan());
    }

    #[test]
    fn test_single_color_min_distance_is_nan() {
        let result = analyze_palette(
            &[Rgb::new(0.4, 0.4, 0.4)],
            MetricType::Cie76,
            &BTreeMap::new(),
            None,
            1.0,
        )
        .unwrap();
        assert!(result["normal"].min_distances[0].is_nan());
    }

    #[test]
    fn test_background_distance() {
        let bg = Rgb::new(1.0, 1.0, 1.0);
        let result = analyze_palette(
            &palette(),
            MetricType::Din99d,
            &BTreeMap::new(),
            Some(bg),
            1.0,
        )
        .unwrap();
        let normal = &result["normal"];

        let expected = palette()
            .iter()
            .map(|&c| MetricType::Din99d.difference(Xyz::from(c), Xyz::from(bg)))
            .fold(f64::MAX, f64::min);
        assert!((normal.bg_min_distance - expected).abs() < 1e-12);
    }

    #[test]
    fn test_cvd_simulation_shrinks_red_green_separation() {
        let two = [Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 1.0, 0.0)];
        let cvd = BTreeMap::from([(Deficiency::Protan, 1.0)]);
        let result = analyze_palette(&two, MetricType::Din99d, &cvd, None, 1.0).unwrap();

        let normal = result["normal"].min_distances[0];
        let protan = result["protan"].min_distances[0];
        assert!(
            protan < normal,
            "protan simulation must shrink red-green separation ({protan} vs {normal})"
        );
    }

    #[test]
    fn test_invalid_severity_is_rejected() {
        let cvd = BTreeMap::from([(Deficiency::Deutan, 1.5)]);
        assert!(analyze_palette(&palette(), MetricType::Din99d, &cvd, None, 1.0).is_err());
    }
}
