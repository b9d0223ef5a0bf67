//! End-to-end tests of the public palette pipeline.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use qualpal::{
    analyze_palette, palettes, ColorSpace, Deficiency, Error, MetricType, Qualpal, Rgb,
};

#[test]
fn generate_from_preset_end_to_end() {
    let palette = Qualpal::new()
        .input_preset("ColorBrewer:Set1")
        .unwrap()
        .generate(4)
        .unwrap();

    assert_eq!(palette.len(), 4);

    // Every output color is one of the preset colors.
    let preset: Vec<Rgb> = palettes::get_palette("ColorBrewer:Set1")
        .unwrap()
        .iter()
        .map(|hex| hex.parse().unwrap())
        .collect();
    for color in &palette {
        assert!(preset.contains(color));
    }

    // Deterministic across repeated runs.
    let again = Qualpal::new()
        .input_preset("ColorBrewer:Set1")
        .unwrap()
        .generate(4)
        .unwrap();
    assert_eq!(palette, again);
}

#[test]
fn generate_from_lchab_region() {
    let palette = Qualpal::new()
        .input_colorspace([0.0, 360.0], [20.0, 60.0], [40.0, 80.0], ColorSpace::Lchab)
        .unwrap()
        .colorspace_size(250)
        .unwrap()
        .generate(5)
        .unwrap();

    assert_eq!(palette.len(), 5);
    for color in &palette {
        assert!(color.r >= 0.0 && color.r <= 1.0);
        assert!(color.g >= 0.0 && color.g <= 1.0);
        assert!(color.b >= 0.0 && color.b <= 1.0);
    }
}

#[test]
fn full_configuration_end_to_end() {
    let palette = Qualpal::new()
        .input_colorspace([-120.0, 120.0], [0.3, 0.9], [0.3, 0.8], ColorSpace::Hsl)
        .unwrap()
        .colorspace_size(400)
        .unwrap()
        .metric(MetricType::Ciede2000)
        .background(Rgb::new(1.0, 1.0, 1.0))
        .cvd(BTreeMap::from([
            (Deficiency::Deutan, 0.8),
            (Deficiency::Protan, 0.4),
        ]))
        .unwrap()
        .memory_limit(0.5)
        .unwrap()
        .generate(6)
        .unwrap();

    assert_eq!(palette.len(), 6);

    // All six colors pairwise distinct.
    for i in 0..6 {
        for j in (i + 1)..6 {
            assert!(palette[i] != palette[j], "duplicate color in palette");
        }
    }
}

#[test]
fn analysis_of_generated_palette() {
    let palette = Qualpal::new()
        .input_preset("Tableau:10")
        .unwrap()
        .generate(5)
        .unwrap();

    let cvd = BTreeMap::from([(Deficiency::Deutan, 1.0), (Deficiency::Tritan, 1.0)]);
    let analysis = analyze_palette(
        &palette,
        MetricType::Din99d,
        &cvd,
        Some(Rgb::new(1.0, 1.0, 1.0)),
        1.0,
    )
    .unwrap();

    let keys: Vec<&str> = analysis.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["deutan", "normal", "tritan"]);

    for (tag, entry) in &analysis {
        assert_eq!(entry.difference_matrix.nrow(), 5);
        assert_eq!(entry.min_distances.len(), 5);
        assert!(
            entry.bg_min_distance.is_finite(),
            "{tag} background distance should be finite"
        );
        for &d in &entry.min_distances {
            assert!(d > 0.0, "{tag} min distance should be positive");
        }
    }
}

#[test]
fn memory_budget_is_enforced_end_to_end() {
    let result = Qualpal::new()
        .input_colorspace([0.0, 360.0], [0.0, 1.0], [0.0, 1.0], ColorSpace::Hsl)
        .unwrap()
        .colorspace_size(20_000)
        .unwrap()
        .memory_limit(0.001)
        .unwrap()
        .generate(4);

    match result {
        Err(Error::MatrixTooLarge {
            required_gb,
            limit_gb,
            ..
        }) => {
            assert!(required_gb > limit_gb);
        }
        other => panic!("expected MatrixTooLarge, got {other:?}"),
    }
}

#[test]
fn error_messages_identify_parameters() {
    let err = Qualpal::new().input_hex(&["#12345"]).unwrap_err();
    assert!(err.to_string().contains("#12345"));

    let err = Qualpal::new()
        .input_colorspace([0.0, 400.0], [0.0, 1.0], [0.0, 1.0], ColorSpace::Hsl)
        .unwrap_err();
    assert!(err.to_string().contains("hue"));

    let err = Qualpal::new().memory_limit(-2.0).unwrap_err();
    assert!(err.to_string().contains("memory limit"));
    assert!(err.to_string().contains("-2"));
}
