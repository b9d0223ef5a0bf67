//! Built-in qualitative palettes.
//!
//! A small read-only library of well-known qualitative color schemes,
//! addressed by `"Package:Name"` references (e.g. `"ColorBrewer:Set2"`).
//! These serve as ready-made candidate pools for
//! [`Qualpal::input_preset`](crate::Qualpal::input_preset).

use std::collections::BTreeMap;

use crate::api::Error;

const BREWER_SET1: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628",
    "#f781bf", "#999999",
];

const BREWER_SET2: &[&str] = &[
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494",
    "#b3b3b3",
];

const BREWER_SET3: &[&str] = &[
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69",
    "#fccde5", "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
];

const BREWER_DARK2: &[&str] = &[
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d",
    "#666666",
];

const BREWER_ACCENT: &[&str] = &[
    "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17",
    "#666666",
];

const BREWER_PAIRED: &[&str] = &[
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f",
    "#ff7f00", "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
];

const BREWER_PASTEL1: &[&str] = &[
    "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd",
    "#fddaec", "#f2f2f2",
];

const BREWER_PASTEL2: &[&str] = &[
    "#b3e2cd", "#fdcdac", "#cbd5e8", "#f4cae4", "#e6f5c9", "#fff2ae", "#f1e2cc",
    "#cccccc",
];

const TABLEAU_10: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1",
    "#ff9da7", "#9c755f", "#bab0ac",
];

const OKABE_ITO: &[&str] = &[
    "#000000", "#e69f00", "#56b4e9", "#009e73", "#f0e442", "#0072b2", "#d55e00",
    "#cc79a7",
];

/// The static palette table: `(package, [(name, colors)])`.
const PALETTES: &[(&str, &[(&str, &[&str])])] = &[
    (
        "ColorBrewer",
        &[
            ("Set1", BREWER_SET1),
            ("Set2", BREWER_SET2),
            ("Set3", BREWER_SET3),
            ("Dark2", BREWER_DARK2),
            ("Accent", BREWER_ACCENT),
            ("Paired", BREWER_PAIRED),
            ("Pastel1", BREWER_PASTEL1),
            ("Pastel2", BREWER_PASTEL2),
        ],
    ),
    ("Tableau", &[("10", TABLEAU_10)]),
    ("OkabeIto", &[("OkabeIto", OKABE_ITO)]),
];

/// Look up a built-in palette by `"Package:Name"` reference.
///
/// # Errors
///
/// - [`Error::MalformedPaletteReference`] when the reference lacks a colon.
/// - [`Error::UnknownPalettePackage`] when the package does not exist.
/// - [`Error::UnknownPaletteName`] when the package exists but the palette
///   does not.
///
/// # Example
///
/// ```
/// use qualpal::palettes;
///
/// let hex = palettes::get_palette("ColorBrewer:Dark2").unwrap();
/// assert_eq!(hex.len(), 8);
/// assert!(palettes::get_palette("ColorBrewer:Set99").is_err());
/// ```
pub fn get_palette(reference: &str) -> Result<&'static [&'static str], Error> {
    let (package, name) = reference.split_once(':').ok_or_else(|| {
        Error::MalformedPaletteReference {
            reference: reference.to_string(),
        }
    })?;

    let entries = PALETTES
        .iter()
        .find(|(pkg, _)| *pkg == package)
        .map(|(_, entries)| *entries)
        .ok_or_else(|| Error::UnknownPalettePackage {
            package: package.to_string(),
        })?;

    entries
        .iter()
        .find(|(pal, _)| *pal == name)
        .map(|(_, colors)| *colors)
        .ok_or_else(|| Error::UnknownPaletteName {
            package: package.to_string(),
            name: name.to_string(),
        })
}

/// Enumerate the built-in palettes as `{package -> [names]}`.
pub fn list_palettes() -> BTreeMap<&'static str, Vec<&'static str>> {
    PALETTES
        .iter()
        .map(|(pkg, entries)| (*pkg, entries.iter().map(|(name, _)| *name).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    #[test]
    fn test_lookup_known_palette() {
        let set1 = get_palette("ColorBrewer:Set1").unwrap();
        assert_eq!(set1.len(), 9);
        assert_eq!(set1[0], "#e41a1c");
    }

    #[test]
    fn test_lookup_errors() {
        assert!(matches!(
            get_palette("ColorBrewerSet1"),
            Err(Error::MalformedPaletteReference { .. })
        ));
        assert!(matches!(
            get_palette("NoSuchPackage:Set1"),
            Err(Error::UnknownPalettePackage { .. })
        ));
        assert!(matches!(
            get_palette("ColorBrewer:NoSuchPalette"),
            Err(Error::UnknownPaletteName { .. })
        ));
    }

    #[test]
    fn test_every_entry_parses_as_hex() {
        for (package, names) in list_palettes() {
            for name in names {
                let reference = format!("{package}:{name}");
                for hex in get_palette(&reference).unwrap() {
                    assert!(
                        hex.parse::<Rgb>().is_ok(),
                        "{reference} contains invalid hex {hex}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_listing_matches_table() {
        let listing = list_palettes();
        assert_eq!(listing.len(), 3);
        assert_eq!(listing["ColorBrewer"].len(), 8);
        assert_eq!(listing["Tableau"], vec!["10"]);
    }
}
