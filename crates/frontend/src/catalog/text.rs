//! Per-category page headings.
//!
//! Each section has a static table of title/description pairs keyed by
//! category label; lookups for labels without an entry fall back to the
//! section's `All` entry.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::registry::ALL_CATEGORY;
use super::sections::CatalogSection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionText {
    pub title: &'static str,
    pub description: &'static str,
}

const FALLBACK_TEXT: SectionText = SectionText {
    title: "Product Catalog",
    description: "Browse our catalog of NDT reference products.",
};

type TextTable = HashMap<&'static str, SectionText>;

static REFERENCE_STANDARD_TEXTS: Lazy<TextTable> = Lazy::new(|| {
    HashMap::from([
        (
            ALL_CATEGORY,
            SectionText {
                title: "Reference Standards",
                description: "Calibration blocks machined and certified to the \
                    major ultrasonic testing standards.",
            },
        ),
        (
            "IIW Blocks",
            SectionText {
                title: "IIW Calibration Blocks",
                description: "Type 1 and Type 2 IIW blocks for beam exit point, \
                    angle verification and distance calibration.",
            },
        ),
        (
            "Distance Calibration",
            SectionText {
                title: "Distance Calibration Blocks",
                description: "DSC and DC blocks for distance and sensitivity \
                    calibration of angle beam transducers.",
            },
        ),
        (
            "Step Wedges",
            SectionText {
                title: "Step Wedges",
                description: "Stepped thickness references for gauge \
                    verification and thickness calibration.",
            },
        ),
        (
            "Resolution Blocks",
            SectionText {
                title: "Resolution Blocks",
                description: "RC-type blocks for evaluating near-surface and \
                    lateral resolution.",
            },
        ),
        (
            "Angle Beam",
            SectionText {
                title: "Angle Beam Blocks",
                description: "SC and miniature blocks for shear wave distance \
                    and sensitivity checks.",
            },
        ),
    ])
});

static VALIDATION_BLOCK_TEXTS: Lazy<TextTable> = Lazy::new(|| {
    HashMap::from([
        (
            ALL_CATEGORY,
            SectionText {
                title: "Validation Blocks",
                description: "Code-specific validation blocks for procedure \
                    demonstration and technique qualification.",
            },
        ),
        (
            "AWS",
            SectionText {
                title: "AWS Validation Blocks",
                description: "Blocks per AWS D1.1 for structural weld \
                    inspection procedures.",
            },
        ),
        (
            "ASME",
            SectionText {
                title: "ASME Validation Blocks",
                description: "Basic calibration blocks per ASME Section V, \
                    Article 4.",
            },
        ),
        (
            "API",
            SectionText {
                title: "API Validation Blocks",
                description: "Blocks supporting API 1104 and related pipeline \
                    weld procedures.",
            },
        ),
        (
            "Custom",
            SectionText {
                title: "Custom Validation Blocks",
                description: "Application-specific geometries machined to \
                    customer drawings.",
            },
        ),
    ])
});

static FLAWED_SPECIMEN_TEXTS: Lazy<TextTable> = Lazy::new(|| {
    HashMap::from([
        (
            ALL_CATEGORY,
            SectionText {
                title: "Flawed Specimens",
                description: "Specimens with intentionally embedded flaws for \
                    training, qualification and probability-of-detection studies.",
            },
        ),
        (
            "Weld Flaws",
            SectionText {
                title: "Weld Flaw Specimens",
                description: "Plates and pipes with lack of fusion, porosity, \
                    slag and crack indications.",
            },
        ),
        (
            "Fatigue Cracks",
            SectionText {
                title: "Fatigue Crack Specimens",
                description: "Grown-to-size fatigue cracks with documented \
                    length and depth.",
            },
        ),
        (
            "Corrosion",
            SectionText {
                title: "Corrosion Specimens",
                description: "Machined and natural wall-loss specimens for \
                    corrosion mapping.",
            },
        ),
        (
            "Composite Defects",
            SectionText {
                title: "Composite Defect Specimens",
                description: "Layups with delaminations, inserts and impact \
                    damage.",
            },
        ),
    ])
});

fn table_for(section: &CatalogSection) -> &'static TextTable {
    match section.key {
        "reference_standards" => &REFERENCE_STANDARD_TEXTS,
        "validation_blocks" => &VALIDATION_BLOCK_TEXTS,
        _ => &FLAWED_SPECIMEN_TEXTS,
    }
}

/// Title/description for the active category, falling back to the `All`
/// entry for labels without their own text.
pub fn text_for(section: &CatalogSection, label: &str) -> SectionText {
    let table = table_for(section);
    table
        .get(label)
        .or_else(|| table.get(ALL_CATEGORY))
        .copied()
        .unwrap_or(FALLBACK_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sections::{REFERENCE_STANDARDS, SECTIONS};

    #[test]
    fn test_known_label_has_own_text() {
        let text = text_for(&REFERENCE_STANDARDS, "Step Wedges");
        assert_eq!(text.title, "Step Wedges");
    }

    #[test]
    fn test_unknown_label_falls_back_to_all_entry() {
        let all = text_for(&REFERENCE_STANDARDS, ALL_CATEGORY);
        assert_eq!(text_for(&REFERENCE_STANDARDS, "Widgets"), all);
    }

    #[test]
    fn test_every_registry_label_resolves() {
        for section in SECTIONS {
            for label in section.registry.labels() {
                let text = text_for(section, label);
                assert!(!text.title.is_empty(), "{}:{}", section.key, label);
                assert!(!text.description.is_empty(), "{}:{}", section.key, label);
            }
        }
    }
}
