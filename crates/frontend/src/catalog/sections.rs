//! Static configuration for the three catalog-browsing sections.
//!
//! One `CatalogSection` per browsing page; the shared view model is
//! instantiated against one of these instead of each page carrying its own
//! copy of the category/filter logic.

use contracts::catalog::ProductType;

use super::registry::CategoryRegistry;

pub struct CatalogSection {
    pub key: &'static str,
    pub product_type: ProductType,
    pub registry: CategoryRegistry,
}

pub static REFERENCE_STANDARDS: CatalogSection = CatalogSection {
    key: "reference_standards",
    product_type: ProductType::CalibrationBlock,
    registry: CategoryRegistry::new(
        "/reference-standards",
        &[
            ("All", "/reference-standards"),
            ("IIW Blocks", "/reference-standards/iiw-blocks"),
            ("Distance Calibration", "/reference-standards/distance-calibration"),
            ("Step Wedges", "/reference-standards/step-wedges"),
            ("Resolution Blocks", "/reference-standards/resolution-blocks"),
            ("Angle Beam", "/reference-standards/angle-beam"),
        ],
    ),
};

pub static VALIDATION_BLOCKS: CatalogSection = CatalogSection {
    key: "validation_blocks",
    product_type: ProductType::ValidationBlock,
    registry: CategoryRegistry::new(
        "/validation-blocks",
        &[
            ("All", "/validation-blocks"),
            ("AWS", "/validation-blocks/aws"),
            ("ASME", "/validation-blocks/asme"),
            ("API", "/validation-blocks/api"),
            ("Custom", "/validation-blocks/custom"),
        ],
    ),
};

pub static FLAWED_SPECIMENS: CatalogSection = CatalogSection {
    key: "flawed_specimens",
    product_type: ProductType::FlawedSpecimen,
    registry: CategoryRegistry::new(
        "/flawed-specimens",
        &[
            ("All", "/flawed-specimens"),
            ("Weld Flaws", "/flawed-specimens/weld-flaws"),
            ("Fatigue Cracks", "/flawed-specimens/fatigue-cracks"),
            ("Corrosion", "/flawed-specimens/corrosion"),
            ("Composite Defects", "/flawed-specimens/composite-defects"),
        ],
    ),
};

pub static SECTIONS: [&CatalogSection; 3] = [
    &REFERENCE_STANDARDS,
    &VALIDATION_BLOCKS,
    &FLAWED_SPECIMENS,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry::ALL_CATEGORY;

    #[test]
    fn test_every_section_roots_all() {
        for section in SECTIONS {
            assert_eq!(
                section.registry.path_for(ALL_CATEGORY),
                section.registry.root_path(),
                "section {}",
                section.key
            );
            assert_eq!(
                section.registry.path_for("No Such Category"),
                section.registry.root_path(),
                "section {}",
                section.key
            );
        }
    }

    #[test]
    fn test_sections_cover_every_product_type() {
        for product_type in ProductType::ALL {
            assert!(
                SECTIONS.iter().any(|s| s.product_type == product_type),
                "no section for {}",
                product_type
            );
        }
    }
}
