//! Category tables for the catalog sections.
//!
//! Each section carries an immutable label/path table. Labels drive the
//! filter buttons in declaration order; paths drive client-side routing.
//! Everything is static configuration, fixed at compile time.

/// Reserved label meaning "no category restriction"; maps to the section
/// root path.
pub const ALL_CATEGORY: &str = "All";

pub struct CategoryRegistry {
    root_path: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl CategoryRegistry {
    /// `entries` must contain every label the section uses, including
    /// `("All", root_path)` as its first entry.
    pub const fn new(
        root_path: &'static str,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { root_path, entries }
    }

    /// Category labels in rendering order; stable across calls.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }

    /// Route path for a label. Unrecognized labels fail open to the section
    /// root.
    pub fn path_for(&self, label: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, path)| *path)
            .unwrap_or(self.root_path)
    }

    pub fn root_path(&self) -> &'static str {
        self.root_path
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|(l, _)| *l == label)
    }

    /// Echo a known label, or fall back to `All` for anything else, so the
    /// active category is always one of the registry's labels.
    pub fn canonical_label(&self, label: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(l, _)| *l)
            .unwrap_or(ALL_CATEGORY)
    }

    /// Label whose path matches; unrecognized paths fail open to `All`.
    ///
    /// A linear scan over the same entries; no reverse map is kept.
    pub fn label_for_path(&self, path: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(_, p)| *p == path)
            .map(|(label, _)| *label)
            .unwrap_or(ALL_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: CategoryRegistry = CategoryRegistry::new(
        "/reference-standards",
        &[
            ("All", "/reference-standards"),
            ("IIW Blocks", "/reference-standards/iiw-blocks"),
            ("Step Wedges", "/reference-standards/step-wedges"),
        ],
    );

    #[test]
    fn test_labels_keep_declaration_order() {
        let labels: Vec<_> = REGISTRY.labels().collect();
        assert_eq!(labels, vec!["All", "IIW Blocks", "Step Wedges"]);
        // stable across calls
        assert_eq!(labels, REGISTRY.labels().collect::<Vec<_>>());
    }

    #[test]
    fn test_path_for_all_is_section_root() {
        assert_eq!(REGISTRY.path_for(ALL_CATEGORY), "/reference-standards");
    }

    #[test]
    fn test_path_for_unknown_label_fails_open() {
        assert_eq!(REGISTRY.path_for("Widgets"), "/reference-standards");
    }

    #[test]
    fn test_known_label_routes_to_its_path() {
        assert_eq!(
            REGISTRY.path_for("IIW Blocks"),
            "/reference-standards/iiw-blocks"
        );
    }

    #[test]
    fn test_label_for_path_round_trips_and_fails_open() {
        assert_eq!(
            REGISTRY.label_for_path("/reference-standards/step-wedges"),
            "Step Wedges"
        );
        assert_eq!(REGISTRY.label_for_path("/reference-standards"), "All");
        assert_eq!(REGISTRY.label_for_path("/nowhere"), "All");
    }

    #[test]
    fn test_canonical_label_fails_open_to_all() {
        assert_eq!(REGISTRY.canonical_label("Step Wedges"), "Step Wedges");
        assert_eq!(REGISTRY.canonical_label("widgets"), "All");
    }
}
