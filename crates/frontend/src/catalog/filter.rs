//! Catalog filter pipeline: active category + free-text search applied to a
//! fetched product list.

use contracts::catalog::Product;

use super::registry::ALL_CATEGORY;

/// Case-sensitive exact match against the backend's category string.
/// Products whose category matches no registry label drop out whenever a
/// specific category is selected.
fn matches_category(product: &Product, selected_category: &str) -> bool {
    selected_category == ALL_CATEGORY || product.category.as_deref() == Some(selected_category)
}

/// Case-insensitive substring match over name and description; an absent
/// description simply contributes no match.
fn matches_search(product: &Product, search_term: &str) -> bool {
    let term = search_term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product
            .description
            .as_ref()
            .map_or(false, |d| d.to_lowercase().contains(&needle))
}

/// Apply both predicates, preserving the relative order of the input;
/// display order is controlled solely by the source list.
pub fn filter_products(
    products: &[Product],
    selected_category: &str,
    search_term: &str,
) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches_category(p, selected_category) && matches_search(p, search_term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, description: Option<&str>, category: Option<&str>) -> Product {
        let mut p: Product = serde_json::from_str(&format!(r#"{{"id": {}}}"#, id)).unwrap();
        p.name = name.to_string();
        p.description = description.map(str::to_string);
        p.category = category.map(str::to_string);
        p
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "IIW Type 1 Block", Some("Beam exit and angle checks"), Some("IIW Blocks")),
            product(2, "ut block", None, Some("Step Wedges")),
            product(3, "DSC Block", Some("Distance and sensitivity"), Some("Uncategorized")),
        ]
    }

    #[test]
    fn test_all_with_empty_term_is_identity() {
        let products = sample();
        assert_eq!(filter_products(&products, "All", ""), products);
    }

    #[test]
    fn test_category_then_all_restores_everything() {
        let products = sample();
        let narrowed = filter_products(&products, "IIW Blocks", "");
        assert_eq!(narrowed.len(), 1);
        let restored = filter_products(&products, "All", "");
        assert_eq!(restored, products);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = sample();
        let hits = filter_products(&products, "All", "UT");
        assert!(hits.iter().any(|p| p.name == "ut block"));
    }

    #[test]
    fn test_search_matches_description() {
        let products = sample();
        let hits = filter_products(&products, "All", "sensitivity");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "DSC Block");
    }

    #[test]
    fn test_missing_description_does_not_exclude_on_empty_term() {
        let products = sample();
        let hits = filter_products(&products, "Step Wedges", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "ut block");
    }

    #[test]
    fn test_unmatched_category_is_excluded_under_selection() {
        let products = sample();
        // "Uncategorized" matches no registry label; the product drops out
        // as soon as any specific category is selected
        let hits = filter_products(&products, "IIW Blocks", "");
        assert!(hits.iter().all(|p| p.category.as_deref() == Some("IIW Blocks")));
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let products = sample();
        assert!(filter_products(&products, "iiw blocks", "").is_empty());
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let products = vec![
            product(1, "Block C", None, Some("IIW Blocks")),
            product(2, "Block A", None, Some("IIW Blocks")),
            product(3, "Block B", None, Some("IIW Blocks")),
        ];
        let names: Vec<_> = filter_products(&products, "IIW Blocks", "block")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Block C", "Block A", "Block B"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(filter_products(&[], "All", "anything").is_empty());
    }
}
