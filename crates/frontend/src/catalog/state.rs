//! Pure state transitions shared by the catalog and admin controllers.

use contracts::catalog::{Product, ProductsResponse, ReorderItem};

/// Fetch lifecycle of a product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Fold a fetch result into the next load state and product list.
///
/// Network errors and `success: false` envelopes both degrade to `Failed`
/// with an empty list: the page renders an empty-results view, never an
/// error screen.
pub fn ingest_products(result: Result<ProductsResponse, String>) -> (LoadState, Vec<Product>) {
    match result {
        Ok(resp) if resp.success => (LoadState::Loaded, resp.products),
        Ok(_) | Err(_) => (LoadState::Failed, Vec::new()),
    }
}

/// Move one element from `source` to `dest`, preserving the relative order
/// of everything else. Out-of-range `source` is a no-op; `dest` is clamped.
pub fn move_item<T>(items: &mut Vec<T>, source: usize, dest: usize) {
    if source >= items.len() {
        return;
    }
    let item = items.remove(source);
    let dest = dest.min(items.len());
    items.insert(dest, item);
}

/// Persistence payload for the current display order: dense zero-based
/// `sort_order` values over the full list.
pub fn reorder_payload(products: &[Product]) -> Vec<ReorderItem> {
    products
        .iter()
        .enumerate()
        .map(|(position, p)| ReorderItem {
            id: p.id.clone(),
            sort_order: position as i32,
        })
        .collect()
}

/// Outcome of a completed drag gesture: the new display order plus its
/// persistence payload. `None` when the gesture had no valid destination
/// (a cancelled drag changes nothing).
pub fn apply_drop(
    items: Vec<Product>,
    source: usize,
    dest: Option<usize>,
) -> Option<(Vec<Product>, Vec<ReorderItem>)> {
    let dest = dest?;
    let mut items = items;
    move_item(&mut items, source, dest);
    let payload = reorder_payload(&items);
    Some((items, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::ProductId;

    fn product(id: &str, sort_order: i32) -> Product {
        let mut p: Product = serde_json::from_str(&format!(r#"{{"id": "{}"}}"#, id)).unwrap();
        p.name = id.to_string();
        p.sort_order = sort_order;
        p
    }

    #[test]
    fn test_ingest_success_stores_products_verbatim() {
        let resp = ProductsResponse {
            success: true,
            products: vec![product("A", 2), product("B", 0)],
        };
        let (state, products) = ingest_products(Ok(resp));
        assert_eq!(state, LoadState::Loaded);
        // no client-side resorting
        assert_eq!(products[0].name, "A");
        assert_eq!(products[1].name, "B");
    }

    #[test]
    fn test_ingest_success_false_fails_with_empty_list() {
        let resp = ProductsResponse {
            success: false,
            products: vec![product("A", 0)],
        };
        let (state, products) = ingest_products(Ok(resp));
        assert_eq!(state, LoadState::Failed);
        assert!(products.is_empty());
    }

    #[test]
    fn test_ingest_network_error_matches_success_false() {
        let (state, products) = ingest_products(Err("connection refused".to_string()));
        assert_eq!(state, LoadState::Failed);
        assert!(products.is_empty());
    }

    #[test]
    fn test_drop_first_to_end() {
        // [A, B, C], dropping A at index 2 yields [B, C, A]
        let mut items = vec![product("A", 0), product("B", 1), product("C", 2)];
        move_item(&mut items, 0, 2);
        let names: Vec<_> = items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);

        let payload = reorder_payload(&items);
        assert_eq!(
            payload,
            vec![
                ReorderItem {
                    id: ProductId::Text("B".to_string()),
                    sort_order: 0
                },
                ReorderItem {
                    id: ProductId::Text("C".to_string()),
                    sort_order: 1
                },
                ReorderItem {
                    id: ProductId::Text("A".to_string()),
                    sort_order: 2
                },
            ]
        );
    }

    #[test]
    fn test_out_of_range_source_is_noop() {
        let mut items = vec![product("A", 0), product("B", 1)];
        move_item(&mut items, 5, 0);
        let names: Vec<_> = items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_dest_is_clamped() {
        let mut items = vec![product("A", 0), product("B", 1), product("C", 2)];
        move_item(&mut items, 0, 99);
        let names: Vec<_> = items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_drop_without_destination_is_noop() {
        let items = vec![product("A", 0), product("B", 1)];
        assert!(apply_drop(items, 0, None).is_none());
    }

    #[test]
    fn test_apply_drop_returns_order_and_payload_together() {
        let items = vec![product("A", 0), product("B", 1), product("C", 2)];
        let (reordered, payload) = apply_drop(items, 0, Some(2)).unwrap();
        let names: Vec<_> = reordered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert_eq!(payload.len(), 3);
        assert_eq!(payload[2].id, ProductId::Text("A".to_string()));
        assert_eq!(payload[2].sort_order, 2);
    }

    #[test]
    fn test_payload_is_dense_even_for_sparse_input_orders() {
        // backend sort_order values may be sparse; the payload is always 0..n-1
        let items = vec![product("A", 10), product("B", 40), product("C", 41)];
        let payload = reorder_payload(&items);
        let orders: Vec<_> = payload.iter().map(|i| i.sort_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }
}
