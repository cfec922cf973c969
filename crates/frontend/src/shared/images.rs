//! Image reference resolution.
//!
//! The API is inconsistent about where a product's image lives: `image_url`,
//! `mainImage`, or the first element of `images` (a string, or an object
//! carrying `url`/`path`). This module folds every shape into one
//! displayable URL.

use contracts::catalog::{ImageRef, Product};

/// Shown when a product has no usable image reference.
pub const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder-product.png";

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// First usable candidate in priority order: `image_url`, `mainImage`,
/// first element of `images`.
fn first_candidate(product: &Product) -> Option<&str> {
    if let Some(s) = product.image_url.as_deref().and_then(non_empty) {
        return Some(s);
    }
    if let Some(s) = product.main_image.as_deref().and_then(non_empty) {
        return Some(s);
    }
    match product.images.first() {
        Some(ImageRef::Plain(s)) => non_empty(s),
        Some(ImageRef::Object { url, path }) => url
            .as_deref()
            .and_then(non_empty)
            .or_else(|| path.as_deref().and_then(non_empty)),
        Some(ImageRef::Other(_)) | None => None,
    }
}

/// Resolve a product's image reference to a displayable URL.
///
/// Absolute (`http…`) and object-URL (`blob:`) references pass through
/// unchanged; everything else is treated as a server-relative path and
/// prefixed with the backend base URL exactly once. Any missing or
/// malformed reference yields the placeholder.
pub fn resolve_image_url(product: &Product, base_url: &str) -> String {
    let Some(candidate) = first_candidate(product) else {
        return PLACEHOLDER_IMAGE.to_string();
    };
    if candidate.starts_with("http") || candidate.starts_with("blob:") {
        return candidate.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        candidate.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::ProductId;

    fn product() -> Product {
        serde_json::from_str(r#"{"id": 1}"#).unwrap()
    }

    #[test]
    fn test_no_image_yields_placeholder() {
        let p = product();
        assert_eq!(resolve_image_url(&p, "http://api"), PLACEHOLDER_IMAGE);
        assert_eq!(p.id, ProductId::Number(1));
    }

    #[test]
    fn test_image_url_wins_over_main_image() {
        let mut p = product();
        p.image_url = Some("/img/a.png".to_string());
        p.main_image = Some("/img/b.png".to_string());
        assert_eq!(resolve_image_url(&p, "http://api"), "http://api/img/a.png");
    }

    #[test]
    fn test_empty_image_url_falls_through() {
        let mut p = product();
        p.image_url = Some("   ".to_string());
        p.main_image = Some("img/b.png".to_string());
        // exactly one slash between base and path
        assert_eq!(resolve_image_url(&p, "http://api/"), "http://api/img/b.png");
    }

    #[test]
    fn test_object_ref_path_is_prefixed() {
        let mut p = product();
        p.images = vec![ImageRef::Object {
            url: None,
            path: Some("/img/a.png".to_string()),
        }];
        assert_eq!(resolve_image_url(&p, "http://api"), "http://api/img/a.png");
    }

    #[test]
    fn test_object_ref_url_wins_over_path() {
        let mut p = product();
        p.images = vec![ImageRef::Object {
            url: Some("http://cdn/a.png".to_string()),
            path: Some("/img/a.png".to_string()),
        }];
        assert_eq!(resolve_image_url(&p, "http://api"), "http://cdn/a.png");
    }

    #[test]
    fn test_absolute_and_blob_pass_through() {
        let mut p = product();
        p.image_url = Some("https://cdn/a.png".to_string());
        assert_eq!(resolve_image_url(&p, "http://api"), "https://cdn/a.png");

        p.image_url = Some("blob:abc123".to_string());
        assert_eq!(resolve_image_url(&p, "http://api"), "blob:abc123");
    }

    #[test]
    fn test_malformed_first_element_yields_placeholder() {
        let mut p = product();
        p.images = vec![ImageRef::Other(serde_json::Value::Null)];
        assert_eq!(resolve_image_url(&p, "http://api"), PLACEHOLDER_IMAGE);

        p.images = vec![ImageRef::Object {
            url: None,
            path: None,
        }];
        assert_eq!(resolve_image_url(&p, "http://api"), PLACEHOLDER_IMAGE);
    }
}
