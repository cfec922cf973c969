use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Product identifier as returned by the API.
///
/// The backend is not consistent here: older records carry numeric ids,
/// newer ones carry string ids. Both must round-trip verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl ProductId {
    pub fn as_string(&self) -> String {
        match self {
            ProductId::Number(n) => n.to_string(),
            ProductId::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Default for ProductId {
    fn default() -> Self {
        ProductId::Text(String::new())
    }
}

// ============================================================================
// Product Type
// ============================================================================

/// Backend-side product classification, used as a fetch filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    CalibrationBlock,
    ValidationBlock,
    FlawedSpecimen,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [
        ProductType::CalibrationBlock,
        ProductType::ValidationBlock,
        ProductType::FlawedSpecimen,
    ];

    /// Wire token used in query strings and path segments.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::CalibrationBlock => "calibration_block",
            ProductType::ValidationBlock => "validation_block",
            ProductType::FlawedSpecimen => "flawed_specimen",
        }
    }

    pub fn from_str(s: &str) -> Option<ProductType> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductType::CalibrationBlock => "Reference Standards",
            ProductType::ValidationBlock => "Validation Blocks",
            ProductType::FlawedSpecimen => "Flawed Specimens",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Image Reference
// ============================================================================

/// One element of the `images` array.
///
/// The API returns either a bare path string or an object with a `url` or
/// `path` field; anything else is kept as raw JSON so a single malformed
/// element never fails the whole product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Plain(String),
    Object {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
    Other(serde_json::Value),
}

// ============================================================================
// Metadata
// ============================================================================

/// Loosely-shaped product metadata (`material`, `dimensions`, `standards`).
///
/// Each field may be a single string, a list, or an arbitrary object
/// depending on how the record was imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    List(Vec<MetaValue>),
    Other(serde_json::Value),
}

impl MetaValue {
    /// Flatten any metadata shape into display lines.
    pub fn lines(&self) -> Vec<String> {
        match self {
            MetaValue::Text(s) => {
                if s.trim().is_empty() {
                    Vec::new()
                } else {
                    vec![s.clone()]
                }
            }
            MetaValue::List(items) => items.iter().flat_map(|v| v.lines()).collect(),
            MetaValue::Other(serde_json::Value::Object(map)) => map
                .iter()
                .filter_map(|(k, v)| match v {
                    serde_json::Value::String(s) => Some(format!("{}: {}", k, s)),
                    serde_json::Value::Number(n) => Some(format!("{}: {}", k, n)),
                    _ => None,
                })
                .collect(),
            MetaValue::Other(_) => Vec::new(),
        }
    }
}

// ============================================================================
// Product
// ============================================================================

/// Catalog product as served by the API.
///
/// Only the fields the storefront reads are typed; everything required for
/// rendering is defaulted so a partial record deserializes instead of
/// failing the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(rename = "mainImage", default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<MetaValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<MetaValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<MetaValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standards: Option<MetaValue>,

    #[serde(default)]
    pub sort_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_number_and_text() {
        let n: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(n, ProductId::Number(42));
        assert_eq!(n.as_string(), "42");

        let s: ProductId = serde_json::from_str("\"abc-7\"").unwrap();
        assert_eq!(s, ProductId::Text("abc-7".to_string()));

        // round-trips verbatim
        assert_eq!(serde_json::to_string(&n).unwrap(), "42");
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"abc-7\"");
    }

    #[test]
    fn test_minimal_product_deserializes() {
        let p: Product = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(p.name, "");
        assert!(p.description.is_none());
        assert!(p.images.is_empty());
        assert_eq!(p.sort_order, 0);
    }

    #[test]
    fn test_image_ref_shapes() {
        let p: Product = serde_json::from_str(
            r#"{
                "id": "b1",
                "images": ["/img/a.png", {"path": "/img/b.png"}, {"url": "http://cdn/c.png"}, null]
            }"#,
        )
        .unwrap();
        assert_eq!(p.images.len(), 4);
        assert_eq!(p.images[0], ImageRef::Plain("/img/a.png".to_string()));
        assert_eq!(
            p.images[1],
            ImageRef::Object {
                url: None,
                path: Some("/img/b.png".to_string())
            }
        );
        assert!(matches!(p.images[3], ImageRef::Other(_)));
    }

    #[test]
    fn test_meta_value_shapes() {
        let p: Product = serde_json::from_str(
            r#"{
                "id": 2,
                "material": "1018 steel",
                "standards": ["AWS D1.1", "ASTM E164"],
                "dimensions": {"length": "12 in", "width": "4 in", "holes": 3}
            }"#,
        )
        .unwrap();
        assert_eq!(p.material.unwrap().lines(), vec!["1018 steel"]);
        assert_eq!(
            p.standards.unwrap().lines(),
            vec!["AWS D1.1", "ASTM E164"]
        );
        let dims = p.dimensions.unwrap().lines();
        assert!(dims.contains(&"length: 12 in".to_string()));
        assert!(dims.contains(&"holes: 3".to_string()));
    }

    #[test]
    fn test_product_type_tokens() {
        assert_eq!(ProductType::CalibrationBlock.as_str(), "calibration_block");
        assert_eq!(
            ProductType::from_str("flawed_specimen"),
            Some(ProductType::FlawedSpecimen)
        );
        assert_eq!(ProductType::from_str("widget"), None);
    }
}
