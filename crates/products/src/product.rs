use serde::{Deserialize, Serialize};

use pricepreview_core::ProductId;

/// Catalog product (immutable reference data).
///
/// Never created or mutated by this system; sourced from the seed catalog or
/// a JSON file at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub sku: String,
    pub brand: String,
    pub category: String,
    pub segment: String,
    /// Price in currency units (e.g. `19.99`), never negative.
    pub price: f64,
}

impl Product {
    /// Case-insensitive substring match over title and SKU.
    ///
    /// `needle` must already be lowercase; an empty needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle) || self.sku.to_lowercase().contains(needle)
    }
}

/// Trim and lowercase search box input for client-side filtering. Absent
/// input normalizes to `""`.
pub fn normalize_search(raw: Option<&str>) -> String {
    raw.map(|s| s.trim().to_lowercase()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, sku: &str) -> Product {
        Product {
            id: ProductId::new(1),
            title: title.to_string(),
            sku: sku.to_string(),
            brand: "Brand".to_string(),
            category: "Wine".to_string(),
            segment: "Red".to_string(),
            price: 10.0,
        }
    }

    #[test]
    fn sku_prefix_matches_case_insensitively() {
        let p = product("Shiraz", "SKU-123");
        assert!(p.matches_search(&normalize_search(Some("sku-1"))));
    }

    #[test]
    fn title_substring_matches() {
        let p = product("Barossa Valley Shiraz", "BVS-750");
        assert!(p.matches_search(&normalize_search(Some("VALLEY"))));
        assert!(!p.matches_search(&normalize_search(Some("merlot"))));
    }

    #[test]
    fn empty_and_blank_search_match_everything() {
        let p = product("Shiraz", "SKU-123");
        assert!(p.matches_search(&normalize_search(None)));
        assert!(p.matches_search(&normalize_search(Some(""))));
        assert!(p.matches_search(&normalize_search(Some("   "))));
    }

    #[test]
    fn serializes_with_flat_field_names() {
        let json = serde_json::to_value(product("Shiraz", "SKU-123")).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["sku"], "SKU-123");
        assert_eq!(json["price"], 10.0);
    }
}
