//! Search text and categorical filters over the loaded catalog.

use std::collections::BTreeSet;

use pricepreview_products::{Product, normalize_search};

/// A single categorical filter: everything, or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldFilter {
    #[default]
    All,
    Only(String),
}

impl FieldFilter {
    /// Parse a dropdown value; `"all"` (or empty) means no filter.
    pub fn from_choice(value: &str) -> Self {
        match value {
            "" | "all" => FieldFilter::All,
            other => FieldFilter::Only(other.to_string()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Only(wanted) => wanted == value,
        }
    }
}

/// Visibility filters. Changing them never touches the selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search: String,
    pub category: FieldFilter,
    pub segment: FieldFilter,
    pub brand: FieldFilter,
}

impl FilterState {
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_with(product, &normalize_search(Some(&self.search)))
    }

    /// Products passing every filter, in catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let needle = normalize_search(Some(&self.search));
        products
            .iter()
            .filter(|p| self.matches_with(p, &needle))
            .collect()
    }

    fn matches_with(&self, product: &Product, needle: &str) -> bool {
        product.matches_search(needle)
            && self.category.matches(&product.category)
            && self.segment.matches(&product.segment)
            && self.brand.matches(&product.brand)
    }
}

/// Distinct, sorted, non-empty values for the filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub segments: Vec<String>,
    pub brands: Vec<String>,
}

impl FilterOptions {
    pub fn from_products(products: &[Product]) -> Self {
        let mut categories = BTreeSet::new();
        let mut segments = BTreeSet::new();
        let mut brands = BTreeSet::new();

        for p in products {
            if !p.category.is_empty() {
                categories.insert(p.category.clone());
            }
            if !p.segment.is_empty() {
                segments.insert(p.segment.clone());
            }
            if !p.brand.is_empty() {
                brands.insert(p.brand.clone());
            }
        }

        Self {
            categories: categories.into_iter().collect(),
            segments: segments.into_iter().collect(),
            brands: brands.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricepreview_core::ProductId;

    fn product(id: u64, title: &str, brand: &str, category: &str, segment: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            sku: format!("SKU-{id}"),
            brand: brand.to_string(),
            category: category.to_string(),
            segment: segment.to_string(),
            price: 10.0,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Shiraz", "Koyama", "Wine", "Red"),
            product(2, "Pale Ale", "Alpine", "Beer", "Ale"),
            product(3, "Riesling", "Koyama", "Wine", "White"),
            product(4, "Mystery", "", "", ""),
        ]
    }

    fn ids(products: Vec<&Product>) -> Vec<u64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn default_filters_show_everything() {
        assert_eq!(ids(FilterState::default().apply(&catalog())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn categorical_filters_combine_with_search() {
        let products = catalog();
        let mut f = FilterState {
            brand: FieldFilter::from_choice("Koyama"),
            ..FilterState::default()
        };
        assert_eq!(ids(f.apply(&products)), vec![1, 3]);

        f.segment = FieldFilter::Only("White".to_string());
        assert_eq!(ids(f.apply(&products)), vec![3]);

        f.segment = FieldFilter::All;
        f.search = "  SHIRAZ ".to_string();
        assert_eq!(ids(f.apply(&products)), vec![1]);
        assert!(f.matches(&products[0]));
        assert!(!f.matches(&products[2]));
    }

    #[test]
    fn all_choice_clears_filter() {
        assert_eq!(FieldFilter::from_choice("all"), FieldFilter::All);
        assert_eq!(FieldFilter::from_choice(""), FieldFilter::All);
    }

    #[test]
    fn options_are_sorted_distinct_and_skip_blanks() {
        let options = FilterOptions::from_products(&catalog());
        assert_eq!(options.categories, vec!["Beer", "Wine"]);
        assert_eq!(options.segments, vec!["Ale", "Red", "White"]);
        assert_eq!(options.brands, vec!["Alpine", "Koyama"]);
    }
}
