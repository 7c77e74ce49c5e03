//! Built-in demo catalog used when no catalog file is configured.

use pricepreview_core::ProductId;

use crate::product::Product;

const SEED: &[(u64, &str, &str, &str, &str, &str, f64)] = &[
    (1, "High Garden Pinot Noir 2021", "HGVPIN216", "High Garden", "Wine", "Red", 279.06),
    (2, "Koyama Methode Brut Nature NV", "KOYBRUNV6", "Koyama Wines", "Wine", "Sparkling", 120.0),
    (3, "Koyama Riesling 2018", "KOYNR1837", "Koyama Wines", "Wine", "Port/Dessert", 215.04),
    (4, "Koyama Tussock Riesling 2019", "KOYRIE19", "Koyama Wines", "Wine", "White", 215.04),
    (5, "Lacourte-Godbillon Brut Cru NV", "LACBNATNV6", "Lacourte-Godbillon", "Wine", "Sparkling", 409.32),
    (6, "Lacourte-Godbillon Extra Brut NV", "LACEXTRANV6", "Lacourte-Godbillon", "Wine", "Sparkling", 462.0),
    (7, "Alpine Pale Ale 24x330ml", "ALPPAL330", "Alpine Brewing", "Beer", "Ale", 64.8),
    (8, "Alpine Lager 24x375ml", "ALPLAG375", "Alpine Brewing", "Beer", "Lager", 58.5),
    (9, "Harbour Gin 700ml", "HRBGIN700", "Harbour Distillery", "Spirits", "Gin", 72.0),
    (10, "Harbour Navy Strength Gin 500ml", "HRBNAV500", "Harbour Distillery", "Spirits", "Gin", 89.95),
];

pub(crate) fn products() -> Vec<Product> {
    SEED.iter()
        .map(|&(id, title, sku, brand, category, segment, price)| Product {
            id: ProductId::new(id),
            title: title.to_string(),
            sku: sku.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            segment: segment.to_string(),
            price,
        })
        .collect()
}
