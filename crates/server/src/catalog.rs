//! Demo product corpus seeded at startup.
//!
//! Eight jewelry products for exercising the comparison lab without any
//! indexing calls. Document content is the product name; description and
//! category land in metadata, where the indexed fields make them searchable.

use searchlab_core::document::{Document, MetadataValue};
use std::collections::HashMap;

struct Product {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: f64,
    image_url: &'static str,
    category: &'static str,
    badge: Option<&'static str>,
}

const PRODUCTS: [Product; 8] = [
    Product {
        id: "001",
        name: "Diamond Solitaire Ring",
        description: "Classic round brilliant diamond set in 18k white gold. Timeless elegance for engagements.",
        price: 4999.00,
        image_url: "https://images.unsplash.com/photo-1605100804763-247f67b3557e?w=400&h=400&fit=crop",
        category: "Rings",
        badge: None,
    },
    Product {
        id: "002",
        name: "Gold Chain Necklace",
        description: "14k yellow gold Cuban link chain. Bold statement piece for everyday wear.",
        price: 1299.00,
        image_url: "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=400&h=400&fit=crop",
        category: "Necklaces",
        badge: None,
    },
    Product {
        id: "003",
        name: "Pearl Drop Earrings",
        description: "Freshwater pearls with sterling silver hooks. Elegant and sophisticated.",
        price: 299.00,
        image_url: "https://images.unsplash.com/photo-1535632066927-ab7c9ab60908?w=400&h=400&fit=crop",
        category: "Earrings",
        badge: None,
    },
    Product {
        id: "004",
        name: "Silver Tennis Bracelet",
        description: "Sterling silver with cubic zirconia stones. Sparkle for any occasion.",
        price: 449.00,
        image_url: "https://images.unsplash.com/photo-1611591437281-460bfbe1220a?w=400&h=400&fit=crop",
        category: "Bracelets",
        badge: None,
    },
    Product {
        id: "005",
        name: "Vintage Emerald Ring",
        description: "Art deco inspired emerald ring with diamond accents in platinum setting.",
        price: 3799.00,
        image_url: "https://images.unsplash.com/photo-1551406483-3731d1997540?w=400&h=400&fit=crop",
        category: "Rings",
        badge: Some("VINTAGE"),
    },
    Product {
        id: "006",
        name: "Rose Gold Pendant",
        description: "Delicate heart-shaped pendant in 14k rose gold with diamond accent.",
        price: 599.00,
        image_url: "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=400&h=400&fit=crop",
        category: "Necklaces",
        badge: None,
    },
    Product {
        id: "007",
        name: "Sapphire Stud Earrings",
        description: "Blue sapphire studs set in white gold. Deep color, brilliant sparkle.",
        price: 899.00,
        image_url: "https://images.unsplash.com/photo-1588444650733-d0b6271cfc55?w=400&h=400&fit=crop",
        category: "Earrings",
        badge: None,
    },
    Product {
        id: "008",
        name: "Men's Signet Ring",
        description: "Classic gold signet ring with customizable engraving surface.",
        price: 799.00,
        image_url: "https://images.unsplash.com/photo-1573408301185-9146fe634ad0?w=400&h=400&fit=crop",
        category: "Rings",
        badge: None,
    },
];

/// Builds the demo documents in catalog order.
pub fn demo_products() -> Vec<Document> {
    PRODUCTS
        .iter()
        .map(|p| {
            let mut metadata = HashMap::new();
            metadata.insert(
                "name".to_string(),
                MetadataValue::String(p.name.to_string()),
            );
            metadata.insert(
                "description".to_string(),
                MetadataValue::String(p.description.to_string()),
            );
            metadata.insert("price".to_string(), MetadataValue::Float(p.price));
            metadata.insert(
                "image_url".to_string(),
                MetadataValue::String(p.image_url.to_string()),
            );
            metadata.insert(
                "category".to_string(),
                MetadataValue::String(p.category.to_string()),
            );
            if let Some(badge) = p.badge {
                metadata.insert(
                    "badge".to_string(),
                    MetadataValue::String(badge.to_string()),
                );
            }
            Document::with_metadata(p.id, p.name, metadata)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_products_have_unique_ids() {
        let docs = demo_products();
        assert_eq!(docs.len(), 8);
        let mut ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_descriptions_are_searchable() {
        let doc = &demo_products()[0];
        // "engagements" lives in the description metadata field.
        assert!(doc.searchable_text().contains("engagements"));
        assert!(doc.searchable_text().contains("rings"));
    }
}
