use serde::{Deserialize, Serialize};

/// Catalog item as served by the products endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    /// Open set of category strings, no enum on purpose
    pub category: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// Distinct categories in first-seen order, used for the category dropdown.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories.iter().any(|c| c == &product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_without_rating_parses() {
        let raw = r#"{ "id": 7, "title": "Widget", "category": "tools", "price": 9.99 }"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id, 7);
        assert!(product.rating.is_none());
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let products = vec![
            Product {
                id: 1,
                title: "a".into(),
                category: "b-cat".into(),
                price: 1.0,
                rating: None,
            },
            Product {
                id: 2,
                title: "b".into(),
                category: "a-cat".into(),
                price: 2.0,
                rating: None,
            },
            Product {
                id: 3,
                title: "c".into(),
                category: "b-cat".into(),
                price: 3.0,
                rating: None,
            },
        ];
        assert_eq!(distinct_categories(&products), vec!["b-cat", "a-cat"]);
    }
}
