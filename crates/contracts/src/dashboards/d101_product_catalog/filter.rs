//! Catalog filtering: category selector plus optional numeric bounds.

use super::dto::Product;

/// Category filter choice coming from the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    Category(String),
}

impl CategorySelector {
    /// "all" (any case) is the wildcard, anything else a literal category.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Category(raw.trim().to_string())
        }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted == category,
        }
    }
}

/// Filter specification rebuilt from the controls on every apply.
///
/// Absent bounds impose no constraint; the UI feeds raw input strings
/// through [`parse_bound`], so unparseable text also means "no constraint".
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFilter {
    pub category: CategorySelector,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            category: CategorySelector::All,
            min_price: None,
            max_price: None,
            min_rating: None,
            max_rating: None,
        }
    }
}

/// Parse a numeric bound from a raw control value. Empty or unparseable
/// input is "no constraint", never an error.
pub fn parse_bound(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok()
}

fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.map_or(true, |bound| value >= bound) && max.map_or(true, |bound| value <= bound)
}

/// Keep the records matching the category selector and every present
/// bound. Rating bounds never exclude records without a rating. Relative
/// order is preserved; the result may be empty.
pub fn filter_catalog(products: &[Product], filter: &CatalogFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|product| filter.category.matches(&product.category))
        .filter(|product| within(product.price, filter.min_price, filter.max_price))
        .filter(|product| match &product.rating {
            Some(rating) => within(rating.rate, filter.min_rating, filter.max_rating),
            None => true,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d101_product_catalog::dto::Rating;

    fn product(id: u32, category: &str, price: f64, rate: Option<f64>) -> Product {
        Product {
            id,
            title: format!("product {id}"),
            category: category.to_string(),
            price,
            rating: rate.map(|rate| Rating { rate, count: 10 }),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "a", 10.0, Some(4.5)),
            product(2, "a", 20.0, None),
            product(3, "b", 5.0, Some(2.0)),
        ]
    }

    #[test]
    fn test_category_wildcard_keeps_everything() {
        let filtered = filter_catalog(&catalog(), &CatalogFilter::default());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_category_selector() {
        let filter = CatalogFilter {
            category: CategorySelector::parse("a"),
            ..Default::default()
        };
        let filtered = filter_catalog(&catalog(), &filter);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.category == "a"));
    }

    #[test]
    fn test_price_bounds() {
        let filter = CatalogFilter {
            min_price: Some(6.0),
            max_price: Some(15.0),
            ..Default::default()
        };
        let filtered = filter_catalog(&catalog(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_rating_bound_skips_unrated() {
        let filter = CatalogFilter {
            min_rating: Some(4.0),
            ..Default::default()
        };
        let filtered = filter_catalog(&catalog(), &filter);
        // id 2 has no rating and must survive the rating bound
        let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound("12.5"), Some(12.5));
        assert_eq!(parse_bound("  3 "), Some(3.0));
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("cheap"), None);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = CatalogFilter {
            category: CategorySelector::parse("a"),
            min_price: Some(5.0),
            ..Default::default()
        };
        let once = filter_catalog(&catalog(), &filter);
        let twice = filter_catalog(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_preserved() {
        let filter = CatalogFilter::default();
        let filtered = filter_catalog(&catalog(), &filter);
        let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
