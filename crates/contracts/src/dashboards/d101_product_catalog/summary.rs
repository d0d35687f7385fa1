//! Summary figures and per-category averages over a filtered catalog.

use super::dto::Product;
use crate::shared::chart::{ChartSeries, ChartView};
use std::collections::HashSet;

/// Figures for the catalog stat cards.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub item_count: usize,
    /// Mean price of the filtered items, 2 decimals, 0 when empty.
    pub mean_price: f64,
    /// Mean rating across filtered items that have one, 0 when none do.
    pub mean_rating: f64,
    /// Distinct categories across the whole catalog, not the filtered
    /// subset. Matches the observed dashboard behavior.
    pub category_count: usize,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summarize a filtered subset against the full catalog it came from.
pub fn summarize_catalog(filtered: &[Product], catalog: &[Product]) -> CatalogSummary {
    let item_count = filtered.len();

    let mean_price = if filtered.is_empty() {
        0.0
    } else {
        let total: f64 = filtered.iter().map(|p| p.price).sum();
        round2(total / item_count as f64)
    };

    let rates: Vec<f64> = filtered
        .iter()
        .filter_map(|p| p.rating.as_ref().map(|r| r.rate))
        .collect();
    let mean_rating = if rates.is_empty() {
        0.0
    } else {
        rates.iter().sum::<f64>() / rates.len() as f64
    };

    let category_count = catalog
        .iter()
        .map(|p| p.category.as_str())
        .collect::<HashSet<_>>()
        .len();

    CatalogSummary {
        item_count,
        mean_price,
        mean_rating,
        category_count,
    }
}

/// Mean price per category present in the filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAverage {
    pub category: String,
    pub mean_price: f64,
}

/// One entry per distinct category, first-seen order, mean price rounded
/// to 2 decimals (0 for an empty bucket, which cannot occur here by
/// construction).
pub fn category_averages(filtered: &[Product]) -> Vec<CategoryAverage> {
    let mut buckets: Vec<(String, f64, usize)> = Vec::new();
    for product in filtered {
        match buckets.iter_mut().find(|(cat, ..)| cat == &product.category) {
            Some(bucket) => {
                bucket.1 += product.price;
                bucket.2 += 1;
            }
            None => buckets.push((product.category.clone(), product.price, 1)),
        }
    }
    buckets
        .into_iter()
        .map(|(category, total, count)| CategoryAverage {
            category,
            mean_price: if count == 0 {
                0.0
            } else {
                round2(total / count as f64)
            },
        })
        .collect()
}

/// Chart-ready bar series of the per-category averages.
pub fn category_averages_chart(averages: &[CategoryAverage]) -> ChartView {
    ChartView {
        labels: averages.iter().map(|a| a.category.clone()).collect(),
        datasets: vec![ChartSeries {
            label: "Average Price".to_string(),
            data: averages.iter().map(|a| a.mean_price).collect(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d101_product_catalog::dto::Rating;
    use crate::dashboards::d101_product_catalog::filter::{
        filter_catalog, CatalogFilter, CategorySelector,
    };

    fn product(id: u32, category: &str, price: f64, rate: Option<f64>) -> Product {
        Product {
            id,
            title: format!("product {id}"),
            category: category.to_string(),
            price,
            rating: rate.map(|rate| Rating { rate, count: 5 }),
        }
    }

    #[test]
    fn test_summary_of_empty_set_is_zeroed() {
        let catalog = vec![product(1, "a", 10.0, Some(3.0))];
        let summary = summarize_catalog(&[], &catalog);
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.mean_price, 0.0);
        assert_eq!(summary.mean_rating, 0.0);
        // category count still reflects the full catalog
        assert_eq!(summary.category_count, 1);
    }

    #[test]
    fn test_summary_category_count_ignores_filter() {
        let catalog = vec![
            product(1, "a", 10.0, None),
            product(2, "a", 20.0, None),
            product(3, "b", 5.0, None),
        ];
        let filter = CatalogFilter {
            category: CategorySelector::parse("a"),
            ..Default::default()
        };
        let filtered = filter_catalog(&catalog, &filter);
        let summary = summarize_catalog(&filtered, &catalog);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.mean_price, 15.00);
        assert_eq!(summary.category_count, 2);
    }

    #[test]
    fn test_mean_price_rounded_and_bounded() {
        let catalog = vec![
            product(1, "a", 10.0, None),
            product(2, "a", 10.01, None),
            product(3, "a", 10.01, None),
        ];
        let summary = summarize_catalog(&catalog, &catalog);
        assert_eq!(summary.mean_price, 10.01);
        assert!(summary.mean_price >= 10.0 && summary.mean_price <= 10.01);
    }

    #[test]
    fn test_mean_rating_only_counts_rated_items() {
        let catalog = vec![
            product(1, "a", 10.0, Some(4.0)),
            product(2, "a", 20.0, None),
            product(3, "a", 30.0, Some(2.0)),
        ];
        let summary = summarize_catalog(&catalog, &catalog);
        assert_eq!(summary.mean_rating, 3.0);
    }

    #[test]
    fn test_category_averages_first_seen_order() {
        let filtered = vec![
            product(1, "b", 6.0, None),
            product(2, "a", 10.0, None),
            product(3, "b", 4.0, None),
            product(4, "a", 20.0, None),
        ];
        let averages = category_averages(&filtered);
        assert_eq!(
            averages,
            vec![
                CategoryAverage {
                    category: "b".to_string(),
                    mean_price: 5.0
                },
                CategoryAverage {
                    category: "a".to_string(),
                    mean_price: 15.0
                },
            ]
        );
    }

    #[test]
    fn test_category_averages_chart_is_aligned() {
        let filtered = vec![product(1, "a", 10.0, None), product(2, "b", 5.0, None)];
        let chart = category_averages_chart(&category_averages(&filtered));
        assert!(chart.is_aligned());
        assert_eq!(chart.labels, vec!["a", "b"]);
        assert_eq!(chart.datasets[0].data, vec![10.0, 5.0]);
    }
}
