pub mod dto;
pub mod filter;
pub mod summary;

pub use dto::{distinct_categories, Product, Rating};
pub use filter::{filter_catalog, parse_bound, CatalogFilter, CategorySelector};
pub use summary::{
    category_averages, category_averages_chart, summarize_catalog, CatalogSummary, CategoryAverage,
};
