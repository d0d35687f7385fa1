pub mod d100_franchise_overview;
pub mod d101_product_catalog;

pub use d100_franchise_overview::ui::FranchiseOverviewDashboard;
pub use d101_product_catalog::ui::ProductCatalogDashboard;
