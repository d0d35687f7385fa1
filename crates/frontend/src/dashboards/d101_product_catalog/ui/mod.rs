pub mod dashboard;

pub use dashboard::ProductCatalogDashboard;
