pub mod d100_franchise_overview;
pub mod d101_product_catalog;
