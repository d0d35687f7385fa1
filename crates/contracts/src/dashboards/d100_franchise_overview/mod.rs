pub mod aggregate;
pub mod dto;

pub use aggregate::{
    aggregate, franchise_key, month_range, months_in_range, FranchiseSelector, FranchiseView,
    MonthRange,
};
pub use dto::{
    parse_date_range, parse_day, DashboardSummary, Franchise, FranchiseDataset, FranchiseMetrics,
    MonthlyRecord,
};
