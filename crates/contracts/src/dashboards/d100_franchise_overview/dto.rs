use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Full dataset for the franchise overview dashboard.
///
/// Loaded once per session from `assets/data/dashboard.json` and treated as
/// immutable afterwards; derived views are recomputed from it on every
/// filter action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FranchiseDataset {
    pub dashboard_summary: DashboardSummary,
    pub franchises: Vec<Franchise>,
    pub monthly_data: Vec<MonthlyRecord>,
}

/// Header figures shown in the summary cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_business: f64,
    pub total_commission: f64,
    /// Default reporting period in format "DD/MM/YYYY - DD/MM/YYYY"
    pub date_range: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Franchise {
    pub franchise_name: String,
}

/// One calendar month of per-franchise metrics.
///
/// The JSON shape keys each franchise by its normalized key next to the
/// `month` field, so everything except `month` is flattened into a map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Period in format "YYYY-MM"
    pub month: String,
    #[serde(flatten)]
    pub franchises: HashMap<String, FranchiseMetrics>,
}

/// Metrics of one (franchise, month) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FranchiseMetrics {
    pub booking: f64,
    pub commission: f64,
    pub tests: u64,
    pub samples: u64,
}

impl FranchiseDataset {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("failed to parse franchise dataset")
    }

    /// Canonical set of months the dataset actually has records for.
    pub fn available_months(&self) -> HashSet<String> {
        self.monthly_data
            .iter()
            .map(|record| record.month.clone())
            .collect()
    }

    pub fn franchise_names(&self) -> Vec<String> {
        self.franchises
            .iter()
            .map(|f| f.franchise_name.clone())
            .collect()
    }
}

/// Parse a combined range string "DD/MM/YYYY - DD/MM/YYYY".
pub fn parse_date_range(raw: &str) -> anyhow::Result<(NaiveDate, NaiveDate)> {
    let (start_raw, end_raw) = raw
        .split_once('-')
        .context("date range must be \"DD/MM/YYYY - DD/MM/YYYY\"")?;
    Ok((parse_day(start_raw)?, parse_day(end_raw)?))
}

/// Parse a single "DD/MM/YYYY" day.
pub fn parse_day(raw: &str) -> anyhow::Result<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%d/%m/%Y").with_context(|| format!("invalid date: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_range() {
        let (start, end) = parse_date_range("01/01/2024 - 29/02/2024").unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_date_range_invalid() {
        assert!(parse_date_range("not a range").is_err());
        assert!(parse_date_range("2024-01-01 - 2024-02-29").is_err());
    }

    #[test]
    fn test_monthly_record_flattens_franchise_keys() {
        let raw = r#"{
            "month": "2024-01",
            "alpha_labs": { "booking": 100.5, "commission": 10.0, "tests": 4, "samples": 7 }
        }"#;
        let record: MonthlyRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.month, "2024-01");
        let metrics = record.franchises.get("alpha_labs").unwrap();
        assert_eq!(metrics.booking, 100.5);
        assert_eq!(metrics.tests, 4);
    }
}
