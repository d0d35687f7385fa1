//! Aggregation engine for the franchise overview dashboard.
//!
//! Pure functions over the in-memory [`FranchiseDataset`]: walk the
//! requested calendar range, pick the months the dataset knows about and
//! sum the four metrics per franchise. No DOM, no I/O.

use super::dto::{FranchiseDataset, FranchiseMetrics};
use crate::shared::chart::{ChartSeries, ChartView};
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

/// Franchise filter choice coming from the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FranchiseSelector {
    /// Wildcard: every declared franchise, in declared order.
    All,
    /// One specific franchise, by display name.
    One(String),
}

impl FranchiseSelector {
    /// "All" (any case) is the wildcard, anything else is a display name.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::One(raw.trim().to_string())
        }
    }
}

/// Normalize a display name to the lookup key used in `monthly_data`:
/// lowercase, every whitespace character replaced with an underscore.
///
/// A name that normalizes to a key absent from the records sums to zero,
/// it is not an error.
pub fn franchise_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Lazy walk over calendar months, first day of `start`'s month through
/// `end` inclusive. Clone to restart.
#[derive(Debug, Clone)]
pub struct MonthRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for MonthRange {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let current = self.next.take()?;
        if current > self.end {
            return None;
        }
        let label = format!("{:04}-{:02}", current.year(), current.month());
        let (year, month) = if current.month() == 12 {
            (current.year() + 1, 1)
        } else {
            (current.year(), current.month() + 1)
        };
        self.next = NaiveDate::from_ymd_opt(year, month, 1);
        Some(label)
    }
}

/// All calendar months touched by `[start, end]`, as "YYYY-MM" labels.
///
/// The walk starts at the first day of `start`'s month, so a range whose
/// endpoints fall in one month yields exactly that month even when
/// `start > end` day-wise; a range that ends before `start`'s month is
/// empty.
pub fn month_range(start: NaiveDate, end: NaiveDate) -> MonthRange {
    let first = NaiveDate::from_ymd_opt(start.year(), start.month(), 1)
        .expect("first day of a valid month");
    MonthRange {
        next: Some(first),
        end,
    }
}

/// [`month_range`] restricted to months the dataset actually has.
pub fn months_in_range<'a>(
    start: NaiveDate,
    end: NaiveDate,
    available: &'a HashSet<String>,
) -> impl Iterator<Item = String> + Clone + 'a {
    month_range(start, end).filter(move |month| available.contains(month))
}

/// Derived view handed to the chart and the table: one label per
/// franchise, metric series index-aligned with the labels.
#[derive(Debug, Clone, PartialEq)]
pub struct FranchiseView {
    pub labels: Vec<String>,
    pub booking_amounts: Vec<f64>,
    pub commissions: Vec<f64>,
    pub tests: Vec<u64>,
    pub samples: Vec<u64>,
}

impl FranchiseView {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            booking_amounts: Vec::with_capacity(capacity),
            commissions: Vec::with_capacity(capacity),
            tests: Vec::with_capacity(capacity),
            samples: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, label: String, totals: FranchiseMetrics) {
        self.labels.push(label);
        self.booking_amounts.push(totals.booking);
        self.commissions.push(totals.commission);
        self.tests.push(totals.tests);
        self.samples.push(totals.samples);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Chart-ready structure with the two money series the bar chart shows.
    pub fn to_chart_view(&self) -> ChartView {
        ChartView {
            labels: self.labels.clone(),
            datasets: vec![
                ChartSeries {
                    label: "Booking Amount".to_string(),
                    data: self.booking_amounts.clone(),
                },
                ChartSeries {
                    label: "Commission".to_string(),
                    data: self.commissions.clone(),
                },
            ],
        }
    }
}

/// Aggregate the dataset over `[start, end]` for the selected franchise(s).
///
/// Wildcard keeps the declared franchise order and keeps franchises with
/// no matching records as all-zero rows rather than dropping them; a
/// specific selector yields a single-row view.
pub fn aggregate(
    dataset: &FranchiseDataset,
    start: NaiveDate,
    end: NaiveDate,
    selector: &FranchiseSelector,
) -> FranchiseView {
    let available = dataset.available_months();
    let months: HashSet<String> = months_in_range(start, end, &available).collect();

    match selector {
        FranchiseSelector::All => {
            let mut view = FranchiseView::with_capacity(dataset.franchises.len());
            for franchise in &dataset.franchises {
                let key = franchise_key(&franchise.franchise_name);
                view.push(
                    franchise.franchise_name.clone(),
                    sum_metrics(dataset, &months, &key),
                );
            }
            view
        }
        FranchiseSelector::One(name) => {
            let mut view = FranchiseView::with_capacity(1);
            let key = franchise_key(name);
            view.push(name.clone(), sum_metrics(dataset, &months, &key));
            view
        }
    }
}

fn sum_metrics(
    dataset: &FranchiseDataset,
    months: &HashSet<String>,
    key: &str,
) -> FranchiseMetrics {
    let mut totals = FranchiseMetrics::default();
    for record in &dataset.monthly_data {
        if !months.contains(&record.month) {
            continue;
        }
        if let Some(metrics) = record.franchises.get(key) {
            totals.booking += metrics.booking;
            totals.commission += metrics.commission;
            totals.tests += metrics.tests;
            totals.samples += metrics.samples;
        }
    }
    totals
}
