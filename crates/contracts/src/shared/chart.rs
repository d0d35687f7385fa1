use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Chart-ready derived view
// ---------------------------------------------------------------------------

/// One named series of the bar chart, index-aligned with the view labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
}

/// The structure the charting widget consumes: an ordered label axis plus
/// one or more series of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartSeries>,
}

impl ChartView {
    /// Every series must have exactly one value per label.
    pub fn is_aligned(&self) -> bool {
        self.datasets
            .iter()
            .all(|series| series.data.len() == self.labels.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_aligned() {
        let view = ChartView {
            labels: vec!["a".to_string(), "b".to_string()],
            datasets: vec![ChartSeries {
                label: "s".to_string(),
                data: vec![1.0, 2.0],
            }],
        };
        assert!(view.is_aligned());

        let broken = ChartView {
            labels: vec!["a".to_string()],
            datasets: vec![ChartSeries {
                label: "s".to_string(),
                data: vec![1.0, 2.0],
            }],
        };
        assert!(!broken.is_aligned());
    }
}
