use contracts::dashboards::d100_franchise_overview::FranchiseDataset;
use gloo_net::http::Request;

const DATA_URL: &str = "assets/data/dashboard.json";

/// Load the static franchise dataset. Fetched once at startup.
pub async fn get_dashboard_data() -> Result<FranchiseDataset, String> {
    let response = Request::get(DATA_URL)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    FranchiseDataset::from_json(&text).map_err(|e| format!("Failed to parse response: {}", e))
}
