use contracts::dashboards::d101_product_catalog::Product;
use gloo_net::http::Request;

const API_URL: &str = "https://fakestoreapi.com/products";

/// Load the full product catalog from the third-party endpoint. The
/// response shape is not under our control.
pub async fn get_products() -> Result<Vec<Product>, String> {
    let response = Request::get(API_URL)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<Product> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
