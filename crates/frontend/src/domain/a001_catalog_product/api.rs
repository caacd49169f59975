use contracts::domain::a001_catalog_product::{products_from_payload, Product};
use gloo_net::http::Request;

/// Загрузить товары каталога.
///
/// Любая форма ответа, кроме `{ "data": [...] }`, даёт пустой список.
pub async fn fetch_products(url: &str) -> Result<Vec<Product>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(products_from_payload(&payload))
}

/// Как [`fetch_products`], но ошибка означает "нет данных"
pub async fn load_products(url: &str) -> Vec<Product> {
    log::debug!("loading catalog from {}", url);
    match fetch_products(url).await {
        Ok(products) => {
            log::debug!("catalog returned {} products", products.len());
            products
        }
        Err(e) => {
            log::warn!("catalog unavailable: {}", e);
            Vec::new()
        }
    }
}
