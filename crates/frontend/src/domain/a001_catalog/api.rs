use super::state::FetchPage;
use crate::shared::api_utils::{get_json, ApiError};
use crate::shared::config::AppConfig;
use contracts::domain::a001_catalog::{Category, Product, ProductListResponse};

/// Получить список категорий (сырые токены API → Category)
pub async fn fetch_categories(config: &AppConfig) -> Result<Vec<Category>, ApiError> {
    let url = config.api_url(&config.api.categories_path);
    let raw: Vec<String> = get_json(&url).await?;
    Ok(raw.into_iter().map(Category::from_slug).collect())
}

/// Получить одну страницу товаров
pub async fn fetch_page(config: &AppConfig, request: &FetchPage) -> Result<Vec<Product>, ApiError> {
    let url = config.api_url(&request.path());
    let page: ProductListResponse = get_json(&url).await?;
    log::debug!(
        "page skip={} returned {} of {} products",
        request.query.skip,
        page.products.len(),
        page.total
    );
    Ok(page.products)
}
