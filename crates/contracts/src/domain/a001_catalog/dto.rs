use serde::{Deserialize, Serialize};

/// Product record returned by the catalog API.
///
/// Only the fields rendered by the grid are required; everything else the API
/// sends is optional and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Response of `GET /products` and `GET /products/category/{slug}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// `limit` / `skip` pair sent with every product request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub limit: usize,
    pub skip: usize,
}

impl PageQuery {
    pub fn to_query_string(&self) -> String {
        // Два целых поля сериализуются всегда
        serde_qs::to_string(self)
            .unwrap_or_else(|_| format!("limit={}&skip={}", self.limit, self.skip))
    }
}

/// Product category as shown in the sidebar.
///
/// `slug` is the raw token the API knows the category by and is what goes into
/// request paths; `label` is only for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub label: String,
}

impl Category {
    pub fn from_slug(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        let label = capitalize_first(&slug);
        Self { slug, label }
    }
}

/// Uppercase the first character, leave the rest untouched.
///
/// `"mens-shirts"` becomes `"Mens-shirts"`, not `"Mens-Shirts"`.
pub fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Path + query for a product page.
///
/// `None` (or an empty slug) addresses the unfiltered listing.
pub fn products_path(category: Option<&str>, query: PageQuery) -> String {
    match category.filter(|slug| !slug.is_empty()) {
        Some(slug) => format!(
            "/products/category/{}?{}",
            urlencoding::encode(slug),
            query.to_query_string()
        ),
        None => format!("/products?{}", query.to_query_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first_only() {
        assert_eq!(capitalize_first("mens-shirts"), "Mens-shirts");
        assert_eq!(capitalize_first("smartphones"), "Smartphones");
        assert_eq!(capitalize_first("Already"), "Already");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_category_keeps_raw_slug() {
        let category = Category::from_slug("home-decoration");
        assert_eq!(category.slug, "home-decoration");
        assert_eq!(category.label, "Home-decoration");
    }

    #[test]
    fn test_products_path_unfiltered() {
        let path = products_path(None, PageQuery { limit: 9, skip: 18 });
        assert_eq!(path, "/products?limit=9&skip=18");

        let path = products_path(Some(""), PageQuery { limit: 9, skip: 0 });
        assert_eq!(path, "/products?limit=9&skip=0");
    }

    #[test]
    fn test_products_path_category_scoped() {
        let path = products_path(Some("smartphones"), PageQuery { limit: 9, skip: 0 });
        assert_eq!(path, "/products/category/smartphones?limit=9&skip=0");

        let path = products_path(Some("a b"), PageQuery { limit: 9, skip: 9 });
        assert_eq!(path, "/products/category/a%20b?limit=9&skip=9");
    }

    #[test]
    fn test_decode_product_page() {
        let json = r#"{
            "products": [
                {"id": 1, "title": "Essence Mascara", "description": "Lash princess",
                 "thumbnail": "https://cdn/1.png", "price": 9.99, "category": "beauty",
                 "stock": 5, "tags": ["beauty"]},
                {"title": "Bare", "price": 1}
            ],
            "total": 194, "skip": 0, "limit": 9
        }"#;
        let page: ProductListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.total, 194);
        assert_eq!(page.products[0].category.as_deref(), Some("beauty"));
        assert_eq!(page.products[1].description, "");
        assert_eq!(page.products[1].price, 1.0);
    }

    #[test]
    fn test_decode_without_products_fails() {
        let result: Result<ProductListResponse, _> = serde_json::from_str(r#"{"total": 0}"#);
        assert!(result.is_err());
    }
}
