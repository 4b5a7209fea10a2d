//! HTTP helpers for talking to the catalog API
//!
//! All requests are plain `GET`s returning JSON.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] gloo_net::Error),

    #[error("HTTP error: {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// GET `url` and decode the JSON body.
///
/// # Errors
/// - [`ApiError::Request`] when the request could not be sent or the body read
/// - [`ApiError::Status`] for any non-2xx status
/// - [`ApiError::Decode`] when the body does not match `T`
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);

    let response = Request::get(url).send().await?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let text = response.text().await?;
    let data = serde_json::from_str(&text)?;
    Ok(data)
}
