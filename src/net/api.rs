//! REST API helpers for the lost/found report endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning empty lists/errors since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! List fetch failures are logged and yield empty lists so the browse
//! view degrades to its empty state. Submission failures surface the
//! server `detail` string when the body carries one, else the transport
//! or status error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{FoundItem, LostItem};

/// Fallback backend root when `RETRACE_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8001";

/// Backend base URL, baked into the bundle from the `RETRACE_API_URL`
/// environment variable at compile time.
pub fn base_url() -> String {
    normalize_base(option_env!("RETRACE_API_URL").unwrap_or(DEFAULT_API_URL))
}

/// Trim trailing slashes so endpoint paths can always start with `/`.
pub fn normalize_base(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}

/// Resolve an item's image reference for display. Server-relative media
/// paths are joined to the base URL; absolute URLs pass through.
pub fn resolve_image(base: &str, image: &str) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        image.to_owned()
    } else {
        format!("{base}{image}")
    }
}

/// Fetch all lost-item reports from `GET /api/ai/lost/`.
/// Failures are logged and produce an empty list.
pub async fn fetch_lost_items() -> Vec<LostItem> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list::<LostItem>("/api/ai/lost/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch all found-item reports from `GET /api/ai/found/`.
/// Failures are logged and produce an empty list.
pub async fn fetch_found_items() -> Vec<FoundItem> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list::<FoundItem>("/api/ai/found/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch both lists concurrently. The browse view stays in its loading
/// state until both have settled.
pub async fn fetch_all_items() -> (Vec<LostItem>, Vec<FoundItem>) {
    #[cfg(feature = "hydrate")]
    {
        futures::join!(fetch_lost_items(), fetch_found_items())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (Vec::new(), Vec::new())
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_list<T: serde::de::DeserializeOwned>(path: &str) -> Vec<T> {
    let url = format!("{}{path}", base_url());
    match gloo_net::http::Request::get(&url).send().await {
        Ok(resp) if resp.ok() => match resp.json::<Vec<T>>().await {
            Ok(items) => items,
            Err(e) => {
                log::error!("error decoding {path}: {e}");
                Vec::new()
            }
        },
        Ok(resp) => {
            log::error!("error fetching {path}: status {}", resp.status());
            Vec::new()
        }
        Err(e) => {
            log::error!("error fetching {path}: {e}");
            Vec::new()
        }
    }
}

/// POST a multipart form to a report endpoint.
///
/// # Errors
///
/// Returns the server `detail` message for rejected submissions, or the
/// transport/status error as a string.
#[cfg(feature = "hydrate")]
pub async fn post_multipart(path: &str, form: web_sys::FormData) -> Result<(), String> {
    let url = format!("{}{path}", base_url());
    let resp = gloo_net::http::Request::post(&url)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if resp.ok() {
        return Ok(());
    }

    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: String,
    }
    match resp.json::<ErrorBody>().await {
        Ok(body) => Err(body.detail),
        Err(_) => Err(format!("request failed: {}", resp.status())),
    }
}
