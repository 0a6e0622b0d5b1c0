//! REST API client for the marketplace backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, with the listing upload
//! sent as a browser `FormData` body.
//! Native builds: stubs returning `ApiError::Unavailable` since these calls
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure surfaces as an `ApiError`; callers decide whether it becomes
//! a log line or an alert.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{ItemsResponse, NewItem};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::util::browser::FileHandle;

/// Backend operations used by the item list and the listing form.
///
/// `?Send` because browser file handles and futures are tied to the JS
/// event loop.
#[async_trait(?Send)]
pub trait MarketplaceApi {
    /// File handle type carried by [`NewItem::image`].
    type File: Clone + 'static;

    /// Fetch the full item collection.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an
    /// undecodable body.
    async fn fetch_items(&self) -> Result<ItemsResponse, ApiError>;

    /// Create an item from a submitted draft.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection.
    async fn post_item(&self, item: &NewItem<Self::File>) -> Result<(), ApiError>;
}

/// `gloo-net` implementation talking to `{api_base_url}/items`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    items_url: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { items_url: config.items_endpoint() }
    }

    pub fn items_url(&self) -> &str {
        &self.items_url
    }
}

#[async_trait(?Send)]
impl MarketplaceApi for HttpApi {
    type File = FileHandle;

    async fn fetch_items(&self) -> Result<ItemsResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.items_url)
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { status: resp.status() });
            }
            resp.json::<ItemsResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn post_item(&self, item: &NewItem<FileHandle>) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = listing_form_data(item)?;
            let resp = gloo_net::http::Request::post(&self.items_url)
                .body(body)
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { status: resp.status() });
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = item;
            Err(ApiError::Unavailable)
        }
    }
}

/// Multipart part names expected by the backend, in send order.
pub const LISTING_PARTS: [&str; 3] = ["name", "category", "image"];

#[cfg(feature = "csr")]
fn listing_form_data(item: &NewItem<FileHandle>) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Request(format!("{e:?}"));
    let [name_part, category_part, image_part] = LISTING_PARTS;

    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_str(name_part, &item.name).map_err(js_err)?;
    form.append_with_str(category_part, &item.category).map_err(js_err)?;
    match &item.image {
        Some(file) => form
            .append_with_blob_and_filename(image_part, file, &file.name())
            .map_err(js_err)?,
        None => form.append_with_str(image_part, "").map_err(js_err)?,
    }
    Ok(form)
}
