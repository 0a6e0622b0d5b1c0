//! Wire DTOs for the marketplace backend.
//!
//! DESIGN
//! ======
//! `Item` accepts both `image_name` and the backend's stored `image` key so
//! list responses decode regardless of which name the server emits. A `null`
//! item collection is tolerated and treated as empty.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// A persisted marketplace listing as returned by `GET /items`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Item {
    /// Backend-assigned identifier; `0` when the backend omits it.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub category: String,
    /// File name under the image host, e.g. `"<sha256>.jpg"`.
    #[serde(alias = "image")]
    pub image_name: String,
}

/// Body of `GET /items`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Option<Vec<Item>>,
}

impl ItemsResponse {
    /// Items in the order the backend returned them; `null` becomes empty.
    pub fn into_items(self) -> Vec<Item> {
        self.items.unwrap_or_default()
    }
}

/// Payload of `POST /items`, sent as multipart form data.
///
/// `F` is the platform file handle. `image` is `None` only when the form's
/// validation let an empty image through; it is then sent as an empty text
/// part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewItem<F> {
    pub name: String,
    pub category: String,
    pub image: Option<F>,
}
