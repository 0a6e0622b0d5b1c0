//! Client configuration injected through Leptos context.
//!
//! DESIGN
//! ======
//! Backend and image hosts are plain values provided by `App` rather than
//! constants baked into components, so a host page or a test can point the
//! client somewhere else. Nothing is read from files or the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::listing::ValidationMode;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:9000";
/// Singular `image`: the backend route is `GET /image/{name}`. A `/images/`
/// prefix is not routed and every card would show a broken image.
pub const DEFAULT_IMAGE_BASE_URL: &str = "http://localhost:9000/image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash.
    pub api_base_url: String,
    /// Prefix that item `image_name`s are appended to.
    pub image_base_url: String,
    /// How the listing form decides which fields are missing.
    pub validation: ValidationMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_owned(),
            validation: ValidationMode::default(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn with_image_base_url(mut self, url: &str) -> Self {
        self.image_base_url = url.trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Collection endpoint used for both listing and creating items.
    pub fn items_endpoint(&self) -> String {
        format!("{}/items", self.api_base_url.trim_end_matches('/'))
    }

    /// Resolve an item's `image_name` against the image host.
    pub fn image_url(&self, image_name: &str) -> String {
        format!(
            "{}/{}",
            self.image_base_url.trim_end_matches('/'),
            image_name.trim_start_matches('/')
        )
    }
}
