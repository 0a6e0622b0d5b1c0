//! Item-grid state and its fetch flow.
//!
//! DESIGN
//! ======
//! Requests are not tagged with a generation: if `reload` fires twice, the
//! slower response wins even when it is the older one. A failed fetch keeps
//! the previous items on screen and does not report completion, which is how
//! the owner tells a finished load from a failed one.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use leptos::prelude::*;

use crate::error::ApiError;
use crate::net::api::MarketplaceApi;
use crate::net::types::{Item, ItemsResponse};

/// Items currently displayed by the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemListState {
    pub items: Vec<Item>,
}

impl ItemListState {
    /// Fold a fetch result into the displayed items.
    ///
    /// Returns `true` when the load completed and `on_load_completed` should
    /// run.
    pub fn apply_fetch(&mut self, result: Result<ItemsResponse, ApiError>) -> bool {
        match result {
            Ok(resp) => {
                self.items = resp.into_items();
                log::debug!("GET success: {} items", self.items.len());
                true
            }
            Err(e) => {
                log::error!("GET error: {e}");
                false
            }
        }
    }
}

/// Issue one `fetch_items` call if `reload` is set; otherwise touch nothing.
pub async fn request_items<A: MarketplaceApi>(reload: bool, api: &A) -> Option<Result<ItemsResponse, ApiError>> {
    if !reload {
        return None;
    }
    Some(api.fetch_items().await)
}

/// Where the grid keeps its items.
pub trait ItemStore {
    /// See [`ItemListState::apply_fetch`].
    fn apply_fetch(&self, result: Result<ItemsResponse, ApiError>) -> bool;
}

impl ItemStore for RwSignal<ItemListState> {
    fn apply_fetch(&self, result: Result<ItemsResponse, ApiError>) -> bool {
        self.try_update(|s| s.apply_fetch(result)).unwrap_or(false)
    }
}

/// One reload cycle: fetch if `reload` is set, fold the result into `store`,
/// and run `on_completed` only when the fetch succeeded.
///
/// Returns whether the load completed.
pub async fn load_items<A, S>(reload: bool, api: &A, store: &S, on_completed: impl FnOnce()) -> bool
where
    A: MarketplaceApi,
    S: ItemStore + ?Sized,
{
    let Some(result) = request_items(reload, api).await else {
        return false;
    };
    if !store.apply_fetch(result) {
        return false;
    }
    on_completed();
    true
}
