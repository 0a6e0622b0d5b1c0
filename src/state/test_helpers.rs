//! Scripted `MarketplaceApi` double shared by state tests.

use std::cell::{Cell, RefCell};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::net::api::MarketplaceApi;
use crate::net::types::{Item, ItemsResponse, NewItem};
use crate::state::items::{ItemListState, ItemStore};
use crate::state::listing::{Draft, DraftStore};

pub struct MockApi {
    fetch_results: Mutex<Vec<Result<ItemsResponse, ApiError>>>,
    post_results: Mutex<Vec<Result<(), ApiError>>>,
    pub fetch_calls: Mutex<usize>,
    pub posted: Mutex<Vec<NewItem<String>>>,
    in_flight: Mutex<usize>,
    pub max_in_flight: Mutex<usize>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            fetch_results: Mutex::new(Vec::new()),
            post_results: Mutex::new(Vec::new()),
            fetch_calls: Mutex::new(0),
            posted: Mutex::new(Vec::new()),
            in_flight: Mutex::new(0),
            max_in_flight: Mutex::new(0),
        }
    }

    pub fn with_fetch(self, result: Result<ItemsResponse, ApiError>) -> Self {
        self.fetch_results.lock().unwrap().push(result);
        self
    }

    pub fn with_post(self, result: Result<(), ApiError>) -> Self {
        self.post_results.lock().unwrap().push(result);
        self
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetch_calls.lock().unwrap()
    }

    pub fn posted(&self) -> Vec<NewItem<String>> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl MarketplaceApi for MockApi {
    type File = String;

    async fn fetch_items(&self) -> Result<ItemsResponse, ApiError> {
        *self.fetch_calls.lock().unwrap() += 1;
        let mut results = self.fetch_results.lock().unwrap();
        if results.is_empty() {
            Ok(ItemsResponse::default())
        } else {
            results.remove(0)
        }
    }

    async fn post_item(&self, item: &NewItem<String>) -> Result<(), ApiError> {
        self.posted.lock().unwrap().push(item.clone());
        {
            let mut in_flight = self.in_flight.lock().unwrap();
            *in_flight += 1;
            let mut max = self.max_in_flight.lock().unwrap();
            *max = (*max).max(*in_flight);
        }
        tokio::task::yield_now().await;
        *self.in_flight.lock().unwrap() -= 1;
        let mut results = self.post_results.lock().unwrap();
        if results.is_empty() { Ok(()) } else { results.remove(0) }
    }
}

pub fn item(id: i64, name: &str, category: &str) -> Item {
    Item {
        id,
        name: name.to_owned(),
        category: category.to_owned(),
        image_name: format!("{name}.jpg"),
    }
}

pub fn items_response(items: Vec<Item>) -> ItemsResponse {
    ItemsResponse { items: Some(items) }
}

impl ItemStore for RefCell<ItemListState> {
    fn apply_fetch(&self, result: Result<ItemsResponse, ApiError>) -> bool {
        self.borrow_mut().apply_fetch(result)
    }
}

impl<F> DraftStore for RefCell<Draft<F>> {
    fn reset_draft(&self) {
        self.borrow_mut().reset();
    }
}

/// Counts how often a completion hook ran.
#[derive(Default)]
pub struct HookCounter(Cell<usize>);

impl HookCounter {
    pub fn hook(&self) -> impl FnOnce() + '_ {
        move || self.0.set(self.0.get() + 1)
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}

/// Records alert messages in the order they were shown.
#[derive(Default)]
pub struct AlertLog(RefCell<Vec<String>>);

impl AlertLog {
    pub fn alert(&self) -> impl FnOnce(&str) + '_ {
        move |message| self.0.borrow_mut().push(message.to_owned())
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}
