//! Item grid fed by `GET /items`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The owner toggles `reload`; each rising edge issues one fetch. Completion
//! is reported through `on_load_completed` only when the fetch succeeds.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::net::types::Item;
use crate::state::items::{ItemListState, load_items};

#[component]
pub fn ItemList(#[prop(into)] reload: Signal<bool>, on_load_completed: Callback<()>) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let api = HttpApi::new(&config);
    let state = RwSignal::new(ItemListState::default());

    // Only re-run when the flag actually changes value.
    let reload = Memo::new(move |_| reload.get());

    Effect::new(move || {
        let reload = reload.get();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            load_items(reload, &api, &state, || on_load_completed.run(())).await;
        });
    });

    view! {
        <div class="item-list container-fluid p-3">
            <div class="row">
                {move || {
                    state
                        .get()
                        .items
                        .into_iter()
                        .map(|item| {
                            let src = config.image_url(&item.image_name);
                            view! { <ItemCard item=item src=src/> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

#[component]
fn ItemCard(item: Item, src: String) -> impl IntoView {
    let alt = item.name.clone();
    view! {
        <div class="col-12 col-md-6 col-lg-4 mb-3">
            <div class="item-list__card card h-100 p-2" data-item-id=item.id.to_string()>
                <img class="card-img-top" src=src alt=alt/>
                <p class="card-text p-2">
                    <span>"Name: " {item.name}</span>
                    <br/>
                    <span>"Category: " {item.category}</span>
                </p>
            </div>
        </div>
    }
}
