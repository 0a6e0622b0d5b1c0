//! Root application component and page composition.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{item_list::ItemList, listing::Listing};
use crate::config::ClientConfig;

/// Root application component.
///
/// Provides the client configuration and wires the listing form to the item
/// grid: a finished submit raises `reload`, a finished load lowers it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClientConfig::default());

    // Start raised so the grid loads on mount.
    let reload = RwSignal::new(true);

    view! {
        <Title text="Simple Mercari"/>

        <div class="app">
            <header class="app__header title">
                <p>
                    <b>"Simple Mercari"</b>
                </p>
            </header>
            <div>
                <Listing on_listing_completed=Callback::new(move |()| reload.set(true))/>
            </div>
            <div>
                <ItemList reload=reload on_load_completed=Callback::new(move |()| reload.set(false))/>
            </div>
        </div>
    }
}
