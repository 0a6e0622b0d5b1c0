//! Form for listing a new item (name, category, image).
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation runs synchronously before any request. A blocked submit keeps
//! the draft; every posted submit, whatever its outcome, alerts the user,
//! calls `on_listing_completed`, and resets the form. Nothing prevents a
//! second submit while the first upload is in flight.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::state::listing::{Draft, DraftField, finish_listing};
use crate::util::browser::{self, FileHandle};

#[component]
pub fn Listing(on_listing_completed: Callback<()>) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let api = HttpApi::new(&config);
    let validation = config.validation;
    let draft = RwSignal::new_local(Draft::<FileHandle>::default());
    let image_input = NodeRef::<leptos::html::Input>::new();

    let on_value_change = move |field: DraftField, ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        draft.update(|d| d.set_text(field.as_str(), value));
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let files = browser::selected_files(&input);
            draft.update(|d| d.set_image(files));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let item = match draft.with_untracked(|d| d.prepare_submit(validation)) {
            Ok(item) => item,
            Err(missing) => {
                browser::alert(&missing.to_string());
                return;
            }
        };

        let api = api.clone();
        leptos::task::spawn_local(async move {
            finish_listing(&api, &item, &draft, browser::alert, || on_listing_completed.run(())).await;
            #[cfg(feature = "csr")]
            {
                if let Some(input) = image_input.get_untracked() {
                    browser::clear_file_input(&input);
                }
            }
        });
    };

    view! {
        <div class="listing pt-2 pb-3">
            <form on:submit=on_submit>
                <div>
                    <div class="mb-1">
                        <label class="form-label" for="name">"Name"</label>
                        <input
                            type="text"
                            name="name"
                            id="name"
                            class="form-control"
                            required=true
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| on_value_change(DraftField::Name, ev)
                        />
                    </div>

                    <div class="mb-1">
                        <label class="form-label" for="category">"Category"</label>
                        <input
                            type="text"
                            name="category"
                            id="category"
                            class="form-control"
                            prop:value=move || draft.with(|d| d.category.clone())
                            on:input=move |ev| on_value_change(DraftField::Category, ev)
                        />
                    </div>

                    <div class="mb-3">
                        <label class="form-label" for="image">"Image"</label>
                        <input
                            type="file"
                            name="image"
                            id="image"
                            class="form-control"
                            required=true
                            node_ref=image_input
                            on:change=on_file_change
                        />
                    </div>

                    <button type="submit">"List this item"</button>
                </div>
            </form>
        </div>
    }
}
