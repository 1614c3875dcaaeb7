//! New Item Form Component
//!
//! Draft state for the next entry: candidate text plus an optional PNG with a
//! preview shown inside the picker button. Submitting validates the text,
//! encodes the file if one was picked, and hands both to the list store.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::ingest;
use crate::list;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (draft_text, set_draft_text) = signal(String::new());
    let (preview, set_preview) = signal(None::<String>);
    // Bumped on every reset so an encode that resolves afterwards is discarded
    let (epoch, set_epoch) = signal(0u32);
    let file_input = NodeRef::<html::Input>::new();

    let reset_form = move || {
        set_draft_text.set(String::new());
        if let Some(url) = preview.get_untracked() {
            ingest::release_preview(&url);
        }
        set_preview.set(None);
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
        set_epoch.update(|e| *e += 1);
    };

    let on_pick = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            if let Some(old) = preview.get_untracked() {
                ingest::release_preview(&old);
            }
            set_preview.set(ingest::preview_url(&file));
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft_text.get_untracked();
        // Reject a short draft before touching the file
        if let Err(err) = list::validate_text(&text) {
            ctx.feedback.error(err.to_string());
            return;
        }
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let submitted_epoch = epoch.get_untracked();

        spawn_local(async move {
            let img = match file {
                Some(file) => match ingest::validate_and_encode(&file).await {
                    Ok(data) => Some(data),
                    Err(err) => {
                        ctx.feedback.error(err.to_string());
                        return;
                    }
                },
                None => None,
            };
            if epoch.get_untracked() != submitted_epoch {
                // Form was reset while the file was being read
                return;
            }
            let added = ctx.store.write().add(&text, img);
            match added {
                Ok(()) => {
                    reset_form();
                    ctx.feedback.success("Item added successfully!");
                }
                Err(err) => ctx.feedback.error(err.to_string()),
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=on_submit>
            <div class="field text-field">
                <label>"New item"</label>
                <input
                    type="text"
                    placeholder="Type at least 5 characters..."
                    prop:value=move || draft_text.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_draft_text.set(input.value());
                    }
                />
                <p class="hint">"Validation: minimum 5 characters"</p>
            </div>

            <div class="field file-field">
                <label>"PNG (optional)"</label>
                <label class="file-btn">
                    {move || match preview.get() {
                        Some(url) => view! { <img class="file-preview" src=url alt="preview"/> }.into_any(),
                        None => view! { <span>"Choose PNG"</span> }.into_any(),
                    }}
                    <input
                        type="file"
                        accept="image/png"
                        class="hidden-input"
                        node_ref=file_input
                        on:change=on_pick
                    />
                </label>

                <div class="form-actions">
                    <button type="submit">"Add"</button>
                    <button type="button" on:click=move |_| reset_form()>"Clear"</button>
                </div>
            </div>
        </form>
    }
}
