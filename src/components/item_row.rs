//! Item Row Component
//!
//! One list entry: thumbnail, in-place editable text, image replacement, move
//! buttons and delete. Rows are HTML5 drag sources and drop targets; a drop
//! resolves both ids to indexes and funnels into the store's reorder, the same
//! entry point the ↑ ↓ buttons use for single steps.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::EditableText;
use crate::context::AppContext;
use crate::ingest;
use crate::list::EditOutcome;

#[component]
pub fn ItemRow(id: u64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Row state is looked up by id so store changes keep the row fresh
    let text = Signal::derive(move || {
        ctx.store
            .with(|s| s.get(id).map(|item| item.text.clone()).unwrap_or_default())
    });
    let img = Signal::derive(move || ctx.store.with(|s| s.get(id).and_then(|item| item.img.clone())));

    let on_save = move |new_text: String| {
        let result = ctx.store.write().edit(id, &new_text);
        match result {
            Ok(EditOutcome::Updated) => ctx.feedback.success("Item updated."),
            Ok(EditOutcome::Unchanged) => {}
            Err(err) => ctx.feedback.error(err.to_string()),
        }
    };

    let on_delete = move |_| {
        let removed = ctx.store.write().delete(id);
        if removed {
            ctx.feedback.success("Item deleted.");
        }
    };

    let nudge = move |delta: isize| {
        let Some(index) = ctx.store.with_untracked(|s| s.index_of(id)) else {
            return;
        };
        // An out-of-bounds shift is silently absorbed
        ctx.store.write().move_item(index, delta);
    };

    let on_dragstart = move |ev: web_sys::DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
        }
        ctx.begin_drag(id);
    };
    let on_dragover = move |ev: web_sys::DragEvent| ev.prevent_default();
    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let Some(source) = ctx.drag_source.get_untracked() else {
            return;
        };
        ctx.end_drag();
        if source == id {
            return;
        }
        let (from, to) = ctx.store.with_untracked(|s| (s.index_of(source), s.index_of(id)));
        let (Some(from), Some(to)) = (from, to) else {
            return;
        };
        let reordered = ctx.store.write().reorder(from, to);
        if reordered {
            ctx.feedback.success("Order updated.");
        }
    };

    let on_replace = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap().clone();
        // No file means the picker was cancelled
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match ingest::validate_and_encode(&file).await {
                Ok(data) => {
                    // replace_image refuses ids deleted while the file was read
                    let replaced = ctx.store.write().replace_image(id, data);
                    if replaced {
                        ctx.feedback.success("Image updated.");
                    }
                }
                Err(err) => ctx.feedback.error(err.to_string()),
            }
            input.set_value("");
        });
    };

    view! {
        <li
            class="item-row"
            draggable="true"
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:drop=on_drop
        >
            <div class="item-main">
                {move || match img.get() {
                    Some(src) => view! { <img class="thumb" src=src alt="thumb"/> }.into_any(),
                    None => view! { <div class="thumb placeholder"></div> }.into_any(),
                }}
                <EditableText text=text on_save=on_save/>
            </div>

            <div class="item-actions">
                <label class="file-btn small">
                    <input
                        type="file"
                        accept="image/png"
                        class="hidden-input"
                        on:change=on_replace
                    />
                    <span>"Change PNG"</span>
                </label>
                <button on:click=move |_| nudge(-1)>"↑"</button>
                <button on:click=move |_| nudge(1)>"↓"</button>
                <button class="delete-btn" on:click=on_delete>"Delete"</button>
            </div>
        </li>
    }
}
