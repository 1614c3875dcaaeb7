//! Editable Text Component
//!
//! Two-state in-place editor. Viewing shows the text with an Edit button;
//! editing shows a buffer seeded from the current text with Save and Cancel.
//! Save always exits to viewing; a rejected edit is reported through the
//! feedback banner rather than keeping the editor open.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn EditableText(
    #[prop(into)] text: Signal<String>,
    #[prop(into)] on_save: Callback<String>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (buffer, set_buffer) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    // Reseed the buffer when the text changes externally while not editing
    Effect::new(move |_| {
        let current = text.get();
        if !editing.get_untracked() {
            set_buffer.set(current);
        }
    });

    // Focus the input on entering edit mode
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let start_editing = move |_| {
        set_buffer.set(text.get_untracked());
        set_editing.set(true);
    };

    let save = move |_| {
        let value = buffer.get_untracked();
        if value.trim() != text.get_untracked().trim() {
            on_save.run(value);
        }
        set_editing.set(false);
    };

    let cancel = move |_| {
        set_buffer.set(text.get_untracked());
        set_editing.set(false);
    };

    view! {
        <div class="editable-text">
            <Show when=move || !editing.get()>
                <div class="text-view">
                    <p>{move || text.get()}</p>
                    <button on:click=start_editing>"Edit"</button>
                </div>
            </Show>
            <Show when=move || editing.get()>
                <div class="text-edit">
                    <input
                        type="text"
                        node_ref=input_ref
                        prop:value=move || buffer.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_buffer.set(input.value());
                        }
                    />
                    <button on:click=save>"Save"</button>
                    <button on:click=cancel>"Cancel"</button>
                </div>
            </Show>
        </div>
    }
}
