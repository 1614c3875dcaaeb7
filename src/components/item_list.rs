//! Item List Component

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::AppContext;

/// The ordered list with its count heading and empty-state hint
#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let items = Memo::new(move |_| ctx.store.with(|s| s.items().to_vec()));

    view! {
        <section class="item-list">
            <h2>{move || format!("Items ({})", items.get().len())}</h2>

            <Show when=move || ctx.store.with(|s| s.is_empty())>
                <div class="empty-hint">"No items yet. Add something above."</div>
            </Show>

            <ul>
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| view! { <ItemRow id=item.id/> }
                />
            </ul>
        </section>
    }
}
