//! Quicklist App
//!
//! Composition root: builds the store, provides context, lays out the page.

use leptos::prelude::*;

use crate::components::{FeedbackBanner, ItemList, NewItemForm};
use crate::context::AppContext;
use crate::feedback::FeedbackChannel;
use crate::list::{ClockIds, ListStore};
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    let store = RwSignal::new(ListStore::load(BrowserStorage, ClockIds));
    let feedback = FeedbackChannel::new();
    let drag_source = signal(None::<u64>);

    leptos::logging::log!("[app] loaded {} stored items", store.with_untracked(|s| s.len()));

    // Provide context to all children
    provide_context(AppContext::new(store, feedback, drag_source));

    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1>"Quicklist"</h1>
                <p class="subtitle">"prototype"</p>
            </header>

            <NewItemForm/>
            <FeedbackBanner/>
            <ItemList/>

            <footer class="app-footer">
                "Tip: drag an item to reorder. The ↑ ↓ buttons work too."
            </footer>
        </div>
    }
}
