//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::feedback::FeedbackChannel;
use crate::list::BrowserList;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The list store; mutate through `store.write()`
    pub store: RwSignal<BrowserList>,
    /// Status banner channel
    pub feedback: FeedbackChannel,
    /// Id of the row a drag started from - read
    pub drag_source: ReadSignal<Option<u64>>,
    /// Id of the row a drag started from - write
    set_drag_source: WriteSignal<Option<u64>>,
}

impl AppContext {
    pub fn new(
        store: RwSignal<BrowserList>,
        feedback: FeedbackChannel,
        drag_source: (ReadSignal<Option<u64>>, WriteSignal<Option<u64>>),
    ) -> Self {
        Self {
            store,
            feedback,
            drag_source: drag_source.0,
            set_drag_source: drag_source.1,
        }
    }

    /// Record the row a drag gesture started from
    pub fn begin_drag(&self, id: u64) {
        self.set_drag_source.set(Some(id));
    }

    /// Clear the drag source once the gesture ends
    pub fn end_drag(&self) {
        self.set_drag_source.set(None);
    }
}
