//! Feedback Banner Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Transient status banner fed by the feedback channel
#[component]
pub fn FeedbackBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let message = ctx.feedback.message();

    view! {
        {move || {
            message.get().map(|fb| {
                view! {
                    <div class=format!("feedback {}", fb.kind.css_class())>{fb.message}</div>
                }
            })
        }}
    }
}
