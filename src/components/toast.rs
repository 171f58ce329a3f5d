//! Toast Host

use leptos::prelude::*;

use crate::context::use_app_context;

/// Stack of transient messages; each removes itself after its timeout
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-host">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <div class="toast">{toast.message}</div> }
            />
        </div>
    }
}
