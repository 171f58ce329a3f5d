//! Global Leaderboard Privacy Toggle
//!
//! Optimistic: the box flips on click and is put back if the server does
//! not confirm.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::social::resolve_privacy;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn PrivacyToggle() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let checked = RwSignal::new(true);

    // Server value wins on every reload
    Effect::new(move |_| {
        if let Some(user) = store.user().get() {
            checked.set(user.show_global);
        }
    });

    let on_change = move |_: web_sys::Event| {
        let before = checked.get_untracked();
        checked.set(!before);
        let client = ctx.client();
        spawn_local(async move {
            let result = commands::set_global_privacy(&client, !before).await;
            let resolution = resolve_privacy(before, &result);
            checked.set(resolution.checked);
            if let Some(message) = resolution.alert {
                log::warn!("[SOCIAL] Privacy update failed: {}", message);
                let _ = window().alert_with_message(message);
            }
        });
    };

    view! {
        <label class="privacy-toggle">
            <input
                type="checkbox"
                id="globalToggle"
                prop:checked=move || checked.get()
                on:change=on_change
            />
            " Show me on the global leaderboard"
        </label>
    }
}
