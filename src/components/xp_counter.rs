//! Header with greeting, XP counter and rank title

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::render::{greeting, rank_title};
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn XpCounter() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let shown = ctx.xp.shown;

    let username = move || store.user().get().map(|user| user.username).unwrap_or_default();

    view! {
        <header class="dashboard-header">
            <h1 class="greeting">{move || greeting(&username())}</h1>
            <div class="xp-box">
                <span class="xp-value" id="xpValue">{move || shown.get()}</span>
                <span class="xp-label">" XP"</span>
                <span class="rank-title">{move || rank_title(shown.get())}</span>
            </div>
        </header>
    }
}
