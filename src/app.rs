//! Daily Goals Dashboard App
//!
//! Provides the store and context, refetches the dashboard on every reload
//! trigger, and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, ApiClient};
use crate::components::{
    FriendAddForm, FriendsPanel, Heatmap, Leaderboard, LogPanel, NotificationBell, PrivacyToggle,
    SummaryCard, TaskList, TaskModals, ToastHost, XpCounter,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{
    store_replace, DashboardState, DashboardStateStoreFields, DashboardStore, ReloadSequencer,
};

#[component]
pub fn App(config: AppConfig, csrf_token: Option<String>) -> impl IntoView {
    let store = DashboardStore::new(DashboardState::default());
    provide_context(store);

    let client = ApiClient::new(config.api_base.clone(), csrf_token);
    let ctx = AppContext::new(signal(0u32), client, config);
    provide_context(ctx);

    let sequencer = StoredValue::new(ReloadSequencer::default());

    // Load the dashboard on mount and after every mutation
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let seq = sequencer.try_update_value(|s| s.begin()).unwrap_or_default();
        log::info!("[APP] Loading dashboard, trigger={} seq={}", trigger, seq);
        let client = ctx.client();
        spawn_local(async move {
            match commands::load_dashboard(&client).await {
                Ok(dashboard) => {
                    let fresh = sequencer.try_update_value(|s| s.accept(seq)).unwrap_or(false);
                    if !fresh {
                        log::debug!("[APP] Dropping stale dashboard seq={}", seq);
                        return;
                    }
                    if let Some(user) = &dashboard.user {
                        ctx.xp.sync(user.xp);
                    }
                    log::info!(
                        "[APP] Loaded {} tasks, {} notifications",
                        dashboard.tasks.len(),
                        dashboard.notifications.len()
                    );
                    store_replace(&store, DashboardState::from(dashboard));
                }
                Err(e) => log::error!("[APP] Dashboard load failed: {}", e),
            }
        });
    });

    // No page scrolling behind an open modal
    Effect::new(move |_| {
        let overflow = if ctx.open_modal.get().is_some() { "hidden" } else { "" };
        if let Some(body) = document().body() {
            let _ = body.style().set_property("overflow", overflow);
        }
    });

    view! {
        <Show
            when=move || store.user().get().is_some()
            fallback=|| view! { <div class="loading">"Loading..."</div> }
        >
            <div class="dashboard">
                <div class="top-bar">
                    <XpCounter />
                    <NotificationBell />
                </div>
                <main class="dashboard-main">
                    <SummaryCard />
                    <TaskList />
                    <Heatmap />
                </main>
                <aside class="dashboard-side">
                    <Leaderboard />
                    <PrivacyToggle />
                    <FriendAddForm />
                    <FriendsPanel />
                </aside>
            </div>
            <TaskModals />
        </Show>
        <ToastHost />
        <LogPanel />
    }
}
