//! Notifications Component
//!
//! Bell with a count badge and a modal listing pending friend requests.
//! Accepting patches the store in place; declining refetches everything.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::Modal;
use crate::context::{use_app_context, AppContext};
use crate::lifecycle::ModalId;
use crate::social::{badge_visible, FRIEND_ADDED_TOAST};
use crate::store::{
    store_remove_notification, use_dashboard_store, DashboardStateStoreFields, DashboardStore,
};

fn accept(ctx: AppContext, store: DashboardStore, id: u32) {
    let client = ctx.client();
    spawn_local(async move {
        match commands::accept_friend(&client, id).await {
            Ok(reply) if reply.success => {
                store_remove_notification(&store, id);
                log::info!("[SOCIAL] Accepted request {}", id);
                ctx.toast(FRIEND_ADDED_TOAST);
            }
            Ok(reply) => log::warn!("[SOCIAL] Accept {} rejected ({})", id, reply.status),
            Err(e) => log::error!("[SOCIAL] Accept {} failed: {}", id, e),
        }
    });
}

fn decline(ctx: AppContext, id: u32) {
    let client = ctx.client();
    spawn_local(async move {
        if let Err(e) = commands::decline_friend(&client, id).await {
            log::error!("[SOCIAL] Decline {} failed: {}", id, e);
        }
        ctx.close_all();
        ctx.reload();
    });
}

#[component]
pub fn NotificationBell() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    view! {
        <button class="notif-bell" on:click=move |_| ctx.open_modal(ModalId::Notifications)>
            "🔔"
            <Show when=move || badge_visible(&store.notifications().get())>
                <span class="badge" id="notifBadge">
                    {move || store.notifications().get().len()}
                </span>
            </Show>
        </button>

        <Modal id=ModalId::Notifications title="Friend requests">
            <For
                each=move || store.notifications().get()
                key=|notification| notification.id
                children=move |notification| {
                    let id = notification.id;
                    view! {
                        <div class="notif-row">
                            <span class="notif-message">{notification.message}</span>
                            <button class="btn small" on:click=move |_| accept(ctx, store, id)>
                                "Accept"
                            </button>
                            <button class="btn small secondary" on:click=move |_| decline(ctx, id)>
                                "Decline"
                            </button>
                        </div>
                    }
                }
            />
            <Show when=move || !badge_visible(&store.notifications().get())>
                <p class="empty">"No pending requests."</p>
            </Show>
        </Modal>
    }
}
