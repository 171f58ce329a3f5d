//! Friends Panel
//!
//! Friends list, followers modal and the removal modal both flows share.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, Endpoint};
use crate::components::Modal;
use crate::context::{use_app_context, AppContext};
use crate::lifecycle::ModalId;
use crate::models::Follower;
use crate::render::friend_progress;
use crate::social::removal_prompt;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Confirm button of the shared removal modal
fn confirm_removal(ctx: AppContext) {
    let endpoint = match ctx.pending.with_untracked(|pending| pending.removal.confirm_shared()) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            log::warn!("[SOCIAL] {}", e);
            return;
        }
    };
    let client = ctx.client();
    spawn_local(async move {
        let result = match endpoint {
            Endpoint::DeleteFriend(id) => commands::delete_friend(&client, id).await,
            Endpoint::RemoveFollower(rel_id) => commands::remove_follower(&client, rel_id).await,
            other => {
                log::warn!("[SOCIAL] Unexpected removal endpoint {:?}", other);
                return;
            }
        };
        match result {
            Ok(reply) => {
                log::info!("[SOCIAL] {} -> {}", endpoint.path(), reply.status);
                ctx.close_all();
                ctx.reload();
            }
            Err(e) => log::error!("[SOCIAL] {} failed: {}", endpoint.path(), e),
        }
    });
}

#[component]
pub fn FriendsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let followers = RwSignal::new(Vec::<Follower>::new());

    let show_followers = move |_: web_sys::MouseEvent| {
        let client = ctx.client();
        spawn_local(async move {
            match commands::list_followers(&client).await {
                Ok(reply) if reply.success => {
                    followers.set(reply.data.unwrap_or_default());
                    ctx.open_modal(ModalId::Followers);
                }
                Ok(reply) => log::warn!("[SOCIAL] Followers returned {}", reply.status),
                Err(e) => log::warn!("[SOCIAL] Could not load followers: {}", e),
            }
        });
    };

    view! {
        <section class="friends">
            <div class="friends-header">
                <h2>"Friends"</h2>
                <button class="link" on:click=show_followers>"Followers"</button>
            </div>
            <For
                each=move || store.friends().get()
                key=|friend| friend.id
                children=move |friend| {
                    let id = friend.id;
                    let progress = friend_progress(&friend);
                    view! {
                        <div class="friend-row">
                            <span class="friend-name">{friend.username}</span>
                            <span class="friend-progress">{progress}</span>
                            <button class="remove-btn" on:click=move |_| ctx.open_remove_friend(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </section>

        <Modal id=ModalId::Followers title="Followers">
            <For
                each=move || followers.get()
                key=|follower| follower.rel_id
                children=move |follower| {
                    let rel_id = follower.rel_id;
                    let following_back = follower.following_back;
                    view! {
                        <div class="follower-row">
                            <span>{follower.username}</span>
                            <Show when=move || following_back>
                                <span class="following-tag">"Following"</span>
                            </Show>
                            <button
                                class="remove-btn"
                                on:click=move |_| ctx.confirm_remove_follower(rel_id)
                            >
                                "Remove"
                            </button>
                        </div>
                    }
                }
            />
        </Modal>

        <Modal id=ModalId::RemoveFriend title="Remove?">
            <p>
                {move || {
                    removal_prompt(ctx.pending.with(|pending| pending.removal.last_opened()))
                }}
            </p>
            <div class="modal-actions">
                <button class="btn danger" on:click=move |_| confirm_removal(ctx)>"Remove"</button>
                <button class="btn secondary" on:click=move |_| ctx.close_all()>"Keep"</button>
            </div>
        </Modal>
    }
}
