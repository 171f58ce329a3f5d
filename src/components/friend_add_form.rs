//! Add Friend Form
//!
//! Submissions are debounced: a burst of clicks sends one request carrying
//! the value of the last click.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::debounce::Debounced;
use crate::social::{add_friend_outcome, normalize_username};

#[component]
pub fn FriendAddForm() -> impl IntoView {
    let ctx = use_app_context();
    let username = RwSignal::new(String::new());

    let send = move |raw: String| {
        let Some(name) = normalize_username(&raw) else {
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            log::info!("[SOCIAL] Sending friend request to {}", name);
            let result = commands::add_friend(&client, &name).await;
            match add_friend_outcome(&result) {
                Some(outcome) => {
                    if outcome.clear_input {
                        username.set(String::new());
                    }
                    ctx.toast(outcome.toast);
                }
                None => {
                    if let Err(e) = result {
                        log::error!("[SOCIAL] Friend request failed: {}", e);
                    }
                }
            }
        });
    };
    let debounced = StoredValue::new_local(Debounced::new(ctx.config().debounce_ms, send));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = username.get_untracked();
        debounced.with_value(|d| d.call(value));
    };

    view! {
        <form class="add-friend" on:submit=on_submit>
            <input
                type="text"
                placeholder="Friend's username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
