//! Leaderboard Component
//!
//! Rows in server order. The viewer's row is watched with an
//! IntersectionObserver and gets the `locked` (sticky) class while it is
//! scrolled out of view.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use crate::render::{leaderboard_row_class, leaderboard_rows, LeaderboardRow};
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

type ObserverSlot = Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)>;

#[component]
pub fn Leaderboard() -> impl IntoView {
    let store = use_dashboard_store();
    let locked = RwSignal::new(false);
    let me_ref = NodeRef::<Div>::new();
    let observer: StoredValue<ObserverSlot, LocalStorage> = StoredValue::new_local(None);

    // Rows are rebuilt on reload, so re-observe whenever the node changes
    Effect::new(move |_| {
        let Some(row) = me_ref.get() else {
            return;
        };
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let out_of_view = !entry.is_intersecting();
                if locked.get_untracked() != out_of_view {
                    locked.set(out_of_view);
                }
            }
        });
        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(created) => {
                created.observe(&row);
                observer.update_value(|slot| {
                    if let Some((previous, _)) = slot.take() {
                        previous.disconnect();
                    }
                    *slot = Some((created, callback));
                });
            }
            Err(e) => log::warn!("[APP] IntersectionObserver unavailable: {:?}", e),
        }
    });

    let row_view = move |row: LeaderboardRow| {
        let class_row = row.clone();
        let class = move || leaderboard_row_class(&class_row, locked.get());
        let cells = view! {
            <span class="lb-name">{row.title.clone()}</span>
            <span class="lb-streak">{row.streak.clone()}</span>
            <span class="lb-score">{row.score.clone()}</span>
        };
        if row.is_me {
            view! { <div class=class node_ref=me_ref>{cells}</div> }.into_any()
        } else {
            view! { <div class=class>{cells}</div> }.into_any()
        }
    };

    view! {
        <section class="leaderboard-section">
            <h2>"Leaderboard"</h2>
            <div class="leaderboard" id="leaderboard">
                {move || {
                    leaderboard_rows(&store.leaderboard().get())
                        .into_iter()
                        .map(row_view)
                        .collect_view()
                }}
            </div>
        </section>
    }
}
