//! Summary Card
//!
//! Streak, today's score and, when there was a plan yesterday, how it went.

use leptos::prelude::*;

use crate::render::{streak_label, summary_lines};
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn SummaryCard() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <section class="summary-card">
            <div class="summary-today">
                <span class="streak">{move || streak_label(store.my_streak().get())}</span>
                <span class="today-score">
                    {move || format!("⭐ {} pts today", store.today_score().get())}
                </span>
            </div>
            {move || {
                store
                    .summary()
                    .get()
                    .map(|summary| {
                        view! {
                            <div class="summary-yesterday">
                                <h3>"Yesterday"</h3>
                                {summary_lines(&summary)
                                    .into_iter()
                                    .map(|line| view! { <p>{line}</p> })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </section>
    }
}
