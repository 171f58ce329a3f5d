//! Heatmap Component

use leptos::prelude::*;

use crate::render::heatmap_class;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// One cell per day, shaded by score
#[component]
pub fn Heatmap() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <section class="heatmap-section">
            <h2>"Consistency"</h2>
            <div class="heatmap" id="heatmap">
                {move || {
                    store
                        .heatmap()
                        .get()
                        .into_iter()
                        .map(|score| {
                            let title = format!("{}%", score);
                            view! { <div class=heatmap_class(score) title=title></div> }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
