//! Modal Shell
//!
//! Overlay drawn only while its id is the context's open modal. Clicking the
//! backdrop or the close button closes every modal.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::lifecycle::ModalId;

#[component]
pub fn Modal(id: ModalId, #[prop(into)] title: String, children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.is_open(id)>
            <div class="modal-backdrop" id=id.dom_id() on:click=move |_| ctx.close_all()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>{title.clone()}</h3>
                        <button class="modal-close" on:click=move |_| ctx.close_all()>"×"</button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
