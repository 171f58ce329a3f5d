//! Log Panel
//!
//! Footer link opening the lines the rolling logger has kept, newest last.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::lifecycle::ModalId;

#[component]
pub fn LogPanel() -> impl IntoView {
    let ctx = use_app_context();
    let lines = RwSignal::new(Vec::<String>::new());

    let open = move |_: web_sys::MouseEvent| {
        lines.set(rolling_logger::recent_lines());
        ctx.open_modal(ModalId::Logs);
    };

    view! {
        <footer class="app-footer">
            <button class="link" on:click=open>"Logs"</button>
        </footer>
        <Modal id=ModalId::Logs title="Recent logs">
            <pre class="log-lines">
                {move || lines.get().join("\n")}
            </pre>
        </Modal>
    }
}
