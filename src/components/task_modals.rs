//! Task Action Modals
//!
//! Start, complete, incomplete and cancel confirmations. Each confirm button
//! turns the pending target plus its inputs into one request; what happens
//! afterwards is decided by `lifecycle::after_action`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::Modal;
use crate::context::{use_app_context, AppContext};
use crate::lifecycle::{after_action, current_time_hhmm, ActionForm, ModalId, TaskAction};

/// Send the confirmed action and apply the followup
fn submit(ctx: AppContext, action: TaskAction, form: ActionForm) {
    let confirmed = ctx.pending.with_untracked(|pending| pending.task.confirm(action, &form));
    let request = match confirmed {
        Ok(request) => request,
        Err(e) => {
            log::warn!("[TASK] {}", e);
            return;
        }
    };
    let client = ctx.client();
    spawn_local(async move {
        let result = commands::send_task_action(&client, &request).await;
        match &result {
            Ok(reply) => log::info!(
                "[TASK] {:?} task {} -> {} (ok={})",
                request.action,
                request.task_id,
                reply.status,
                reply.success
            ),
            Err(e) => {
                log::error!("[TASK] {:?} task {} failed: {}", request.action, request.task_id, e)
            }
        }
        ctx.apply_followup(after_action(request.action, &result));
    });
}

/// Switch the pending task to another action, keeping its id
fn switch_to(ctx: AppContext, action: TaskAction) {
    let target = ctx.pending.with_untracked(|pending| pending.task.pending());
    if let Some((_, task_id)) = target {
        ctx.open_task(action, task_id);
    }
}

#[component]
pub fn TaskModals() -> impl IntoView {
    let ctx = use_app_context();

    let time = RwSignal::new(current_time_hhmm());
    let reason = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());

    // Fresh inputs whenever a task modal opens
    Effect::new(move |_| {
        if let Some(modal) = ctx.open_modal.get() {
            match modal {
                ModalId::Start | ModalId::Complete => time.set(current_time_hhmm()),
                ModalId::Incomplete | ModalId::Cancel => {
                    reason.set(String::new());
                    comment.set(String::new());
                }
                _ => {}
            }
        }
    });

    let form = move || ActionForm {
        time: time.get_untracked(),
        reason: reason.get_untracked(),
        comment: comment.get_untracked(),
    };

    view! {
        <Modal id=ModalId::Start title="Start task">
            <label>
                "Started at"
                <input
                    type="time"
                    prop:value=move || time.get()
                    on:input=move |ev| time.set(event_target_value(&ev))
                />
            </label>
            <button class="btn primary" on:click=move |_| submit(ctx, TaskAction::Start, form())>
                "Start"
            </button>
        </Modal>

        <Modal id=ModalId::Complete title="Complete task">
            <label>
                "Finished at"
                <input
                    type="time"
                    prop:value=move || time.get()
                    on:input=move |ev| time.set(event_target_value(&ev))
                />
            </label>
            <button class="btn primary" on:click=move |_| submit(ctx, TaskAction::Complete, form())>
                "Complete"
            </button>
            <div class="modal-links">
                <button class="link" on:click=move |_| switch_to(ctx, TaskAction::Incomplete)>
                    "Mark incomplete"
                </button>
                <button class="link" on:click=move |_| switch_to(ctx, TaskAction::Cancel)>
                    "Cancel task"
                </button>
            </div>
        </Modal>

        <Modal id=ModalId::Incomplete title="Mark incomplete">
            <label>
                "What got in the way?"
                <textarea
                    prop:value=move || reason.get()
                    on:input=move |ev| reason.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn warn" on:click=move |_| submit(ctx, TaskAction::Incomplete, form())>
                "Save"
            </button>
        </Modal>

        <Modal id=ModalId::Cancel title="Cancel task">
            <label>
                "Reason"
                <input
                    type="text"
                    prop:value=move || reason.get()
                    on:input=move |ev| reason.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Comment"
                <textarea
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn danger" on:click=move |_| submit(ctx, TaskAction::Cancel, form())>
                "Cancel task"
            </button>
        </Modal>
    }
}
