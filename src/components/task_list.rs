//! Task List Component
//!
//! Today's tasks, each with the one control its status allows. The list is
//! rebuilt from the store on every reload.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::lifecycle::TaskAction;
use crate::models::Task;
use crate::render::{task_title, time_range, TaskControl};
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <section class="tasks">
            <h2>"Today"</h2>
            {move || {
                let tasks = store.tasks().get();
                if tasks.is_empty() {
                    view! { <p class="empty">"No tasks planned for today."</p> }.into_any()
                } else {
                    tasks
                        .into_iter()
                        .map(|task| view! { <TaskCard task=task /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn TaskCard(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let id = task.id;
    let control = TaskControl::for_status(&task.status);
    let status_class = format!("task {}", String::from(task.status.clone()));

    let control_view = match control {
        TaskControl::Start => view! {
            <button class="btn start" on:click=move |_| ctx.open_task(TaskAction::Start, id)>
                {control.label()}
            </button>
        }
        .into_any(),
        TaskControl::Complete => view! {
            <button class="btn complete" on:click=move |_| ctx.open_task(TaskAction::Complete, id)>
                {control.label()}
            </button>
        }
        .into_any(),
        TaskControl::Completed => view! { <span class="done">{control.label()}</span> }.into_any(),
        TaskControl::None => ().into_any(),
    };

    view! {
        <div class=status_class data-task-id=id.to_string()>
            <div class="task-main">
                <h3>{task_title(&task)}</h3>
                {task.desc.clone().map(|desc| view! { <p class="task-desc">{desc}</p> })}
                <span class="task-time">{time_range(&task)}</span>
            </div>
            <div class="task-actions">{control_view}</div>
        </div>
    }
}
