//! Application Context
//!
//! Shared state provided via Leptos Context API: the reload trigger, the
//! visible modal, pending confirmation targets, toasts, the API client and
//! the animated XP value.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::animation::{run_tween, TweenTracker, XpSync, XpTween};
use crate::commands::ApiClient;
use crate::config::AppConfig;
use crate::lifecycle::{Followup, ModalId, PendingSelection, TaskAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// The XP number on screen, which may lag the store while animating
#[derive(Clone, Copy)]
pub struct XpDisplay {
    pub shown: RwSignal<i64>,
    tracker: StoredValue<Rc<RefCell<TweenTracker>>, LocalStorage>,
}

impl XpDisplay {
    fn new() -> Self {
        Self {
            shown: RwSignal::new(0),
            tracker: StoredValue::new_local(Rc::new(RefCell::new(TweenTracker::default()))),
        }
    }

    /// Count up from the value on screen to `to`
    pub fn animate_to(&self, to: i64, duration_ms: u32) {
        let shown = self.shown;
        let tween = XpTween::new(shown.get_untracked(), to, duration_ms as f64);
        run_tween(self.tracker.get_value(), tween, move |value| shown.set(value));
    }

    /// Adopt the server's value unless an animation is already heading there
    pub fn sync(&self, server_xp: i64) {
        let tracker = self.tracker.get_value();
        let decision = tracker.borrow_mut().reconcile(server_xp);
        if decision == XpSync::Adopt {
            log::debug!("[APP] Showing server XP {}", server_xp);
            self.shown.set(server_xp);
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the dashboard - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the dashboard - write
    set_reload_trigger: WriteSignal<u32>,
    /// The one visible overlay
    pub open_modal: RwSignal<Option<ModalId>>,
    /// Targets awaiting confirmation
    pub pending: RwSignal<PendingSelection>,
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
    client: StoredValue<ApiClient>,
    config: StoredValue<AppConfig>,
    pub xp: XpDisplay,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        client: ApiClient,
        config: AppConfig,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            open_modal: RwSignal::new(None),
            pending: RwSignal::new(PendingSelection::default()),
            toasts: RwSignal::new(Vec::new()),
            next_toast_id: StoredValue::new(0),
            client: StoredValue::new(client),
            config: StoredValue::new(config),
            xp: XpDisplay::new(),
        }
    }

    /// Trigger a reload of the dashboard
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    // ========================
    // Modals
    // ========================

    /// Show `modal`, hiding whatever was open
    pub fn open_modal(&self, modal: ModalId) {
        log::debug!("[APP] Opening {}", modal.dom_id());
        self.open_modal.set(Some(modal));
    }

    /// Reactive: whether `modal` is the visible one
    pub fn is_open(&self, modal: ModalId) -> bool {
        self.open_modal.get() == Some(modal)
    }

    /// Hide every modal and forget all pending targets
    pub fn close_all(&self) {
        self.open_modal.set(None);
        self.pending.update(|pending| pending.clear());
    }

    /// Record a task target and show its modal
    pub fn open_task(&self, action: TaskAction, task_id: u32) {
        log::info!("[TASK] {:?} requested for task {}", action, task_id);
        self.pending.update(|pending| {
            pending.task.open(action, task_id);
        });
        self.open_modal(action.modal());
    }

    pub fn open_remove_friend(&self, id: u32) {
        self.pending.update(|pending| pending.removal.open_remove_friend(id));
        self.open_modal(ModalId::RemoveFriend);
    }

    pub fn confirm_remove_follower(&self, rel_id: u32) {
        self.pending.update(|pending| pending.removal.confirm_remove_follower(rel_id));
        self.open_modal(ModalId::RemoveFriend);
    }

    // ========================
    // Feedback
    // ========================

    /// Show a transient message
    pub fn toast(&self, message: impl Into<String>) {
        let id = self.next_toast_id.get_value().wrapping_add(1);
        self.next_toast_id.set_value(id);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.into(),
            })
        });

        let toasts = self.toasts;
        Timeout::new(self.config.with_value(|c| c.toast_ms), move || {
            toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        })
        .forget();
    }

    /// Carry out what a settled lifecycle request asks for
    pub fn apply_followup(&self, followup: Followup) {
        if let Some(xp) = followup.animate_xp_to {
            self.xp.animate_to(xp, self.config.with_value(|c| c.xp_animation_ms));
        }
        if let Some(message) = followup.toast {
            self.toast(message);
        }
        if followup.close_and_reload {
            self.close_all();
            self.reload();
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
