//! Task Lifecycle
//!
//! Confirmation protocol for task actions: `open` records the target and
//! picks the modal, `confirm` turns the modal's inputs into a request, and
//! `after_action` decides what the page does once the server has answered.
//! Task status itself is never changed here; the dashboard is refetched.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::commands::{ApiResult, Endpoint};
use crate::models::CompleteResponse;
use crate::social::RemovalSlots;

pub const TASK_COMPLETED_TOAST: &str = "⭐ Task completed";

/// Every overlay the page can show. At most one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    Start,
    Complete,
    Incomplete,
    Cancel,
    RemoveFriend,
    Notifications,
    Followers,
    Logs,
}

impl ModalId {
    pub fn dom_id(&self) -> &'static str {
        match self {
            ModalId::Start => "startModal",
            ModalId::Complete => "completeModal",
            ModalId::Incomplete => "incompleteModal",
            ModalId::Cancel => "cancelModal",
            ModalId::RemoveFriend => "removeFriendModal",
            ModalId::Notifications => "notifModal",
            ModalId::Followers => "followersModal",
            ModalId::Logs => "logsModal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Start,
    Complete,
    Incomplete,
    Cancel,
}

impl TaskAction {
    pub fn modal(self) -> ModalId {
        match self {
            TaskAction::Start => ModalId::Start,
            TaskAction::Complete => ModalId::Complete,
            TaskAction::Incomplete => ModalId::Incomplete,
            TaskAction::Cancel => ModalId::Cancel,
        }
    }

    pub fn endpoint(self, task_id: u32) -> Endpoint {
        match self {
            TaskAction::Start => Endpoint::StartTask(task_id),
            TaskAction::Complete => Endpoint::CompleteTask(task_id),
            TaskAction::Incomplete => Endpoint::IncompleteTask(task_id),
            TaskAction::Cancel => Endpoint::CancelTask(task_id),
        }
    }
}

/// Raw modal inputs; each action reads only its own fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionForm {
    pub time: String,
    pub reason: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TaskPayload {
    Time { time: String },
    Reason { reason: String },
    Cancel { reason: String, comment: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    pub action: TaskAction,
    pub task_id: u32,
    pub payload: TaskPayload,
}

impl TaskRequest {
    pub fn endpoint(&self) -> Endpoint {
        self.action.endpoint(self.task_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("no task action is awaiting confirmation")]
    NothingPending,
    #[error("confirmed {confirmed:?} while {pending:?} is pending")]
    ActionMismatch { pending: TaskAction, confirmed: TaskAction },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LifecycleState {
    #[default]
    Idle,
    AwaitingConfirmation { action: TaskAction, task_id: u32 },
}

impl LifecycleState {
    /// Record the target and return the modal to show
    pub fn open(&mut self, action: TaskAction, task_id: u32) -> ModalId {
        *self = LifecycleState::AwaitingConfirmation { action, task_id };
        action.modal()
    }

    /// Build the request for the pending target. Does not clear the state;
    /// closing the modals does.
    pub fn confirm(
        &self,
        action: TaskAction,
        form: &ActionForm,
    ) -> Result<TaskRequest, LifecycleError> {
        let (pending, task_id) = match *self {
            LifecycleState::Idle => return Err(LifecycleError::NothingPending),
            LifecycleState::AwaitingConfirmation { action, task_id } => (action, task_id),
        };
        if pending != action {
            return Err(LifecycleError::ActionMismatch { pending, confirmed: action });
        }
        let payload = match action {
            TaskAction::Start | TaskAction::Complete => TaskPayload::Time {
                time: form.time.clone(),
            },
            TaskAction::Incomplete => TaskPayload::Reason { reason: form.reason.clone() },
            TaskAction::Cancel => TaskPayload::Cancel {
                reason: form.reason.clone(),
                comment: form.comment.clone(),
            },
        };
        Ok(TaskRequest { action, task_id, payload })
    }

    pub fn close(&mut self) {
        *self = LifecycleState::Idle;
    }

    pub fn pending(&self) -> Option<(TaskAction, u32)> {
        match *self {
            LifecycleState::Idle => None,
            LifecycleState::AwaitingConfirmation { action, task_id } => Some((action, task_id)),
        }
    }
}

/// Every outstanding confirmation target, one slot per kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingSelection {
    pub task: LifecycleState,
    pub removal: RemovalSlots,
}

impl PendingSelection {
    pub fn clear(&mut self) {
        self.task.close();
        self.removal.clear();
    }
}

/// What the page does after a lifecycle request settles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Followup {
    pub close_and_reload: bool,
    pub animate_xp_to: Option<i64>,
    pub toast: Option<&'static str>,
}

/// Start, incomplete and cancel ignore the body; complete gates the XP
/// animation and toast on `ok`. Any HTTP answer closes and reloads; a
/// transport failure leaves the modal open.
pub fn after_action(action: TaskAction, result: &ApiResult<Value>) -> Followup {
    let reply = match result {
        Ok(reply) => reply,
        Err(_) => return Followup::default(),
    };
    let mut followup = Followup {
        close_and_reload: true,
        ..Followup::default()
    };
    if action == TaskAction::Complete && reply.success {
        followup.animate_xp_to = reply
            .data
            .clone()
            .and_then(|data| serde_json::from_value::<CompleteResponse>(data).ok())
            .and_then(|body| body.xp);
        followup.toast = Some(TASK_COMPLETED_TOAST);
    }
    followup
}

/// Default for the time inputs
pub fn current_time_hhmm() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{ApiError, ApiReply};

    fn form() -> ActionForm {
        ActionForm {
            time: "09:30".to_string(),
            reason: "ran late".to_string(),
            comment: "train".to_string(),
        }
    }

    #[test]
    fn test_open_then_confirm_builds_request() {
        let mut state = LifecycleState::default();
        assert_eq!(state.open(TaskAction::Start, 4), ModalId::Start);

        let request = state.confirm(TaskAction::Start, &form()).unwrap();
        assert_eq!(request.endpoint(), Endpoint::StartTask(4));
        assert_eq!(request.payload, TaskPayload::Time { time: "09:30".to_string() });
        assert_eq!(state.pending(), Some((TaskAction::Start, 4)));

        state.close();
        assert_eq!(state, LifecycleState::Idle);
    }

    #[test]
    fn test_confirm_while_idle_is_rejected() {
        let state = LifecycleState::Idle;
        assert_eq!(
            state.confirm(TaskAction::Complete, &form()),
            Err(LifecycleError::NothingPending)
        );
    }

    #[test]
    fn test_reopen_replaces_target() {
        let mut state = LifecycleState::default();
        state.open(TaskAction::Complete, 1);
        state.open(TaskAction::Cancel, 2);
        let request = state.confirm(TaskAction::Cancel, &form()).unwrap();
        assert_eq!(request.task_id, 2);
        assert_eq!(
            state.confirm(TaskAction::Complete, &form()),
            Err(LifecycleError::ActionMismatch {
                pending: TaskAction::Cancel,
                confirmed: TaskAction::Complete
            })
        );
    }

    #[test]
    fn test_payload_json_per_action() {
        let mut state = LifecycleState::default();
        state.open(TaskAction::Cancel, 8);
        let cancel = state.confirm(TaskAction::Cancel, &form()).unwrap();
        assert_eq!(
            serde_json::to_value(&cancel.payload).unwrap(),
            serde_json::json!({"reason": "ran late", "comment": "train"})
        );

        state.open(TaskAction::Incomplete, 8);
        let incomplete = state.confirm(TaskAction::Incomplete, &form()).unwrap();
        assert_eq!(
            serde_json::to_value(&incomplete.payload).unwrap(),
            serde_json::json!({"reason": "ran late"})
        );
    }

    #[test]
    fn test_pending_selection_clear() {
        let mut pending = PendingSelection::default();
        pending.task.open(TaskAction::Complete, 3);
        pending.removal.open_remove_friend(5);
        pending.clear();
        assert_eq!(pending, PendingSelection::default());
    }

    #[test]
    fn test_complete_followup_gated_on_ok() {
        let ok = Ok(ApiReply::from_parts(200, r#"{"ok":true,"xp":50}"#));
        let followup = after_action(TaskAction::Complete, &ok);
        assert!(followup.close_and_reload);
        assert_eq!(followup.animate_xp_to, Some(50));
        assert_eq!(followup.toast, Some(TASK_COMPLETED_TOAST));

        let rejected = Ok(ApiReply::from_parts(200, r#"{"ok":false}"#));
        let followup = after_action(TaskAction::Complete, &rejected);
        assert!(followup.close_and_reload);
        assert_eq!(followup.animate_xp_to, None);
        assert_eq!(followup.toast, None);
    }

    #[test]
    fn test_other_actions_ignore_body() {
        let failed = Ok(ApiReply::from_parts(500, "oops"));
        for action in [TaskAction::Start, TaskAction::Incomplete, TaskAction::Cancel] {
            let followup = after_action(action, &failed);
            assert!(followup.close_and_reload);
            assert_eq!(followup.toast, None);
        }
    }

    #[test]
    fn test_transport_failure_keeps_modal() {
        let err = Err(ApiError::Network("offline".to_string()));
        assert_eq!(after_action(TaskAction::Start, &err), Followup::default());
    }
}
