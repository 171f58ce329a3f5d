//! Social Controller
//!
//! Friend and follower removal share one confirmation modal but keep
//! separate pending slots. Add-friend, accept and privacy map server
//! replies to what the page shows.

use serde_json::Value;
use thiserror::Error;

use crate::commands::{ApiResult, Endpoint};
use crate::models::Notification;

pub const FRIEND_ADDED_TOAST: &str = "✔ Friend added";
pub const REQUEST_SENT_TOAST: &str = "📨 Friend request sent";
pub const ALREADY_REQUESTED_TOAST: &str = "⏳ Request already sent";
pub const ALREADY_FRIENDS_TOAST: &str = "✔ Already friends";
pub const GENERIC_ERROR_TOAST: &str = "❌ Error";
pub const PRIVACY_FAILED_ALERT: &str = "Failed to update privacy";
pub const NETWORK_ERROR_ALERT: &str = "Network error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalKind {
    Friend,
    Follower,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocialError {
    #[error("no friend selected for removal")]
    NoFriendSelected,
    #[error("no follower selected for removal")]
    NoFollowerSelected,
    #[error("nothing awaiting removal")]
    NothingPending,
}

/// Pending ids for the shared removal modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalSlots {
    friend_to_remove: Option<u32>,
    follower_to_remove: Option<u32>,
    last_opened: Option<RemovalKind>,
}

impl RemovalSlots {
    pub fn open_remove_friend(&mut self, id: u32) {
        self.friend_to_remove = Some(id);
        self.last_opened = Some(RemovalKind::Friend);
    }

    /// Opens the same modal as `open_remove_friend`, into its own slot
    pub fn confirm_remove_follower(&mut self, id: u32) {
        self.follower_to_remove = Some(id);
        self.last_opened = Some(RemovalKind::Follower);
    }

    pub fn confirm_remove_friend(&self) -> Result<Endpoint, SocialError> {
        self.friend_to_remove
            .map(Endpoint::DeleteFriend)
            .ok_or(SocialError::NoFriendSelected)
    }

    pub fn confirm_remove_follower_final(&self) -> Result<Endpoint, SocialError> {
        self.follower_to_remove
            .map(Endpoint::RemoveFollower)
            .ok_or(SocialError::NoFollowerSelected)
    }

    /// Confirm button of the shared modal: whichever flow opened it last
    pub fn confirm_shared(&self) -> Result<Endpoint, SocialError> {
        match self.last_opened {
            Some(RemovalKind::Friend) => self.confirm_remove_friend(),
            Some(RemovalKind::Follower) => self.confirm_remove_follower_final(),
            None => Err(SocialError::NothingPending),
        }
    }

    pub fn last_opened(&self) -> Option<RemovalKind> {
        self.last_opened
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Body text of the shared removal modal
pub fn removal_prompt(kind: Option<RemovalKind>) -> &'static str {
    match kind {
        Some(RemovalKind::Friend) => "Remove this friend? They will no longer see your progress.",
        Some(RemovalKind::Follower) => "Remove this follower? They will stop following you.",
        None => "",
    }
}

// ========================
// Add friend
// ========================

/// Trimmed username, or `None` when nothing should be sent
pub fn normalize_username(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFriendOutcome {
    pub toast: &'static str,
    pub clear_input: bool,
}

/// `None` on transport failure: nothing is shown
pub fn add_friend_outcome(result: &ApiResult<Value>) -> Option<AddFriendOutcome> {
    let reply = result.as_ref().ok()?;
    if reply.success {
        return Some(AddFriendOutcome {
            toast: REQUEST_SENT_TOAST,
            clear_input: true,
        });
    }
    let toast = match reply.error.as_deref() {
        Some("requested") => ALREADY_REQUESTED_TOAST,
        Some("following") => ALREADY_FRIENDS_TOAST,
        _ => GENERIC_ERROR_TOAST,
    };
    Some(AddFriendOutcome {
        toast,
        clear_input: false,
    })
}

// ========================
// Notifications
// ========================

/// Drop an accepted request locally. Returns whether it was present.
pub fn remove_notification(notifications: &mut Vec<Notification>, id: u32) -> bool {
    let before = notifications.len();
    notifications.retain(|n| n.id != id);
    notifications.len() != before
}

pub fn badge_visible(notifications: &[Notification]) -> bool {
    !notifications.is_empty()
}

// ========================
// Privacy toggle
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivacyResolution {
    pub checked: bool,
    pub alert: Option<&'static str>,
}

/// The checkbox has already flipped from `before`; keep it on success,
/// otherwise put it back.
pub fn resolve_privacy(before: bool, result: &ApiResult<Value>) -> PrivacyResolution {
    match result {
        Ok(reply) if reply.success => PrivacyResolution {
            checked: !before,
            alert: None,
        },
        Ok(_) => PrivacyResolution {
            checked: before,
            alert: Some(PRIVACY_FAILED_ALERT),
        },
        Err(_) => PrivacyResolution {
            checked: before,
            alert: Some(NETWORK_ERROR_ALERT),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{ApiError, ApiReply};

    #[test]
    fn test_follower_final_uses_follower_slot() {
        let mut slots = RemovalSlots::default();
        slots.open_remove_friend(11);
        slots.confirm_remove_follower(42);

        assert_eq!(slots.confirm_remove_follower_final(), Ok(Endpoint::RemoveFollower(42)));
        assert_eq!(slots.confirm_remove_friend(), Ok(Endpoint::DeleteFriend(11)));
        assert_eq!(slots.confirm_shared(), Ok(Endpoint::RemoveFollower(42)));
    }

    #[test]
    fn test_follower_then_friend() {
        let mut slots = RemovalSlots::default();
        slots.confirm_remove_follower(3);
        slots.open_remove_friend(4);
        assert_eq!(slots.confirm_shared(), Ok(Endpoint::DeleteFriend(4)));
        assert_eq!(slots.confirm_remove_follower_final(), Ok(Endpoint::RemoveFollower(3)));
    }

    #[test]
    fn test_prompt_follows_last_opened() {
        let mut slots = RemovalSlots::default();
        assert_eq!(removal_prompt(slots.last_opened()), "");
        slots.open_remove_friend(1);
        assert!(removal_prompt(slots.last_opened()).contains("friend"));
        slots.confirm_remove_follower(2);
        assert!(removal_prompt(slots.last_opened()).contains("follower"));
    }

    #[test]
    fn test_empty_slots() {
        let slots = RemovalSlots::default();
        assert_eq!(slots.confirm_remove_friend(), Err(SocialError::NoFriendSelected));
        assert_eq!(slots.confirm_remove_follower_final(), Err(SocialError::NoFollowerSelected));
        assert_eq!(slots.confirm_shared(), Err(SocialError::NothingPending));
    }

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("  ana  "), Some("ana".to_string()));
        assert_eq!(normalize_username("   "), None);
    }

    #[test]
    fn test_add_friend_error_codes() {
        let outcome =
            |body: &str| add_friend_outcome(&Ok(ApiReply::from_parts(200, body))).unwrap();
        assert_eq!(outcome(r#"{"ok":false,"error":"requested"}"#).toast, ALREADY_REQUESTED_TOAST);
        assert_eq!(outcome(r#"{"ok":false,"error":"following"}"#).toast, ALREADY_FRIENDS_TOAST);
        assert_eq!(outcome(r#"{"ok":false,"error":"no_user"}"#).toast, GENERIC_ERROR_TOAST);

        let sent = outcome(r#"{"ok":true}"#);
        assert_eq!(sent.toast, REQUEST_SENT_TOAST);
        assert!(sent.clear_input);

        assert_eq!(add_friend_outcome(&Err(ApiError::Network("down".to_string()))), None);
    }

    #[test]
    fn test_accept_removes_and_hides_badge() {
        let mut notifications = vec![
            Notification { id: 1, message: "a".to_string() },
            Notification { id: 2, message: "b".to_string() },
        ];
        assert!(remove_notification(&mut notifications, 1));
        assert!(badge_visible(&notifications));
        assert!(!remove_notification(&mut notifications, 1));
        assert!(remove_notification(&mut notifications, 2));
        assert!(!badge_visible(&notifications));
    }

    #[test]
    fn test_privacy_rollback_on_rejection() {
        // Box was unchecked, user clicked, server says no
        let resolution = resolve_privacy(false, &Ok(ApiReply::from_parts(200, r#"{"ok":false}"#)));
        assert!(!resolution.checked);
        assert_eq!(resolution.alert, Some(PRIVACY_FAILED_ALERT));

        let resolution = resolve_privacy(true, &Err(ApiError::Network("down".to_string())));
        assert!(resolution.checked);
        assert_eq!(resolution.alert, Some(NETWORK_ERROR_ALERT));

        let resolution = resolve_privacy(true, &Ok(ApiReply::from_parts(200, r#"{"ok":true}"#)));
        assert!(!resolution.checked);
        assert_eq!(resolution.alert, None);
    }
}
