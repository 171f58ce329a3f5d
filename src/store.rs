//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store holds
//! the last dashboard snapshot the server returned and is replaced wholesale
//! on every reload.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{
    DashboardResponse, DaySummary, Friend, LeaderboardEntry, Notification, Task, User,
};
use crate::social;

/// Last fetched dashboard with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// `None` until the first load succeeds; nothing renders before that
    pub user: Option<User>,
    pub tasks: Vec<Task>,
    /// Daily scores, oldest first
    pub heatmap: Vec<i64>,
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Pending friend requests
    pub notifications: Vec<Notification>,
    pub friends: Vec<Friend>,
    /// Yesterday, if there was a plan
    pub summary: Option<DaySummary>,
    pub my_streak: u32,
    pub today_score: i64,
}

impl From<DashboardResponse> for DashboardState {
    fn from(response: DashboardResponse) -> Self {
        Self {
            user: response.user,
            tasks: response.tasks,
            heatmap: response.heatmap,
            leaderboard: response.leaderboard,
            notifications: response.notifications,
            friends: response.friends,
            summary: response.summary,
            my_streak: response.my_streak,
            today_score: response.today_score,
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Reload Sequencing
// ========================

/// Numbers dashboard fetches so a slow, older response cannot overwrite a
/// newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReloadSequencer {
    issued: u64,
    applied: u64,
}

impl ReloadSequencer {
    /// Sequence number for a fetch about to start
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether the response of fetch `seq` may be applied. Accepting moves
    /// the watermark, so anything older is rejected afterwards.
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq > self.applied {
            self.applied = seq;
            true
        } else {
            false
        }
    }
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole snapshot
pub fn store_replace(store: &DashboardStore, state: DashboardState) {
    *store.write() = state;
}

/// Drop an accepted request without refetching
pub fn store_remove_notification(store: &DashboardStore, id: u32) -> bool {
    social::remove_notification(&mut store.notifications().write(), id)
}
