//! Frontend Models
//!
//! Data structures matching the backend's JSON.

use serde::{Deserialize, Serialize};

/// Task status. Anything the client does not know is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Pending,
    Active,
    Completed,
    Other(String),
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => TaskStatus::Pending,
            "active" => TaskStatus::Active,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Other(value),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => "pending".to_string(),
            TaskStatus::Active => "active".to_string(),
            TaskStatus::Completed => "completed".to_string(),
            TaskStatus::Other(other) => other,
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    /// Title and times are nullable columns server-side
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "description")]
    pub desc: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub xp: i64,
    #[serde(default = "default_true")]
    pub show_global: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub streak: u32,
    pub score: i64,
    #[serde(default)]
    pub is_me: bool,
}

/// Pending friend request addressed to the viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    #[serde(default)]
    pub message: String,
}

/// Accepted friendship; `id` is the relationship id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub streak: u32,
    /// Today's completed tasks
    #[serde(default)]
    pub done: u32,
    /// Today's planned tasks
    #[serde(default)]
    pub total: u32,
}

/// Yesterday's plan versus what happened; minutes for the time fields
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DaySummary {
    pub percent: i64,
    pub planned: i64,
    pub actual: i64,
    pub saved: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follower {
    pub username: String,
    #[serde(default)]
    pub following_back: bool,
    pub rel_id: u32,
}

/// `GET /api/dashboard`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub heatmap: Vec<i64>,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub friends: Vec<Friend>,
    /// Absent when there was no plan yesterday
    #[serde(default)]
    pub summary: Option<DaySummary>,
    #[serde(default)]
    pub my_streak: u32,
    #[serde(default)]
    pub today_score: i64,
}

/// `POST /task/complete/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CompleteResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub xp: Option<i64>,
}
