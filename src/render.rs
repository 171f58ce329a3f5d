//! Render Projections
//!
//! Pure functions from dashboard state to what the components draw. The
//! components add markup only; every decision lives here.

use crate::models::{DaySummary, Friend, LeaderboardEntry, Task, TaskStatus};

/// The single control a task card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskControl {
    Start,
    Complete,
    Completed,
    None,
}

impl TaskControl {
    pub fn for_status(status: &TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => TaskControl::Start,
            TaskStatus::Active => TaskControl::Complete,
            TaskStatus::Completed => TaskControl::Completed,
            TaskStatus::Other(_) => TaskControl::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskControl::Start => "Start",
            TaskControl::Complete => "Complete",
            TaskControl::Completed => "✅ Completed",
            TaskControl::None => "",
        }
    }
}

/// Title, blank when the server has none
pub fn task_title(task: &Task) -> String {
    task.title.clone().unwrap_or_default()
}

/// `"start - end"`; a missing side is left blank, both missing gives ""
pub fn time_range(task: &Task) -> String {
    match (task.start.as_deref(), task.end.as_deref()) {
        (None, None) => String::new(),
        (start, end) => format!("{} - {}", start.unwrap_or(""), end.unwrap_or("")),
    }
}

/// Intensity bucket 0..=4 for a day's score
pub fn heatmap_level(score: i64) -> u8 {
    match score {
        s if s >= 80 => 4,
        s if s >= 60 => 3,
        s if s >= 40 => 2,
        s if s > 0 => 1,
        _ => 0,
    }
}

pub fn heatmap_class(score: i64) -> String {
    format!("day level-{}", heatmap_level(score))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub title: String,
    pub streak: String,
    pub score: String,
    pub is_me: bool,
}

/// Rows in input order, rank = position + 1
pub fn leaderboard_rows(entries: &[LeaderboardEntry]) -> Vec<LeaderboardRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| LeaderboardRow {
            rank: i + 1,
            title: format!("{}. {}", i + 1, entry.name),
            streak: format!("🔥 {}", entry.streak),
            score: format!("⭐ {}%", entry.score),
            is_me: entry.is_me,
        })
        .collect()
}

pub fn leaderboard_row_class(row: &LeaderboardRow, locked: bool) -> &'static str {
    match (row.is_me, locked) {
        (true, true) => "leaderboard-row me locked",
        (true, false) => "leaderboard-row me",
        _ => "leaderboard-row",
    }
}

pub fn greeting(username: &str) -> String {
    format!("Hi {} 👋", username)
}

/// Title shown next to the XP counter
pub fn rank_title(xp: i64) -> &'static str {
    match xp {
        x if x >= 3000 => "👑 Legend",
        x if x >= 1500 => "🔥 Elite",
        x if x >= 700 => "🧠 Strategist",
        x if x >= 300 => "⚔️ Warrior",
        _ => "🪴 Beginner",
    }
}

pub fn streak_label(streak: u32) -> String {
    format!("🔥 {} day streak", streak)
}

/// Lines of the yesterday card
pub fn summary_lines(summary: &DaySummary) -> Vec<String> {
    let saved = if summary.saved >= 0 {
        format!("⏱ {} min saved", summary.saved)
    } else {
        format!("⏱ {} min over", -summary.saved)
    };
    vec![
        format!("✅ {}% completed", summary.percent),
        format!("🗓 {} min planned, {} min spent", summary.planned, summary.actual),
        saved,
    ]
}

/// A friend's streak and today's progress, e.g. `"🔥 2 · 1/3 tasks"`
pub fn friend_progress(friend: &Friend) -> String {
    format!("🔥 {} · {}/{} tasks", friend.streak, friend.done, friend.total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_me: bool) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            streak: 3,
            score: 80,
            is_me,
        }
    }

    #[test]
    fn test_one_control_per_status() {
        assert_eq!(TaskControl::for_status(&TaskStatus::Pending), TaskControl::Start);
        assert_eq!(TaskControl::for_status(&TaskStatus::Active), TaskControl::Complete);
        assert_eq!(TaskControl::for_status(&TaskStatus::Completed), TaskControl::Completed);
        assert_eq!(
            TaskControl::for_status(&TaskStatus::Other("cancelled".to_string())),
            TaskControl::None
        );
        assert_eq!(TaskControl::None.label(), "");
    }

    #[test]
    fn test_heatmap_thresholds() {
        let cases = [
            (0, 0),
            (39, 1),
            (40, 2),
            (59, 2),
            (60, 3),
            (79, 3),
            (80, 4),
            (100, 4),
            (1, 1),
            (-3, 0),
        ];
        for (score, level) in cases {
            assert_eq!(heatmap_level(score), level, "score {}", score);
        }
        assert_eq!(heatmap_class(65), "day level-3");
    }

    #[test]
    fn test_leaderboard_order_and_rank() {
        let rows = leaderboard_rows(&[entry("zoe", false), entry("ana", true), entry("bo", false)]);
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["1. zoe", "2. ana", "3. bo"]);
        assert_eq!(rows[1].rank, 2);
        assert!(rows[1].is_me);
        assert_eq!(rows[0].score, "⭐ 80%");
        assert_eq!(leaderboard_row_class(&rows[1], true), "leaderboard-row me locked");
        assert_eq!(leaderboard_row_class(&rows[0], true), "leaderboard-row");
    }

    #[test]
    fn test_projection_is_idempotent() {
        let entries = vec![entry("a", false), entry("b", true)];
        assert_eq!(leaderboard_rows(&entries), leaderboard_rows(&entries));
    }

    fn task(title: Option<&str>, start: Option<&str>, end: Option<&str>) -> Task {
        Task {
            id: 1,
            title: title.map(str::to_string),
            desc: None,
            start: start.map(str::to_string),
            end: end.map(str::to_string),
            status: TaskStatus::Pending,
        }
    }

    #[test]
    fn test_missing_task_columns_render_blank() {
        assert_eq!(task_title(&task(None, None, None)), "");
        assert_eq!(time_range(&task(None, None, None)), "");
        assert_eq!(time_range(&task(Some("Run"), Some("07:00"), None)), "07:00 - ");
        assert_eq!(time_range(&task(Some("Run"), Some("07:00"), Some("08:00"))), "07:00 - 08:00");
        assert_eq!(task_title(&task(Some("Run"), None, None)), "Run");
    }

    #[test]
    fn test_summary_lines() {
        let summary = DaySummary {
            percent: 50,
            planned: 90,
            actual: 120,
            saved: -30,
        };
        let lines = summary_lines(&summary);
        assert_eq!(lines[0], "✅ 50% completed");
        assert_eq!(lines[1], "🗓 90 min planned, 120 min spent");
        assert_eq!(lines[2], "⏱ 30 min over");
    }

    #[test]
    fn test_friend_progress() {
        let friend = Friend {
            id: 4,
            username: "bo".to_string(),
            streak: 6,
            done: 2,
            total: 5,
        };
        assert_eq!(friend_progress(&friend), "🔥 6 · 2/5 tasks");
        assert_eq!(streak_label(3), "🔥 3 day streak");
    }

    #[test]
    fn test_rank_title() {
        assert_eq!(rank_title(0), "🪴 Beginner");
        assert_eq!(rank_title(300), "⚔️ Warrior");
        assert_eq!(rank_title(1499), "🧠 Strategist");
        assert_eq!(rank_title(3000), "👑 Legend");
    }
}
