//! UI Components
//!
//! Leptos components drawing the dashboard.

mod friend_add_form;
mod friends_panel;
mod heatmap;
mod leaderboard;
mod log_panel;
mod modal;
mod notifications;
mod privacy_toggle;
mod summary_card;
mod task_list;
mod task_modals;
mod toast;
mod xp_counter;

pub use friend_add_form::FriendAddForm;
pub use friends_panel::FriendsPanel;
pub use heatmap::Heatmap;
pub use leaderboard::Leaderboard;
pub use log_panel::LogPanel;
pub use modal::Modal;
pub use notifications::NotificationBell;
pub use privacy_toggle::PrivacyToggle;
pub use summary_card::SummaryCard;
pub use task_list::TaskList;
pub use task_modals::TaskModals;
pub use toast::ToastHost;
pub use xp_counter::XpCounter;
