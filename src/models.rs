use serde::{Deserialize, Serialize};

/// The whole identity: a display name chosen at login. No password, no
/// uniqueness check; persisted until logout clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tasks: Vec<Task>,
    pub icon: String,
    pub color: String,
}

/// A finished task with its photo evidence. Immutable once created; stored
/// newest-first in both the per-user list and the global list. Field names
/// stay camelCase so the persisted files keep the original data format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedTask {
    pub id: String,
    pub task_id: String,
    pub category_id: String,
    pub task_title: String,
    pub category_title: String,
    /// RFC 3339 timestamp with the local offset at recording time.
    pub date: String,
    /// Self-contained data URI of the uploaded photo.
    pub image_url: String,
    pub username: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: u64,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    pub category_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRequest {
    pub task_id: String,
    pub category_id: String,
    pub task_title: String,
    pub category_title: String,
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub filter: TimeFilter,
}
