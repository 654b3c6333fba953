use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl std::fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MilestoneStatus::Pending => write!(f, "Pending"),
            MilestoneStatus::InProgress => write!(f, "In Progress"),
            MilestoneStatus::Completed => write!(f, "Completed"),
            MilestoneStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A goal with status, 0-100 progress, and a numeric priority.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub user_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    pub target_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: MilestoneStatus,
    #[serde(default)]
    pub progress: i32,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub is_public: bool,
}
