use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A self-assessed strength. `updated_at` doubles as a "last showcased"
/// signal for the dormant-strength heuristic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Strength {
    pub id: String,
    pub user_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub description: Option<String>,
    pub examples: Option<String>,
    #[serde(default)]
    pub development_level: i32,
    #[serde(default)]
    pub is_active: bool,
}

/// A self-assessed weakness, priority 1-3 with 3 the most pressing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Weakness {
    pub id: String,
    pub user_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub description: Option<String>,
    pub impact: Option<String>,
    pub improvement_plan: Option<String>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub is_working_on: bool,
    #[serde(default)]
    pub is_active: bool,
}
