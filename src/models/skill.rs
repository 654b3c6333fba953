use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A practiced skill, rated 1-10.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub user_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub level: i32,
    pub description: Option<String>,
    pub started_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_active: bool,
}

/// An innate talent, rated 1-10. Unlike skills, talents carry no active flag;
/// every row is listed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Talent {
    pub id: String,
    pub user_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: Option<String>,
    pub level: i32,
    #[serde(default)]
    pub category: String,
    pub discovered_date: Option<NaiveDate>,
}
