use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The single profile record for a user. At most one row exists per user;
/// a missing row is a valid state for a fresh account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub current_height: Option<f64>,
    pub current_weight: Option<f64>,
    pub location: Option<String>,
    pub occupation: Option<String>,
    pub bio: Option<String>,
}
