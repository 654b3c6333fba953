use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A valued possession. `current_value` may be null in the store while an
/// appraisal is pending; aggregates treat that as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub user_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub current_value: Option<f64>,
    #[serde(default)]
    pub currency: String,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Asset {
    /// Value with null treated as zero.
    pub fn value(&self) -> f64 {
        self.current_value.unwrap_or(0.0)
    }
}
