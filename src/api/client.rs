//! REST client for the hosted relational store.
//!
//! Speaks the PostgREST dialect: one table per entity type, with `select`,
//! equality filters, `order`, and `limit` passed as query parameters. The
//! client holds no retry logic - a failed request surfaces as an `ApiError`
//! and the caller decides what to do.

use std::time::Duration;

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{Asset, Milestone, Profile, Skill, Strength, Talent, Weakness};

use super::{ApiError, DataStore};

/// HTTP request timeout in seconds.
/// 30s allows for slow backend responses while still failing eventually.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// The dashboard shows only the most recent milestones.
const MILESTONE_LIMIT: u32 = 6;

/// REST client for the dashboard backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    headers: header::HeaderMap,
}

impl RestClient {
    /// Create a client for the given endpoint. `base_url` points at the REST
    /// root (e.g. `https://example.supabase.co/rest/v1`); `api_key` is sent
    /// as both the `apikey` header and a bearer token.
    pub fn new(base_url: impl Into<String>, api_key: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let mut headers = header::HeaderMap::new();
        let key = header::HeaderValue::from_str(api_key).map_err(|_| ApiError::InvalidApiKey)?;
        let bearer = header::HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| ApiError::InvalidApiKey)?;
        headers.insert("apikey", key);
        headers.insert(header::AUTHORIZATION, bearer);

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            headers,
        })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, ApiError> {
        let url = format!("{}/{}", self.base_url, table);
        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(query)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let rows: Vec<T> = response.json().await?;
        debug!(table, count = rows.len(), "rows fetched");
        Ok(rows)
    }

    /// Filters shared by every per-user collection query.
    fn user_query(user_id: &str) -> Vec<(&'static str, String)> {
        vec![
            ("select", "*".to_string()),
            ("user_id", format!("eq.{}", user_id)),
        ]
    }
}

impl DataStore for RestClient {
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, ApiError> {
        // The profile table is keyed by the user id itself. Selecting rows
        // rather than a single object keeps "no row" distinguishable from a
        // failed request.
        let query = vec![
            ("select", "*".to_string()),
            ("id", format!("eq.{}", user_id)),
            ("limit", "1".to_string()),
        ];
        let rows: Vec<Profile> = self.get_rows("user_profile", &query).await?;
        Ok(rows.into_iter().next())
    }

    async fn fetch_skills(&self, user_id: &str) -> Result<Vec<Skill>, ApiError> {
        let mut query = Self::user_query(user_id);
        query.push(("is_active", "eq.true".to_string()));
        query.push(("order", "level.desc".to_string()));
        self.get_rows("skills", &query).await
    }

    async fn fetch_assets(&self, user_id: &str) -> Result<Vec<Asset>, ApiError> {
        let mut query = Self::user_query(user_id);
        query.push(("is_active", "eq.true".to_string()));
        query.push(("order", "current_value.desc".to_string()));
        self.get_rows("assets", &query).await
    }

    async fn fetch_milestones(&self, user_id: &str) -> Result<Vec<Milestone>, ApiError> {
        let mut query = Self::user_query(user_id);
        query.push(("order", "created_at.desc".to_string()));
        query.push(("limit", MILESTONE_LIMIT.to_string()));
        self.get_rows("milestones", &query).await
    }

    async fn fetch_talents(&self, user_id: &str) -> Result<Vec<Talent>, ApiError> {
        let mut query = Self::user_query(user_id);
        query.push(("order", "level.desc".to_string()));
        self.get_rows("talents", &query).await
    }

    async fn fetch_strengths(&self, user_id: &str) -> Result<Vec<Strength>, ApiError> {
        let mut query = Self::user_query(user_id);
        query.push(("order", "created_at.desc".to_string()));
        self.get_rows("strengths", &query).await
    }

    async fn fetch_weaknesses(&self, user_id: &str) -> Result<Vec<Weakness>, ApiError> {
        let mut query = Self::user_query(user_id);
        query.push(("order", "priority.desc".to_string()));
        self.get_rows("weaknesses", &query).await
    }
}
