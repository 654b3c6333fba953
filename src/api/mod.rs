//! Query interface to the hosted relational store.
//!
//! `DataStore` is the narrow surface the dashboard consumes: seven fetch
//! operations, one per entity type, each independently fallible. `RestClient`
//! implements it against a PostgREST-style endpoint.

pub mod client;
pub mod error;

pub use client::RestClient;
pub use error::ApiError;

use crate::models::{Asset, Milestone, Profile, Skill, Strength, Talent, Weakness};

/// Read access to a user's entity collections.
///
/// Implementations surface backend failures as `Err`; an empty result set is
/// a success. `fetch_profile` returns `Ok(None)` when no profile row exists,
/// which is distinct from a failed fetch.
#[allow(async_fn_in_trait)]
pub trait DataStore {
    /// The profile singleton, if one has been created.
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, ApiError>;

    /// Active skills, highest level first.
    async fn fetch_skills(&self, user_id: &str) -> Result<Vec<Skill>, ApiError>;

    /// Active assets, most valuable first.
    async fn fetch_assets(&self, user_id: &str) -> Result<Vec<Asset>, ApiError>;

    /// The most recently created milestones, newest first.
    async fn fetch_milestones(&self, user_id: &str) -> Result<Vec<Milestone>, ApiError>;

    /// All talents, highest level first.
    async fn fetch_talents(&self, user_id: &str) -> Result<Vec<Talent>, ApiError>;

    /// All strengths, newest first.
    async fn fetch_strengths(&self, user_id: &str) -> Result<Vec<Strength>, ApiError>;

    /// All weaknesses, highest priority first.
    async fn fetch_weaknesses(&self, user_id: &str) -> Result<Vec<Weakness>, ApiError>;
}
