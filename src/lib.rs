//! Lifeboard core - the data layer behind a personal life-tracking dashboard.
//!
//! A single user records skills, assets, milestones, talents, strengths, and
//! weaknesses in a hosted relational store. This crate provides the pieces a
//! dashboard UI sits on:
//!
//! - [`cache::DataCache`]: process-lifetime TTL cache with lazy eviction on
//!   read and an optional periodic background sweep
//! - [`api::DataStore`] / [`api::RestClient`]: the narrow query interface to
//!   the backend
//! - [`dashboard::Dashboard`]: batch loader issuing seven concurrent fetches
//!   with per-fetch failure isolation, plus the all-or-nothing cache-first
//!   read path
//! - [`stats`] and [`insights`]: derived aggregates and heuristic focus
//!   suggestions, recomputed from the loaded state on demand

pub mod api;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod insights;
pub mod models;
pub mod stats;

pub use api::{ApiError, DataStore, RestClient};
pub use cache::{CacheStats, CacheValue, DataCache};
pub use config::Config;
pub use dashboard::{Dashboard, DashboardState};
pub use insights::FocusInsights;
pub use stats::DashboardStats;
