//! Dashboard state management: the batch loader, the cache-first read path,
//! and the state snapshot exposed to callers.
//!
//! `Dashboard` owns a `DataStore`, a `DataCache`, and the current
//! `DashboardState` for one user. A load issues all seven entity fetches
//! concurrently and merges whatever settled successfully; a failed fetch is
//! logged and leaves both the previous state value and any stale cache entry
//! untouched. Overlapping loads for the same user are not coalesced - each
//! runs its own batch and overwrites cache entries as it finishes.

use tracing::{debug, info, warn};

use crate::api::{ApiError, DataStore};
use crate::cache::{CacheValue, DataCache};
use crate::insights::{self, FocusInsights};
use crate::models::{Asset, EntityKind, Milestone, Profile, Skill, Strength, Talent, Weakness};
use crate::stats::{self, DashboardStats};

/// Everything loaded for one user, plus the load status flags.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub profile: Option<Profile>,
    pub skills: Vec<Skill>,
    pub assets: Vec<Asset>,
    pub milestones: Vec<Milestone>,
    pub talents: Vec<Talent>,
    pub strengths: Vec<Strength>,
    pub weaknesses: Vec<Weakness>,
    pub loading: bool,
    /// Set only when a load fails outright (every fetch failed); individual
    /// fetch failures are absorbed per entity.
    pub error: Option<String>,
}

pub struct Dashboard<S> {
    store: S,
    cache: DataCache,
    user_id: String,
    state: DashboardState,
}

impl<S: DataStore> Dashboard<S> {
    pub fn new(store: S, cache: DataCache, user_id: impl Into<String>) -> Self {
        Self {
            store,
            cache,
            user_id: user_id.into(),
            state: DashboardState::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn stats(&self) -> DashboardStats {
        stats::compute(&self.state)
    }

    pub fn insights(&self) -> FocusInsights {
        insights::compute(&self.state)
    }

    /// Cache-first read: serve the snapshot from cache only when every entity
    /// type is simultaneously fresh. A single missing or expired entry forces
    /// a full reload - no partial cache serving, so the snapshot is never a
    /// mix of entries stale relative to each other.
    pub async fn load(&mut self) {
        if self.load_from_cache() {
            debug!(user_id = %self.user_id, "dashboard served from cache");
            return;
        }
        self.load_all().await;
    }

    /// Delete all cached entries for this user, then reload from the store.
    /// The subsequent read reflects backend state at call time, modulo the
    /// usual per-fetch failure tolerance.
    pub async fn refresh(&mut self) {
        for kind in EntityKind::ALL {
            self.cache.delete(&kind.cache_key(&self.user_id));
        }
        self.load_all().await;
    }

    fn load_from_cache(&mut self) -> bool {
        let get = |kind: EntityKind| self.cache.get(&kind.cache_key(&self.user_id));

        let (
            Some(CacheValue::Profile(profile)),
            Some(CacheValue::Skills(skills)),
            Some(CacheValue::Assets(assets)),
            Some(CacheValue::Milestones(milestones)),
            Some(CacheValue::Talents(talents)),
            Some(CacheValue::Strengths(strengths)),
            Some(CacheValue::Weaknesses(weaknesses)),
        ) = (
            get(EntityKind::Profile),
            get(EntityKind::Skills),
            get(EntityKind::Assets),
            get(EntityKind::Milestones),
            get(EntityKind::Talents),
            get(EntityKind::Strengths),
            get(EntityKind::Weaknesses),
        )
        else {
            return false;
        };

        self.state = DashboardState {
            profile: Some(profile),
            skills,
            assets,
            milestones,
            talents,
            strengths,
            weaknesses,
            loading: false,
            error: None,
        };
        true
    }

    /// Issue all seven fetches concurrently, wait for every one to settle,
    /// then merge. Successes overwrite the cache entry and the state field;
    /// failures leave both alone.
    async fn load_all(&mut self) {
        self.state.loading = true;
        self.state.error = None;

        let user_id = self.user_id.clone();
        let (profile, skills, assets, milestones, talents, strengths, weaknesses) = tokio::join!(
            self.store.fetch_profile(&user_id),
            self.store.fetch_skills(&user_id),
            self.store.fetch_assets(&user_id),
            self.store.fetch_milestones(&user_id),
            self.store.fetch_talents(&user_id),
            self.store.fetch_strengths(&user_id),
            self.store.fetch_weaknesses(&user_id),
        );

        let mut failures: Vec<String> = Vec::new();

        match profile {
            Ok(Some(data)) => {
                self.cache.set(
                    &EntityKind::Profile.cache_key(&user_id),
                    CacheValue::Profile(data.clone()),
                    None,
                );
                self.state.profile = Some(data);
            }
            Ok(None) => debug!("no profile row for user; keeping previous value"),
            Err(e) => record_failure(EntityKind::Profile, e, &mut failures),
        }

        merge_collection(
            &self.cache,
            EntityKind::Skills,
            &user_id,
            skills,
            CacheValue::Skills,
            &mut self.state.skills,
            &mut failures,
        );
        merge_collection(
            &self.cache,
            EntityKind::Assets,
            &user_id,
            assets,
            CacheValue::Assets,
            &mut self.state.assets,
            &mut failures,
        );
        merge_collection(
            &self.cache,
            EntityKind::Milestones,
            &user_id,
            milestones,
            CacheValue::Milestones,
            &mut self.state.milestones,
            &mut failures,
        );
        merge_collection(
            &self.cache,
            EntityKind::Talents,
            &user_id,
            talents,
            CacheValue::Talents,
            &mut self.state.talents,
            &mut failures,
        );
        merge_collection(
            &self.cache,
            EntityKind::Strengths,
            &user_id,
            strengths,
            CacheValue::Strengths,
            &mut self.state.strengths,
            &mut failures,
        );
        merge_collection(
            &self.cache,
            EntityKind::Weaknesses,
            &user_id,
            weaknesses,
            CacheValue::Weaknesses,
            &mut self.state.weaknesses,
            &mut failures,
        );

        // Only a total failure surfaces as a dashboard error; anything less
        // keeps whatever mix of fresh and previous data we have.
        if failures.len() == EntityKind::ALL.len() {
            self.state.error = Some(failures.join("; "));
        }
        self.state.loading = false;

        info!(
            user_id = %self.user_id,
            failed = failures.len(),
            "dashboard load complete"
        );
    }
}

fn record_failure(kind: EntityKind, error: ApiError, failures: &mut Vec<String>) {
    warn!(entity = %kind, error = %error, "fetch failed; keeping previous value");
    failures.push(format!("{}: {}", kind, error));
}

fn merge_collection<T: Clone>(
    cache: &DataCache,
    kind: EntityKind,
    user_id: &str,
    result: Result<Vec<T>, ApiError>,
    wrap: fn(Vec<T>) -> CacheValue,
    target: &mut Vec<T>,
    failures: &mut Vec<String>,
) {
    match result {
        Ok(data) => {
            cache.set(&kind.cache_key(user_id), wrap(data.clone()), None);
            *target = data;
            debug!(entity = %kind, count = target.len(), "fetched");
        }
        Err(e) => record_failure(kind, e, failures),
    }
}

// ============================================================================
// Tests
// ============================================================================
